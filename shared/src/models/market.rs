//! Market price models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Crops offered in the market outlook pick list
pub const CROPS: [&str; 5] = ["Maize", "Beans", "Banana", "Tomato", "Onion"];

/// Markets offered in the market outlook pick list
pub const MARKETS: [&str; 4] = ["Nairobi", "Mombasa", "Kisumu", "Eldoret"];

/// Lowest price any generated point may take
pub const PRICE_FLOOR_KSH: i64 = 20;

/// Weekly price observation in Kenyan shillings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price_ksh: i64,
}

/// Price history and projection for a crop at a market
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceForecast {
    pub crop: String,
    pub market: String,
    pub horizon_weeks: u32,
    /// Oldest first
    pub history: Vec<PricePoint>,
    /// Nearest first
    pub forecast: Vec<PricePoint>,
}

impl PriceForecast {
    /// Most recent observed price, or zero without history
    pub fn current_price(&self) -> i64 {
        self.history.last().map(|p| p.price_ksh).unwrap_or(0)
    }

    /// Highest projected price
    pub fn peak_price(&self) -> Option<i64> {
        self.forecast.iter().map(|p| p.price_ksh).max()
    }
}

/// Market-timing classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SellRecommendation {
    SellNow,
    Hold,
    Watch,
}

impl SellRecommendation {
    pub fn code(&self) -> &'static str {
        match self {
            SellRecommendation::SellNow => "sell_now",
            SellRecommendation::Hold => "hold",
            SellRecommendation::Watch => "watch",
        }
    }

    /// Text shown under the market outlook chart
    pub fn summary(&self) -> &'static str {
        match self {
            SellRecommendation::SellNow => {
                "Consider selling now. Forecast shows a potential decline."
            }
            SellRecommendation::Hold => "Hold. Prices are expected to improve.",
            SellRecommendation::Watch => "Watch the market. No strong signal detected.",
        }
    }
}

impl std::fmt::Display for SellRecommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
