//! Synthetic weekly price history, forecast and sell recommendation

use chrono::{NaiveDate, Utc};

use super::{offset_days, round_half_up, SeededRng};
use crate::models::{PriceForecast, PricePoint, SellRecommendation, PRICE_FLOOR_KSH};

/// Weeks of generated history
pub const HISTORY_WEEKS: usize = 12;

/// Forecast horizon used when the caller does not pick one
pub const DEFAULT_HORIZON_WEEKS: u32 = 8;

/// Generator seed for a crop/market pair.
///
/// Names are measured in UTF-16 code units, so characters outside the
/// Basic Multilingual Plane count twice. Only the lengths contribute, so
/// pairs with the same combined length (e.g. "Maize"/"Nairobi" and
/// "Beans"/"Mombasa") share a series.
pub fn market_seed(crop: &str, market: &str) -> u64 {
    (crop.encode_utf16().count() + market.encode_utf16().count()) as u64
}

/// Build history and forecast for `crop` at `market` relative to `today`.
///
/// The generator is reseeded on every call, so identical arguments always
/// produce identical output.
pub fn weekly_price_forecast(
    crop: &str,
    market: &str,
    horizon_weeks: u32,
    today: NaiveDate,
) -> PriceForecast {
    let mut rng = SeededRng::new(market_seed(crop, market));
    let base = 80 + round_half_up(rng.next_f64() * 40.0) as i64 * 10;

    let history: Vec<PricePoint> = (0..HISTORY_WEEKS as i64)
        .map(|i| {
            let swing = round_half_up((rng.next_f64() - 0.5) * 20.0) as i64 * 10;
            PricePoint {
                date: offset_days(today, -(HISTORY_WEEKS as i64 - i) * 7),
                price_ksh: (base + swing).max(PRICE_FLOOR_KSH),
            }
        })
        .collect();

    // Every forecast point drifts from the same anchor.
    let anchor = history.last().map(|p| p.price_ksh).unwrap_or(base) as f64;

    let forecast = (0..horizon_weeks as i64)
        .map(|i| {
            let drift = (i + 1) as f64 * (rng.next_f64() - 0.5) * 15.0;
            PricePoint {
                date: offset_days(today, (i + 1) * 7),
                price_ksh: (round_half_up(anchor + drift) as i64).max(PRICE_FLOOR_KSH),
            }
        })
        .collect();

    PriceForecast {
        crop: crop.to_string(),
        market: market.to_string(),
        horizon_weeks,
        history,
        forecast,
    }
}

/// Forecast relative to the current UTC date, defaulting to an 8-week horizon
pub fn get_weekly_price_forecast(
    crop: &str,
    market: &str,
    horizon_weeks: Option<u32>,
) -> PriceForecast {
    weekly_price_forecast(
        crop,
        market,
        horizon_weeks.unwrap_or(DEFAULT_HORIZON_WEEKS),
        Utc::now().date_naive(),
    )
}

/// Compare the projected peak with the current price.
///
/// Hold above +10%, sell below -5%, watch in between. An empty forecast has
/// no peak and classifies as sell now.
pub fn sell_recommendation(forecast: &PriceForecast) -> SellRecommendation {
    let current = forecast.current_price() as f64;
    let Some(peak) = forecast.peak_price().map(|p| p as f64) else {
        return SellRecommendation::SellNow;
    };

    if peak > current * 1.1 {
        SellRecommendation::Hold
    } else if peak < current * 0.95 {
        SellRecommendation::SellNow
    } else {
        SellRecommendation::Watch
    }
}
