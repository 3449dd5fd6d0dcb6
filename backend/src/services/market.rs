//! Market service for price forecasts and sell recommendations

use std::time::Duration;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use shared::{sell_recommendation, weekly_price_forecast, PriceForecast, SellRecommendation};

use crate::error::{AppError, AppResult};

/// Market service backed by the seeded price generator
#[derive(Clone)]
pub struct MarketService {
    latency: Duration,
}

/// Price forecast with the recommendation shown beneath it
#[derive(Debug, Clone, Serialize)]
pub struct MarketOutlook {
    pub forecast: PriceForecast,
    pub recommendation: SellRecommendation,
    pub summary: String,
}

/// Crops and markets offered by the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct MarketCatalog {
    pub crops: Vec<String>,
    pub markets: Vec<String>,
}

impl MarketService {
    /// Create a new MarketService instance
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Weekly price forecast for a crop at a market
    pub async fn get_price_forecast(
        &self,
        crop: &str,
        market: &str,
        horizon_weeks: u32,
    ) -> AppResult<PriceForecast> {
        self.get_price_forecast_from(crop, market, horizon_weeks, Utc::now().date_naive())
            .await
    }

    /// Weekly price forecast relative to `today`
    pub async fn get_price_forecast_from(
        &self,
        crop: &str,
        market: &str,
        horizon_weeks: u32,
        today: NaiveDate,
    ) -> AppResult<PriceForecast> {
        shared::validate_market_name(crop).map_err(|message| AppError::validation("crop", message))?;
        shared::validate_market_name(market)
            .map_err(|message| AppError::validation("market", message))?;
        shared::validate_horizon_weeks(horizon_weeks)
            .map_err(|message| AppError::validation("horizon_weeks", message))?;

        self.simulate_latency().await;

        let forecast = weekly_price_forecast(crop, market, horizon_weeks, today);
        tracing::debug!(
            crop,
            market,
            horizon_weeks,
            history = forecast.history.len(),
            forecast = forecast.forecast.len(),
            "Generated price forecast"
        );

        Ok(forecast)
    }

    /// Forecast, recommendation and its display summary
    pub async fn get_outlook(
        &self,
        crop: &str,
        market: &str,
        horizon_weeks: u32,
    ) -> AppResult<MarketOutlook> {
        let forecast = self.get_price_forecast(crop, market, horizon_weeks).await?;
        let recommendation = sell_recommendation(&forecast);

        tracing::debug!(
            crop,
            market,
            current = forecast.current_price(),
            peak = ?forecast.peak_price(),
            %recommendation,
            "Classified market outlook"
        );

        Ok(MarketOutlook {
            summary: recommendation.summary().to_string(),
            forecast,
            recommendation,
        })
    }

    /// Pick lists for the outlook selectors
    pub fn catalog(&self) -> MarketCatalog {
        MarketCatalog {
            crops: shared::CROPS.iter().map(|c| c.to_string()).collect(),
            markets: shared::MARKETS.iter().map(|m| m.to_string()).collect(),
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}
