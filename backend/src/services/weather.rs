//! Weather service for forecasts and field-work advisories

use std::time::Duration;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use shared::{compute_advisories, generate_forecast, Advisory, GpsCoordinates, WeatherSummary};

use crate::error::{AppError, AppResult};

/// Weather service backed by the synthetic forecast generator
#[derive(Clone)]
pub struct WeatherService {
    latency: Duration,
}

/// Forecast together with the advisories derived from it
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryReport {
    pub forecast: WeatherSummary,
    pub advisories: Vec<Advisory>,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Fetch the 7-day forecast for a location
    pub async fn get_forecast(&self, location: GpsCoordinates) -> AppResult<WeatherSummary> {
        self.get_forecast_from(location, Utc::now().date_naive()).await
    }

    /// Fetch the 7-day forecast starting at `today`
    pub async fn get_forecast_from(
        &self,
        location: GpsCoordinates,
        today: NaiveDate,
    ) -> AppResult<WeatherSummary> {
        shared::validate_coordinates(location.latitude, location.longitude)
            .map_err(|message| AppError::validation("location", message))?;

        self.simulate_latency().await;

        let forecast = generate_forecast(location.latitude, location.longitude, today);
        tracing::debug!(
            latitude = location.latitude,
            longitude = location.longitude,
            days = forecast.days.len(),
            "Generated weather forecast"
        );

        Ok(forecast)
    }

    /// Forecast plus advisories for a location
    pub async fn get_advisories(&self, location: GpsCoordinates) -> AppResult<AdvisoryReport> {
        let forecast = self.get_forecast(location).await?;
        let advisories = compute_advisories(&forecast);

        tracing::debug!(
            latitude = location.latitude,
            longitude = location.longitude,
            advisories = advisories.len(),
            "Computed weather advisories"
        );

        Ok(AdvisoryReport {
            forecast,
            advisories,
        })
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}
