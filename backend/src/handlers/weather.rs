//! HTTP handlers for weather forecast and advisory endpoints

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use shared::{GpsCoordinates, WeatherSummary};

use crate::error::AppResult;
use crate::services::weather::{AdvisoryReport, WeatherService};
use crate::AppState;

/// Query parameters for a forecast location
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl LocationQuery {
    /// Requested location, falling back to the configured farm
    fn resolve(&self, state: &AppState) -> GpsCoordinates {
        let farm = state.config.farm.location();
        GpsCoordinates::new(
            self.lat.unwrap_or(farm.latitude),
            self.lng.unwrap_or(farm.longitude),
        )
    }
}

fn weather_service(state: &AppState) -> WeatherService {
    WeatherService::new(state.config.simulation.latency())
}

/// Get the 7-day forecast
pub async fn get_weather_forecast(
    State(state): State<AppState>,
    query: Result<Query<LocationQuery>, QueryRejection>,
) -> AppResult<Json<WeatherSummary>> {
    let Query(query) = query?;
    let forecast = weather_service(&state)
        .get_forecast(query.resolve(&state))
        .await?;
    Ok(Json(forecast))
}

/// Get the forecast together with its advisories
pub async fn get_weather_advisories(
    State(state): State<AppState>,
    query: Result<Query<LocationQuery>, QueryRejection>,
) -> AppResult<Json<AdvisoryReport>> {
    let Query(query) = query?;
    let report = weather_service(&state)
        .get_advisories(query.resolve(&state))
        .await?;
    Ok(Json(report))
}
