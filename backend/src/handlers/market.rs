//! HTTP handlers for market outlook endpoints

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use shared::PriceForecast;
use validator::Validate;

use crate::error::AppResult;
use crate::services::market::{MarketCatalog, MarketOutlook, MarketService};
use crate::AppState;

/// Query parameters selecting a crop, market and horizon
#[derive(Debug, Deserialize, Validate)]
pub struct MarketQuery {
    #[validate(length(min = 1, max = 64))]
    pub crop: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub market: Option<String>,
    #[validate(range(max = 52, message = "Forecast horizon cannot exceed 52 weeks"))]
    pub horizon_weeks: Option<u32>,
}

/// Selection after applying configured defaults
struct MarketSelection {
    crop: String,
    market: String,
    horizon_weeks: u32,
}

impl MarketQuery {
    fn resolve(self, state: &AppState) -> MarketSelection {
        let defaults = &state.config.market;
        MarketSelection {
            crop: self.crop.unwrap_or_else(|| defaults.crop.clone()),
            market: self.market.unwrap_or_else(|| defaults.location.clone()),
            horizon_weeks: self.horizon_weeks.unwrap_or(defaults.horizon_weeks),
        }
    }
}

fn market_service(state: &AppState) -> MarketService {
    MarketService::new(state.config.simulation.latency())
}

/// Get the weekly price forecast
pub async fn get_price_forecast(
    State(state): State<AppState>,
    query: Result<Query<MarketQuery>, QueryRejection>,
) -> AppResult<Json<PriceForecast>> {
    let Query(query) = query?;
    query.validate()?;
    let selection = query.resolve(&state);
    let forecast = market_service(&state)
        .get_price_forecast(&selection.crop, &selection.market, selection.horizon_weeks)
        .await?;
    Ok(Json(forecast))
}

/// Get the forecast with its sell recommendation
pub async fn get_market_outlook(
    State(state): State<AppState>,
    query: Result<Query<MarketQuery>, QueryRejection>,
) -> AppResult<Json<MarketOutlook>> {
    let Query(query) = query?;
    query.validate()?;
    let selection = query.resolve(&state);
    let outlook = market_service(&state)
        .get_outlook(&selection.crop, &selection.market, selection.horizon_weeks)
        .await?;
    Ok(Json(outlook))
}

/// List crops and markets for the outlook selectors
pub async fn get_market_catalog(State(state): State<AppState>) -> Json<MarketCatalog> {
    Json(market_service(&state).catalog())
}
