//! Route definitions for the Farm Dashboard API

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Weather forecast and advisories
        .nest("/weather", weather_routes())
        // Market price outlook
        .nest("/market", market_routes())
}

/// Weather routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/forecast", get(handlers::get_weather_forecast))
        .route("/advisories", get(handlers::get_weather_advisories))
}

/// Market routes
fn market_routes() -> Router<AppState> {
    Router::new()
        .route("/forecast", get(handlers::get_price_forecast))
        .route("/outlook", get(handlers::get_market_outlook))
        .route("/catalog", get(handlers::get_market_catalog))
}
