//! WebAssembly module for the Farm Dashboard
//!
//! Provides client-side computation for:
//! - 7-day synthetic weather forecasts
//! - Spray / planting / fertilization advisories
//! - Weekly price forecasts and sell recommendations
//!
//! Structured values cross the boundary as JSON strings.

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// 7-day forecast for a coordinate pair, as JSON
#[wasm_bindgen]
pub fn get_7day_forecast(lat: f64, lng: f64) -> Result<String, JsValue> {
    let today = browser_today().map_err(fail)?;
    forecast_json(lat, lng, today).map_err(fail)
}

/// Advisories for a forecast JSON document, as JSON
#[wasm_bindgen]
pub fn compute_advisories(forecast_json: &str) -> Result<String, JsValue> {
    advisories_json(forecast_json).map_err(fail)
}

/// Weekly price forecast, as JSON. Horizon defaults to 8 weeks; negative
/// values produce an empty projection.
#[wasm_bindgen]
pub fn get_weekly_price_forecast(
    crop: &str,
    market: &str,
    horizon_weeks: Option<i32>,
) -> Result<String, JsValue> {
    let today = browser_today().map_err(fail)?;
    price_forecast_json(crop, market, horizon_weeks, today).map_err(fail)
}

/// `sell_now`, `hold` or `watch` for a price forecast JSON document
#[wasm_bindgen]
pub fn get_sell_recommendation(forecast_json: &str) -> Result<String, JsValue> {
    recommendation_for(forecast_json)
        .map(|rec| rec.code().to_string())
        .map_err(fail)
}

/// Display text for a price forecast JSON document
#[wasm_bindgen]
pub fn sell_recommendation_summary(forecast_json: &str) -> Result<String, JsValue> {
    recommendation_for(forecast_json)
        .map(|rec| rec.summary().to_string())
        .map_err(fail)
}

/// Display label for an advisory type code such as `spray_window`
#[wasm_bindgen]
pub fn advisory_label(advisory_type: &str) -> Option<String> {
    AdvisoryType::from_code(advisory_type).map(|t| t.label().to_string())
}

/// Check a farm location before saving it in settings
#[wasm_bindgen]
pub fn validate_farm_location(lat: f64, lng: f64) -> Result<(), JsValue> {
    validate_coordinates(lat, lng).map_err(|e| fail(e.to_string()))
}

fn forecast_json(lat: f64, lng: f64, today: NaiveDate) -> Result<String, String> {
    to_json(&shared::engine::generate_forecast(lat, lng, today))
}

fn advisories_json(forecast_json: &str) -> Result<String, String> {
    let forecast: WeatherSummary = from_json(forecast_json, "forecast")?;
    to_json(&shared::engine::compute_advisories(&forecast))
}

fn price_forecast_json(
    crop: &str,
    market: &str,
    horizon_weeks: Option<i32>,
    today: NaiveDate,
) -> Result<String, String> {
    let horizon = horizon_weeks
        .map(|weeks| weeks.max(0) as u32)
        .unwrap_or(shared::engine::DEFAULT_HORIZON_WEEKS);
    to_json(&shared::engine::weekly_price_forecast(crop, market, horizon, today))
}

fn recommendation_for(forecast_json: &str) -> Result<SellRecommendation, String> {
    let forecast: PriceForecast = from_json(forecast_json, "price forecast")?;
    Ok(shared::engine::sell_recommendation(&forecast))
}

/// Current calendar date as reported by the browser, in UTC
fn browser_today() -> Result<NaiveDate, String> {
    let iso: String = js_sys::Date::new_0().to_iso_string().into();
    let date = iso.get(..10).unwrap_or_default();
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| format!("Invalid browser date {}: {}", iso, e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization failed: {}", e))
}

fn from_json<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {} JSON: {}", what, e))
}

fn fail(message: String) -> JsValue {
    web_sys::console::warn_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}
