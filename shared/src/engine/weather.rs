//! Synthetic 7-day weather forecast
//!
//! Stands in for a real weather provider: every value is a deterministic
//! function of the coordinates, the day offset and the start date.

use chrono::{NaiveDate, Utc};

use super::{offset_days, round_half_up};
use crate::models::{DailyForecast, WeatherSummary};
use crate::types::GpsCoordinates;

/// Number of days in a forecast
pub const FORECAST_DAYS: usize = 7;

/// Seed scalar derived from a coordinate pair.
///
/// NaN collapses to zero and infinities saturate, so every input maps to a
/// usable seed.
pub fn location_seed(latitude: f64, longitude: f64) -> u64 {
    round_half_up(latitude * 10.0 + longitude).abs() as u64
}

/// Generate the forecast for `FORECAST_DAYS` days starting at `today`
pub fn generate_forecast(latitude: f64, longitude: f64, today: NaiveDate) -> WeatherSummary {
    let base = location_seed(latitude, longitude) as u128;

    let days = (0..FORECAST_DAYS as u128)
        .map(|i| {
            let precipitation = if (base + i * 3) % 10 < 4 {
                0
            } else {
                (base + i) % 15
            };

            DailyForecast {
                date: offset_days(today, i as i64),
                temp_min_celsius: (16 + (base + i) % 5) as f64,
                temp_max_celsius: (24 + (base + i) % 8) as f64,
                precipitation_mm: precipitation as f64,
                wind_kph: (8 + (base + i * 2) % 20) as f64,
                humidity_percent: (55 + (base + i) % 40) as f64,
            }
        })
        .collect();

    WeatherSummary {
        location: GpsCoordinates::new(latitude, longitude),
        days,
    }
}

/// Forecast starting from the current UTC date
pub fn get_7day_forecast(latitude: f64, longitude: f64) -> WeatherSummary {
    generate_forecast(latitude, longitude, Utc::now().date_naive())
}
