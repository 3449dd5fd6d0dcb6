//! Validation utilities for dashboard inputs
//!
//! The engines accept anything; these checks are applied at the HTTP and
//! browser boundaries before a request reaches them.

/// Longest crop or market name accepted
pub const MAX_NAME_LENGTH: usize = 64;

/// Longest forecast horizon accepted, in weeks
pub const MAX_HORIZON_WEEKS: u32 = 52;

/// Validate latitude/longitude are finite and on the globe
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), &'static str> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err("Coordinates must be finite numbers");
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err("Latitude must be between -90 and 90");
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate a crop or market name
pub fn validate_market_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name cannot be empty");
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err("Name is too long");
    }
    Ok(())
}

/// Validate the forecast horizon
pub fn validate_horizon_weeks(weeks: u32) -> Result<(), &'static str> {
    if weeks > MAX_HORIZON_WEEKS {
        return Err("Forecast horizon cannot exceed 52 weeks");
    }
    Ok(())
}
