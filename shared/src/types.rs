//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Default farm location (Nairobi)
    pub fn nairobi() -> Self {
        Self::new(-1.286389, 36.817223)
    }
}

impl Default for GpsCoordinates {
    fn default() -> Self {
        Self::nairobi()
    }
}
