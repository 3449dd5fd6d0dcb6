//! Weather forecast and advisory models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::GpsCoordinates;

/// One synthetic forecast day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub temp_min_celsius: f64,
    pub temp_max_celsius: f64,
    pub precipitation_mm: f64,
    pub wind_kph: f64,
    pub humidity_percent: f64,
}

/// Seven-day forecast for a location, starting today
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSummary {
    pub location: GpsCoordinates,
    pub days: Vec<DailyForecast>,
}

/// A dated, categorized field-work recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Advisory {
    pub date: NaiveDate,
    pub advisory_type: AdvisoryType,
    pub message: String,
    pub severity: AdvisorySeverity,
}

/// Kinds of advisory windows
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryType {
    PlantingWindow,
    SprayWindow,
    FertilizeWindow,
    /// Declared for clients; no rule currently emits it.
    HarvestWindow,
}

impl AdvisoryType {
    /// Display label used by the advisories panel
    pub fn label(&self) -> &'static str {
        match self {
            AdvisoryType::PlantingWindow => "Planting window",
            AdvisoryType::SprayWindow => "Spraying window",
            AdvisoryType::FertilizeWindow => "Fertilization window",
            AdvisoryType::HarvestWindow => "Harvest window",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AdvisoryType::PlantingWindow => "planting_window",
            AdvisoryType::SprayWindow => "spray_window",
            AdvisoryType::FertilizeWindow => "fertilize_window",
            AdvisoryType::HarvestWindow => "harvest_window",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "planting_window" => Some(AdvisoryType::PlantingWindow),
            "spray_window" => Some(AdvisoryType::SprayWindow),
            "fertilize_window" => Some(AdvisoryType::FertilizeWindow),
            "harvest_window" => Some(AdvisoryType::HarvestWindow),
            _ => None,
        }
    }
}

impl std::fmt::Display for AdvisoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Advisory severity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdvisorySeverity {
    Good,
    Caution,
    Info,
}
