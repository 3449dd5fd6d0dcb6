//! Threshold rules that turn a forecast into field-work advisories

use crate::models::{Advisory, AdvisorySeverity, AdvisoryType, DailyForecast, WeatherSummary};

/// A single per-day advisory rule
pub trait AdvisoryRule: Send + Sync {
    fn advisory_type(&self) -> AdvisoryType;
    fn severity(&self) -> AdvisorySeverity;
    fn message(&self) -> &'static str;
    fn applies(&self, day: &DailyForecast) -> bool;

    fn evaluate(&self, day: &DailyForecast) -> Option<Advisory> {
        self.applies(day).then(|| Advisory {
            date: day.date,
            advisory_type: self.advisory_type(),
            message: self.message().to_string(),
            severity: self.severity(),
        })
    }
}

/// Low wind and no rain
pub struct SprayWindowRule;

impl AdvisoryRule for SprayWindowRule {
    fn advisory_type(&self) -> AdvisoryType {
        AdvisoryType::SprayWindow
    }

    fn severity(&self) -> AdvisorySeverity {
        AdvisorySeverity::Good
    }

    fn message(&self) -> &'static str {
        "Good spraying conditions (low wind, no rain expected)."
    }

    fn applies(&self, day: &DailyForecast) -> bool {
        day.wind_kph < 15.0 && day.precipitation_mm < 1.0
    }
}

/// Moderate rain and moderate temperatures
pub struct PlantingWindowRule;

impl AdvisoryRule for PlantingWindowRule {
    fn advisory_type(&self) -> AdvisoryType {
        AdvisoryType::PlantingWindow
    }

    fn severity(&self) -> AdvisorySeverity {
        AdvisorySeverity::Good
    }

    fn message(&self) -> &'static str {
        "Favorable planting window (adequate moisture expected)."
    }

    fn applies(&self, day: &DailyForecast) -> bool {
        (2.0..=10.0).contains(&day.precipitation_mm) && day.temp_max_celsius <= 30.0
    }
}

/// No heavy rain and humidity below 85%
pub struct FertilizeWindowRule;

impl AdvisoryRule for FertilizeWindowRule {
    fn advisory_type(&self) -> AdvisoryType {
        AdvisoryType::FertilizeWindow
    }

    fn severity(&self) -> AdvisorySeverity {
        AdvisorySeverity::Info
    }

    fn message(&self) -> &'static str {
        "Suitable for fertilization (low runoff risk)."
    }

    fn applies(&self, day: &DailyForecast) -> bool {
        day.precipitation_mm < 5.0 && day.humidity_percent < 85.0
    }
}

/// Ordered rule set evaluated against each forecast day
pub struct AdvisoryEngine {
    rules: Vec<Box<dyn AdvisoryRule>>,
}

impl AdvisoryEngine {
    pub fn new() -> Self {
        // Evaluation order is also output order within a day.
        let rules: Vec<Box<dyn AdvisoryRule>> = vec![
            Box::new(SprayWindowRule),
            Box::new(PlantingWindowRule),
            Box::new(FertilizeWindowRule),
        ];

        Self { rules }
    }

    /// Advisories in day order, then rule order
    pub fn evaluate(&self, forecast: &WeatherSummary) -> Vec<Advisory> {
        forecast
            .days
            .iter()
            .flat_map(|day| self.rules.iter().filter_map(move |rule| rule.evaluate(day)))
            .collect()
    }

    pub fn rule_types(&self) -> Vec<AdvisoryType> {
        self.rules.iter().map(|r| r.advisory_type()).collect()
    }
}

impl Default for AdvisoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate the default rule set
pub fn compute_advisories(forecast: &WeatherSummary) -> Vec<Advisory> {
    AdvisoryEngine::new().evaluate(forecast)
}
