//! Shared types, models and forecasting engines for the Farm Dashboard
//!
//! This crate contains the weather-advisory and price-forecast engines used
//! by the backend and by the browser dashboard (via WASM).

pub mod engine;
pub mod models;
pub mod types;
pub mod validation;

pub use engine::*;
pub use models::*;
pub use types::*;
pub use validation::*;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_wire_names_are_snake_case() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        let forecast = generate_forecast(-1.286389, 36.817223, today);
        let advisories = compute_advisories(&forecast);

        let json = serde_json::to_value(&advisories[0]).unwrap();
        assert_eq!(json["advisory_type"], "planting_window");
        assert_eq!(json["severity"], "good");
        assert_eq!(json["date"], "2026-10-14");

        let day = serde_json::to_value(&forecast.days[0]).unwrap();
        assert_eq!(day["precipitation_mm"], 9.0);

        let rec = serde_json::to_value(SellRecommendation::SellNow).unwrap();
        assert_eq!(rec, "sell_now");
    }

    #[test]
    fn test_labels() {
        assert_eq!(AdvisoryType::SprayWindow.label(), "Spraying window");
        assert_eq!(AdvisoryType::HarvestWindow.to_string(), "Harvest window");
        assert_eq!(
            AdvisoryType::from_code("fertilize_window"),
            Some(AdvisoryType::FertilizeWindow)
        );
        assert_eq!(AdvisoryType::from_code("weeding"), None);
        assert_eq!(
            SellRecommendation::Hold.summary(),
            "Hold. Prices are expected to improve."
        );
        assert_eq!(SellRecommendation::Watch.to_string(), "watch");
    }
}
