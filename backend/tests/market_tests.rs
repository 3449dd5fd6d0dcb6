//! Market outlook integration tests
//!
//! Tests for the price forecast and sell recommendation including:
//! - Seeded generator reproducibility and seed collisions
//! - Price floor
//! - Recommendation bands

use chrono::NaiveDate;
use proptest::prelude::*;
use shared::{
    market_seed, sell_recommendation, weekly_price_forecast, PriceForecast, PricePoint,
    SellRecommendation, CROPS, MARKETS, PRICE_FLOOR_KSH,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
}

fn forecast_with(current: i64, projected: &[i64]) -> PriceForecast {
    let point = |price_ksh: i64| PricePoint {
        date: today(),
        price_ksh,
    };
    PriceForecast {
        crop: "Maize".to_string(),
        market: "Nairobi".to_string(),
        horizon_weeks: projected.len() as u32,
        history: vec![point(current)],
        forecast: projected.iter().copied().map(point).collect(),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Current 100, peak 115 clears the +10% band
    #[test]
    fn test_hold_when_peak_exceeds_band() {
        let rec = sell_recommendation(&forecast_with(100, &[101, 115, 99]));
        assert_eq!(rec, SellRecommendation::Hold);
    }

    #[test]
    fn test_sell_now_when_peak_declines() {
        let rec = sell_recommendation(&forecast_with(200, &[180, 189, 150]));
        assert_eq!(rec, SellRecommendation::SellNow);
    }

    #[test]
    fn test_watch_inside_band() {
        let rec = sell_recommendation(&forecast_with(200, &[195, 205, 219]));
        assert_eq!(rec, SellRecommendation::Watch);
    }

    #[test]
    fn test_empty_forecast_sells_now() {
        let rec = sell_recommendation(&forecast_with(200, &[]));
        assert_eq!(rec, SellRecommendation::SellNow);
    }

    /// The dashboard's own pick lists
    #[test]
    fn test_catalog_outlooks() {
        let mut seen = Vec::new();
        for crop in CROPS {
            for market in MARKETS {
                let forecast = weekly_price_forecast(crop, market, 8, today());
                assert_eq!(forecast.history.len(), 12);
                assert_eq!(forecast.forecast.len(), 8);
                seen.push(sell_recommendation(&forecast));
            }
        }
        assert_eq!(seen.len(), 20);
        assert!(seen.contains(&SellRecommendation::Hold));
        assert!(seen.contains(&SellRecommendation::Watch));
    }

    /// Seeds depend only on combined name length
    #[test]
    fn test_seed_collisions() {
        assert_eq!(market_seed("Maize", "Nairobi"), 12);
        assert_eq!(market_seed("Beans", "Mombasa"), 12);
        assert_eq!(market_seed("Tomato", "Kisumu"), 12);

        let a = weekly_price_forecast("Maize", "Nairobi", 8, today());
        let b = weekly_price_forecast("Onion", "Eldoret", 8, today());
        assert_eq!(a.history, b.history);
        assert_eq!(a.forecast, b.forecast);
    }

    /// Names are measured in UTF-16 code units
    #[test]
    fn test_seed_counts_utf16_units() {
        assert_eq!(market_seed("Café", "Nyeri"), 9);
        assert_eq!(market_seed("🌽", "Nairobi"), 9);

        let emoji = weekly_price_forecast("🌽", "Nairobi", 8, today());
        let same_length = weekly_price_forecast("ab", "Nairobi", 8, today());
        assert_eq!(emoji.history, same_length.history);
        assert_eq!(emoji.forecast, same_length.forecast);
    }

    #[test]
    fn test_forecast_dates_follow_today() {
        let forecast = weekly_price_forecast("Maize", "Nairobi", 2, today());
        assert_eq!(forecast.history[0].date, NaiveDate::from_ymd_opt(2026, 7, 22).unwrap());
        assert_eq!(forecast.history[11].date, NaiveDate::from_ymd_opt(2026, 10, 7).unwrap());
        assert_eq!(forecast.forecast[0].date, NaiveDate::from_ymd_opt(2026, 10, 21).unwrap());
        assert_eq!(forecast.forecast[1].date, NaiveDate::from_ymd_opt(2026, 10, 28).unwrap());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn name_strategy() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z ]{0,30}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Every generated price respects the floor
        #[test]
        fn prop_price_floor(
            crop in name_strategy(),
            market in name_strategy(),
            horizon in 0u32..=52
        ) {
            let forecast = weekly_price_forecast(&crop, &market, horizon, today());
            for point in forecast.history.iter().chain(forecast.forecast.iter()) {
                prop_assert!(point.price_ksh >= PRICE_FLOOR_KSH);
            }
        }

        /// Same arguments, same output
        #[test]
        fn prop_reproducible(
            crop in name_strategy(),
            market in name_strategy(),
            horizon in 0u32..=52
        ) {
            let first = weekly_price_forecast(&crop, &market, horizon, today());
            let second = weekly_price_forecast(&crop, &market, horizon, today());
            prop_assert_eq!(first, second);
        }

        /// Forecast points stay near the last observed price
        #[test]
        fn prop_forecast_drift_is_bounded(
            crop in name_strategy(),
            market in name_strategy()
        ) {
            let forecast = weekly_price_forecast(&crop, &market, 8, today());
            let anchor = forecast.current_price();
            for (i, point) in forecast.forecast.iter().enumerate() {
                let limit = ((i + 1) as f64 * 7.5).ceil() as i64 + 1;
                prop_assert!((point.price_ksh - anchor).abs() <= limit);
            }
        }

        /// The three bands never overlap for non-negative prices
        #[test]
        fn prop_single_label(
            current in 0i64..10_000,
            peak in 0i64..10_000
        ) {
            let rec = sell_recommendation(&forecast_with(current, &[peak]));
            let current = current as f64;
            let peak = peak as f64;
            match rec {
                SellRecommendation::Hold => prop_assert!(peak > current * 1.1),
                SellRecommendation::SellNow => prop_assert!(peak < current * 0.95),
                SellRecommendation::Watch => {
                    prop_assert!(peak >= current * 0.95 && peak <= current * 1.1)
                }
            }
        }
    }
}
