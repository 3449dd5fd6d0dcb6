//! Forecasting engines
//!
//! Pure, synchronous computations behind the dashboard's weather advisories
//! and market outlook panels. Every operation is total: no input makes them
//! fail or panic.

mod advisory;
mod price;
mod rng;
mod weather;

pub use advisory::*;
pub use price::*;
pub use rng::SeededRng;
pub use weather::*;

use chrono::{Days, NaiveDate};

/// Round to the nearest integer with ties going toward positive infinity
pub(crate) fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Offset a calendar date, clamping at the representable range
pub(crate) fn offset_days(date: NaiveDate, days: i64) -> NaiveDate {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(magnitude).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_days(magnitude).unwrap_or(NaiveDate::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_ties() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(23.953333), 24.0);
        assert_eq!(round_half_up(-7.4), -7.0);
        assert_eq!(round_half_up(-7.6), -8.0);
    }

    #[test]
    fn test_offset_days() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
        assert_eq!(offset_days(date, 2), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(offset_days(date, -28), NaiveDate::from_ymd_opt(2024, 1, 30).unwrap());
        assert_eq!(offset_days(NaiveDate::MAX, 1), NaiveDate::MAX);
    }
}
