//! Business logic services for the Farm Dashboard

pub mod market;
pub mod weather;

pub use market::MarketService;
pub use weather::WeatherService;
