//! HTTP handlers for the Farm Dashboard API

mod health;
mod market;
mod weather;

pub use health::*;
pub use market::*;
pub use weather::*;
