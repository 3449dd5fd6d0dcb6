//! Domain models for the Farm Dashboard

mod market;
mod weather;

pub use market::*;
pub use weather::*;
