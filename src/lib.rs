//! Gemini-backed asset tooling for the poker trainer front end: icon
//! generation, UI advisory reports and the `PokerIcon` wrapper component.

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod services;
pub mod telemetry;

pub use config::Settings;
pub use error::{ConfigError, RevampError};
pub use model::catalog::{GenerationRequest, CATALOG};
