//! Domain types: the validated ballpit configuration and its errors.

pub mod config;
pub mod error;

pub use config::BallpitConfig;
pub use error::ConfigError;
