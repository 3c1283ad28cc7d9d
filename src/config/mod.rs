//! Configuration module for money-tracker
//!
//! - Path resolution (environment override or platform config dir)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
