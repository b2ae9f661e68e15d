//! Configuration management for elo-rank
//!
//! Rating options, plus the application settings used by the command line
//! tool (environment variables, TOML files, validation).

pub mod app;
pub mod rating;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings};
pub use rating::{Proficiency, ProficiencyMap, RatingOptions, RatingOverrides};
