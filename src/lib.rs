//! elo-rank - Elo rating updates for rateable entities
//!
//! This crate computes new ranks after a match using the Elo formula with a
//! K-factor chosen by proficiency tier, and applies results to pairs of
//! entities implementing [`Rateable`].

pub mod config;
pub mod error;
pub mod rating;
pub mod types;

// Re-export commonly used types and traits
pub use error::{EloError, Result};
pub use types::*;

// Re-export key components
pub use config::{ProficiencyMap, RatingOptions, RatingOverrides};
pub use rating::{EloUpdater, Rateable, RateableExt, RatedEntity, UpdateOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
