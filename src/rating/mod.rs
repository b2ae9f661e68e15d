//! Elo rating with proficiency-tiered K-factors
//!
//! This module provides the pure rank calculator, the [`Rateable`] entity
//! interface and the pairwise update protocol built on top of them.

pub mod calculator;
pub mod rateable;
pub mod update;

// Re-export commonly used types
pub use calculator::{
    compute_new_rank, compute_new_rank_for_draw, compute_new_rank_for_lose,
    compute_new_rank_for_result, compute_new_rank_for_win, expected_score,
};
pub use rateable::{Rateable, RatedEntity};
pub use update::{EloUpdater, RateableExt, UpdateOptions};
