//! Rateable entities
//!
//! Anything with a readable and writable rank can take part in rated
//! matches. Entities that have never been rated report no rank and are
//! treated as holding the configured default.

use crate::config::rating::RatingOptions;
use crate::types::Rank;
use serde::{Deserialize, Serialize};

/// An entity carrying a mutable Elo rank
pub trait Rateable {
    /// Current rank, or `None` if the entity has not been rated yet
    fn rank(&self) -> Option<Rank>;

    fn set_rank(&mut self, rank: Rank);

    /// Current rank, falling back to `default_rank` when unset
    fn rank_or(&self, default_rank: Rank) -> Rank {
        self.rank().unwrap_or(default_rank)
    }
}

impl<T: Rateable + ?Sized> Rateable for Box<T> {
    fn rank(&self) -> Option<Rank> {
        (**self).rank()
    }

    fn set_rank(&mut self, rank: Rank) {
        (**self).set_rank(rank)
    }
}

/// Standalone rank holder for callers without their own entity type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatedEntity {
    rank: Option<Rank>,
}

impl RatedEntity {
    /// Unrated entity; reads resolve to the default rank lazily
    pub fn unrated() -> Self {
        Self { rank: None }
    }

    pub fn with_rank(rank: Rank) -> Self {
        Self { rank: Some(rank) }
    }

    /// Entity assigned the configured starting rank up front
    pub fn with_default_rank(options: &RatingOptions) -> Self {
        Self::with_rank(options.default_rank)
    }

    pub fn is_rated(&self) -> bool {
        self.rank.is_some()
    }
}

impl Rateable for RatedEntity {
    fn rank(&self) -> Option<Rank> {
        self.rank
    }

    fn set_rank(&mut self, rank: Rank) {
        self.rank = Some(rank);
    }
}
