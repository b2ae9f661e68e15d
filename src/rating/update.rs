//! Pairwise update protocol
//!
//! Applies a match result to two rateable entities. Both sides are computed
//! from the ranks they held before the call, so the opponent's update never
//! sees the already-updated rank of the entity that reported the result.

use crate::config::rating::{RatingOptions, RatingOverrides};
use crate::error::Result;
use crate::rating::calculator::compute_new_rank;
use crate::rating::rateable::Rateable;
use crate::types::{MatchOutcome, MatchResult};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::{info, warn};

/// Per-call options for [`EloUpdater::apply_result`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateOptions {
    /// Only update the entity reporting the result
    pub one_way: bool,
    /// Replacements for the updater's configured rating options
    pub overrides: RatingOverrides,
}

impl UpdateOptions {
    pub fn one_way() -> Self {
        Self {
            one_way: true,
            ..Default::default()
        }
    }

    pub fn with_overrides(mut self, overrides: RatingOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Applies match results to pairs of [`Rateable`] entities using one
/// validated set of rating options
#[derive(Debug, Clone, Default)]
pub struct EloUpdater {
    options: RatingOptions,
}

impl EloUpdater {
    /// Create an updater, rejecting malformed configuration
    pub fn new(options: RatingOptions) -> Result<Self> {
        if let Err(e) = options.validate() {
            warn!("Rejected rating configuration: {}", e);
            return Err(e);
        }

        Ok(Self { options })
    }

    pub fn options(&self) -> &RatingOptions {
        &self.options
    }

    /// Options for one call: the configured options with `overrides` applied
    pub fn effective_options(
        &self,
        overrides: &RatingOverrides,
    ) -> Result<Cow<'_, RatingOptions>> {
        if overrides.is_empty() {
            return Ok(Cow::Borrowed(&self.options));
        }

        let merged = self.options.merged(overrides);
        if let Err(e) = merged.validate() {
            warn!("Rejected rating overrides: {}", e);
            return Err(e);
        }
        Ok(Cow::Owned(merged))
    }

    /// Update `entity` (and `opponent`, unless one-way) for `result`, which
    /// is reported from `entity`'s perspective.
    ///
    /// Invalid overrides fail before either entity is touched.
    pub fn apply_result<S, O>(
        &self,
        entity: &mut S,
        opponent: &mut O,
        result: MatchResult,
        update: &UpdateOptions,
    ) -> Result<MatchOutcome>
    where
        S: Rateable + ?Sized,
        O: Rateable + ?Sized,
    {
        let options = self.effective_options(&update.overrides)?;
        let score = result.score();

        let old_rank = entity.rank_or(options.default_rank);
        let opponent_old_rank = opponent.rank_or(options.default_rank);

        let new_rank = compute_new_rank(score, Some(old_rank), opponent_old_rank, &options);
        entity.set_rank(new_rank);

        let opponent_new_rank = if update.one_way {
            opponent_old_rank
        } else {
            let rank =
                compute_new_rank(1.0 - score, Some(opponent_old_rank), old_rank, &options);
            opponent.set_rank(rank);
            rank
        };

        info!(
            %result,
            old_rank,
            new_rank,
            opponent_old_rank,
            opponent_new_rank,
            one_way = update.one_way,
            "Applied match result"
        );

        Ok(MatchOutcome {
            result,
            old_rank,
            new_rank,
            opponent_old_rank,
            opponent_new_rank,
            opponent_updated: !update.one_way,
        })
    }

    pub fn win<S, O>(
        &self,
        entity: &mut S,
        opponent: &mut O,
        update: &UpdateOptions,
    ) -> Result<MatchOutcome>
    where
        S: Rateable + ?Sized,
        O: Rateable + ?Sized,
    {
        self.apply_result(entity, opponent, MatchResult::Win, update)
    }

    pub fn lose<S, O>(
        &self,
        entity: &mut S,
        opponent: &mut O,
        update: &UpdateOptions,
    ) -> Result<MatchOutcome>
    where
        S: Rateable + ?Sized,
        O: Rateable + ?Sized,
    {
        self.apply_result(entity, opponent, MatchResult::Lose, update)
    }

    pub fn draw<S, O>(
        &self,
        entity: &mut S,
        opponent: &mut O,
        update: &UpdateOptions,
    ) -> Result<MatchOutcome>
    where
        S: Rateable + ?Sized,
        O: Rateable + ?Sized,
    {
        self.apply_result(entity, opponent, MatchResult::Draw, update)
    }
}

/// Win/lose/draw methods on every [`Rateable`]
pub trait RateableExt: Rateable {
    fn elo_update<O: Rateable + ?Sized>(
        &mut self,
        opponent: &mut O,
        result: MatchResult,
        updater: &EloUpdater,
        update: &UpdateOptions,
    ) -> Result<MatchOutcome> {
        updater.apply_result(self, opponent, result, update)
    }

    fn elo_win<O: Rateable + ?Sized>(
        &mut self,
        opponent: &mut O,
        updater: &EloUpdater,
        update: &UpdateOptions,
    ) -> Result<MatchOutcome> {
        self.elo_update(opponent, MatchResult::Win, updater, update)
    }

    fn elo_lose<O: Rateable + ?Sized>(
        &mut self,
        opponent: &mut O,
        updater: &EloUpdater,
        update: &UpdateOptions,
    ) -> Result<MatchOutcome> {
        self.elo_update(opponent, MatchResult::Lose, updater, update)
    }

    fn elo_draw<O: Rateable + ?Sized>(
        &mut self,
        opponent: &mut O,
        updater: &EloUpdater,
        update: &UpdateOptions,
    ) -> Result<MatchOutcome> {
        self.elo_update(opponent, MatchResult::Draw, updater, update)
    }
}

impl<T: Rateable + ?Sized> RateableExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EloError;
    use crate::rating::rateable::RatedEntity;

    #[test]
    fn test_two_way_win_from_default_ranks() {
        let updater = EloUpdater::default();
        let mut a = RatedEntity::with_rank(1200);
        let mut b = RatedEntity::with_rank(1200);

        let outcome = updater
            .win(&mut a, &mut b, &UpdateOptions::default())
            .unwrap();

        assert_eq!(a.rank(), Some(1215));
        assert_eq!(b.rank(), Some(1185));
        assert_eq!(outcome.rank_delta(), 15);
        assert_eq!(outcome.opponent_rank_delta(), -15);
        assert!(outcome.opponent_updated);
    }

    #[test]
    fn test_one_way_leaves_opponent_untouched() {
        let updater = EloUpdater::default();
        let mut a = RatedEntity::with_rank(1200);
        let mut b = RatedEntity::with_rank(1200);

        let outcome = updater
            .win(&mut a, &mut b, &UpdateOptions::one_way())
            .unwrap();

        assert_eq!(a.rank(), Some(1215));
        assert_eq!(b.rank(), Some(1200));
        assert_eq!(outcome.opponent_new_rank, 1200);
        assert!(!outcome.opponent_updated);
    }

    #[test]
    fn test_one_way_does_not_assign_unrated_opponent() {
        let updater = EloUpdater::default();
        let mut a = RatedEntity::with_rank(1200);
        let mut b = RatedEntity::unrated();

        updater
            .lose(&mut a, &mut b, &UpdateOptions::one_way())
            .unwrap();

        assert_eq!(a.rank(), Some(1185));
        assert!(!b.is_rated());
    }

    #[test]
    fn test_opponent_uses_pre_update_rank() {
        let updater = EloUpdater::default();
        let mut a = RatedEntity::with_rank(1400);
        let mut b = RatedEntity::with_rank(1600);

        updater
            .win(&mut a, &mut b, &UpdateOptions::default())
            .unwrap();

        // Computed against 1400, not the updated 1411
        assert_eq!(a.rank(), Some(1411));
        assert_eq!(b.rank(), Some(1589));
    }

    #[test]
    fn test_unrated_entities_start_at_default() {
        let updater = EloUpdater::default();
        let mut a = RatedEntity::unrated();
        let mut b = RatedEntity::unrated();

        let outcome = updater
            .win(&mut a, &mut b, &UpdateOptions::default())
            .unwrap();

        assert_eq!(outcome.old_rank, 1200);
        assert_eq!(outcome.opponent_old_rank, 1200);
        assert_eq!(a.rank(), Some(1215));
        assert_eq!(b.rank(), Some(1185));
    }

    #[test]
    fn test_repeated_draws_are_stable() {
        let updater = EloUpdater::default();
        let mut a = RatedEntity::with_rank(1750);
        let mut b = RatedEntity::with_rank(1750);

        for _ in 0..100 {
            updater
                .draw(&mut a, &mut b, &UpdateOptions::default())
                .unwrap();
        }

        assert_eq!(a.rank(), Some(1750));
        assert_eq!(b.rank(), Some(1750));
    }

    #[test]
    fn test_overrides_apply_per_call() {
        let updater = EloUpdater::default();
        let mut a = RatedEntity::unrated();
        let mut b = RatedEntity::unrated();

        let update = UpdateOptions::default().with_overrides(RatingOverrides {
            default_rank: Some(1500),
            coefficients: Some([40.0, 20.0, 10.0]),
            ..Default::default()
        });

        updater.win(&mut a, &mut b, &update).unwrap();

        // 1500 is intermediate under the default limits: 1500 + 20 * 0.5
        assert_eq!(a.rank(), Some(1510));
        assert_eq!(b.rank(), Some(1490));
        assert_eq!(updater.options().default_rank, 1200);
    }

    #[test]
    fn test_invalid_overrides_leave_entities_untouched() {
        let updater = EloUpdater::default();
        let mut a = RatedEntity::with_rank(1200);
        let mut b = RatedEntity::with_rank(1200);

        let update = UpdateOptions::default().with_overrides(RatingOverrides {
            rank_limits: Some([2000, 1000]),
            ..Default::default()
        });

        let err = updater.win(&mut a, &mut b, &update).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EloError>(),
            Some(EloError::ConfigurationError { .. })
        ));
        assert_eq!(a.rank(), Some(1200));
        assert_eq!(b.rank(), Some(1200));
    }

    #[test]
    fn test_new_rejects_invalid_options() {
        let mut options = RatingOptions::default();
        options.proficiency_map.rank_limits = [1299, 1299];
        assert!(EloUpdater::new(options).is_err());
    }

    #[test]
    fn test_effective_options_borrow_without_overrides() {
        let updater = EloUpdater::default();
        let options = updater
            .effective_options(&RatingOverrides::default())
            .unwrap();
        assert!(matches!(options, Cow::Borrowed(_)));
    }

    #[test]
    fn test_extension_methods() {
        let updater = EloUpdater::default();
        let mut a = RatedEntity::with_rank(1200);
        let mut b = RatedEntity::with_rank(1200);

        a.elo_lose(&mut b, &updater, &UpdateOptions::default())
            .unwrap();
        assert_eq!(a.rank(), Some(1185));
        assert_eq!(b.rank(), Some(1215));

        a.elo_draw(&mut b, &updater, &UpdateOptions::one_way())
            .unwrap();
        // 1185 vs 1215: underdog gains from a draw
        assert!(a.rank().unwrap() > 1185);
        assert_eq!(b.rank(), Some(1215));
    }

    #[test]
    fn test_mixed_entity_types() {
        let updater = EloUpdater::default();
        let mut a = RatedEntity::with_rank(1200);
        let mut b: Box<dyn Rateable> = Box::new(RatedEntity::with_rank(1200));

        a.elo_win(b.as_mut(), &updater, &UpdateOptions::default())
            .unwrap();
        assert_eq!(a.rank(), Some(1215));
        assert_eq!(b.rank(), Some(1185));
    }
}
