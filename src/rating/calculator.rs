//! Elo rank computation
//!
//! Pure functions: given a score, the current rank and the opponent's rank,
//! produce the entity's new rank. The K-factor comes from the proficiency
//! tier of the current (pre-update) rank.

use crate::config::rating::{Proficiency, RatingOptions};
use crate::types::{MatchResult, Rank};
use skillratings::elo::EloRating;
use tracing::debug;

/// Probability that an entity at `current_rank` beats one at `opponent_rank`
///
/// `1 / (1 + 10^((opponent - current) / 400))`
pub fn expected_score(current_rank: Rank, opponent_rank: Rank) -> f64 {
    let (expected, _) = skillratings::elo::expected_score(
        &EloRating {
            rating: current_rank as f64,
        },
        &EloRating {
            rating: opponent_rank as f64,
        },
    );
    expected
}

/// New rank after scoring `score` against `opponent_rank`
///
/// An absent `current_rank` is treated as `options.default_rank`. The result
/// is rounded to the nearest integer with halves rounded away from zero.
pub fn compute_new_rank(
    score: f64,
    current_rank: Option<Rank>,
    opponent_rank: Rank,
    options: &RatingOptions,
) -> Rank {
    let current_rank = current_rank.unwrap_or(options.default_rank);

    let expected = expected_score(current_rank, opponent_rank);
    let proficiency = Proficiency::for_rank(current_rank, &options.proficiency_map);
    let coefficient = options.proficiency_map.coefficient(proficiency);

    let new_rank = (current_rank as f64 + coefficient * (score - expected)).round() as Rank;

    debug!(
        current_rank,
        opponent_rank,
        score,
        expected,
        coefficient,
        %proficiency,
        new_rank,
        "Computed new rank"
    );

    new_rank
}

/// [`compute_new_rank`] for a named result
pub fn compute_new_rank_for_result(
    result: MatchResult,
    current_rank: Option<Rank>,
    opponent_rank: Rank,
    options: &RatingOptions,
) -> Rank {
    compute_new_rank(result.score(), current_rank, opponent_rank, options)
}

pub fn compute_new_rank_for_win(
    current_rank: Option<Rank>,
    opponent_rank: Rank,
    options: &RatingOptions,
) -> Rank {
    compute_new_rank_for_result(MatchResult::Win, current_rank, opponent_rank, options)
}

pub fn compute_new_rank_for_lose(
    current_rank: Option<Rank>,
    opponent_rank: Rank,
    options: &RatingOptions,
) -> Rank {
    compute_new_rank_for_result(MatchResult::Lose, current_rank, opponent_rank, options)
}

pub fn compute_new_rank_for_draw(
    current_rank: Option<Rank>,
    opponent_rank: Rank,
    options: &RatingOptions,
) -> Rank {
    compute_new_rank_for_result(MatchResult::Draw, current_rank, opponent_rank, options)
}
