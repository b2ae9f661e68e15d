//! Common types used throughout the rating library

use crate::error::EloError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A competitor's skill estimate
pub type Rank = i64;

/// Outcome of a match from the perspective of the entity that experienced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    Win,
    Lose,
    Draw,
}

impl MatchResult {
    /// Score awarded for this result: win 1.0, lose 0.0, draw 0.5
    pub fn score(self) -> f64 {
        match self {
            MatchResult::Win => 1.0,
            MatchResult::Lose => 0.0,
            MatchResult::Draw => 0.5,
        }
    }

    /// The same match seen from the opponent's side
    pub fn inverted(self) -> Self {
        match self {
            MatchResult::Win => MatchResult::Lose,
            MatchResult::Lose => MatchResult::Win,
            MatchResult::Draw => MatchResult::Draw,
        }
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchResult::Win => write!(f, "win"),
            MatchResult::Lose => write!(f, "lose"),
            MatchResult::Draw => write!(f, "draw"),
        }
    }
}

impl FromStr for MatchResult {
    type Err = EloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "win" => Ok(MatchResult::Win),
            "lose" | "loss" => Ok(MatchResult::Lose),
            "draw" => Ok(MatchResult::Draw),
            _ => Err(EloError::InvalidResult {
                value: s.to_string(),
            }),
        }
    }
}

/// Rank movement of both sides after one applied match result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub result: MatchResult,
    pub old_rank: Rank,
    pub new_rank: Rank,
    pub opponent_old_rank: Rank,
    /// Equal to `opponent_old_rank` for one-way updates
    pub opponent_new_rank: Rank,
    pub opponent_updated: bool,
}

impl MatchOutcome {
    pub fn rank_delta(&self) -> Rank {
        self.new_rank - self.old_rank
    }

    pub fn opponent_rank_delta(&self) -> Rank {
        self.opponent_new_rank - self.opponent_old_rank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_scores() {
        assert_eq!(MatchResult::Win.score(), 1.0);
        assert_eq!(MatchResult::Lose.score(), 0.0);
        assert_eq!(MatchResult::Draw.score(), 0.5);
    }

    #[test]
    fn test_inverted_score_complements() {
        for result in [MatchResult::Win, MatchResult::Lose, MatchResult::Draw] {
            assert_eq!(result.inverted().score(), 1.0 - result.score());
        }
    }

    #[test]
    fn test_parse_result() {
        assert_eq!("win".parse::<MatchResult>().unwrap(), MatchResult::Win);
        assert_eq!(" Lose ".parse::<MatchResult>().unwrap(), MatchResult::Lose);
        assert_eq!("loss".parse::<MatchResult>().unwrap(), MatchResult::Lose);
        assert_eq!("DRAW".parse::<MatchResult>().unwrap(), MatchResult::Draw);
    }

    #[test]
    fn test_parse_unknown_result() {
        let err = "forfeit".parse::<MatchResult>().unwrap_err();
        assert_eq!(
            err,
            EloError::InvalidResult {
                value: "forfeit".to_string()
            }
        );
    }

    #[test]
    fn test_result_serde_names() {
        let json = serde_json::to_string(&MatchResult::Draw).unwrap();
        assert_eq!(json, "\"draw\"");

        let parsed: MatchResult = serde_json::from_str("\"win\"").unwrap();
        assert_eq!(parsed, MatchResult::Win);
    }
}
