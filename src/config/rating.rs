//! Rating system configuration
//!
//! [`RatingOptions`] bundles the starting rank with the [`ProficiencyMap`]
//! that selects a K-factor per proficiency tier.

use crate::error::EloError;
use crate::types::Rank;
use serde::{Deserialize, Serialize};

/// Default starting rank for entities that have never been rated
pub const DEFAULT_RANK: Rank = 1200;

/// Default boundaries between novice/intermediate and intermediate/pro
pub const DEFAULT_RANK_LIMITS: [Rank; 2] = [1299, 2399];

/// Default K-factors for novice, intermediate and pro
pub const DEFAULT_COEFFICIENTS: [f64; 3] = [30.0, 15.0, 10.0];

/// Proficiency tier of a competitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Novice,
    Intermediate,
    Pro,
}

impl Proficiency {
    /// Tier for a rank. Limits are strict: a rank equal to either limit is
    /// intermediate.
    pub fn for_rank(rank: Rank, map: &ProficiencyMap) -> Self {
        let [lower, upper] = map.rank_limits;
        if rank < lower {
            Proficiency::Novice
        } else if rank > upper {
            Proficiency::Pro
        } else {
            Proficiency::Intermediate
        }
    }
}

impl std::fmt::Display for Proficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Proficiency::Novice => write!(f, "novice"),
            Proficiency::Intermediate => write!(f, "intermediate"),
            Proficiency::Pro => write!(f, "pro"),
        }
    }
}

/// Rank thresholds and the K-factor applied in each tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProficiencyMap {
    /// `[lower, upper]`, must be increasing
    pub rank_limits: [Rank; 2],
    /// `[novice, intermediate, pro]`
    pub coefficients: [f64; 3],
}

impl Default for ProficiencyMap {
    fn default() -> Self {
        Self {
            rank_limits: DEFAULT_RANK_LIMITS,
            coefficients: DEFAULT_COEFFICIENTS,
        }
    }
}

impl ProficiencyMap {
    pub fn coefficient(&self, proficiency: Proficiency) -> f64 {
        match proficiency {
            Proficiency::Novice => self.coefficients[0],
            Proficiency::Intermediate => self.coefficients[1],
            Proficiency::Pro => self.coefficients[2],
        }
    }

    /// K-factor for an entity currently holding `rank`
    pub fn coefficient_for(&self, rank: Rank) -> f64 {
        self.coefficient(Proficiency::for_rank(rank, self))
    }

    /// Validate limits and coefficients
    pub fn validate(&self) -> crate::error::Result<()> {
        let [lower, upper] = self.rank_limits;
        if lower >= upper {
            return Err(EloError::configuration(
                "proficiency_map.rank_limits",
                format!("limits must be increasing, got [{}, {}]", lower, upper),
            )
            .into());
        }

        for coefficient in self.coefficients {
            if !coefficient.is_finite() || coefficient < 0.0 {
                return Err(EloError::configuration(
                    "proficiency_map.coefficients",
                    format!(
                        "coefficients must be finite and non-negative, got {:?}",
                        self.coefficients
                    ),
                )
                .into());
            }
        }

        Ok(())
    }
}

/// Configuration bundle for rank computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingOptions {
    /// Rank assumed for entities without one
    pub default_rank: Rank,
    pub proficiency_map: ProficiencyMap,
}

impl Default for RatingOptions {
    fn default() -> Self {
        Self {
            default_rank: DEFAULT_RANK,
            proficiency_map: ProficiencyMap::default(),
        }
    }
}

impl RatingOptions {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        self.proficiency_map.validate()
    }

    /// Apply overrides on top of these options. Fields left unset in
    /// `overrides` keep their current value.
    pub fn merged(&self, overrides: &RatingOverrides) -> Self {
        Self {
            default_rank: overrides.default_rank.unwrap_or(self.default_rank),
            proficiency_map: ProficiencyMap {
                rank_limits: overrides
                    .rank_limits
                    .unwrap_or(self.proficiency_map.rank_limits),
                coefficients: overrides
                    .coefficients
                    .unwrap_or(self.proficiency_map.coefficients),
            },
        }
    }
}

/// Per-call replacements for individual [`RatingOptions`] fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingOverrides {
    pub default_rank: Option<Rank>,
    pub rank_limits: Option<[Rank; 2]>,
    pub coefficients: Option<[f64; 3]>,
}

impl RatingOverrides {
    pub fn is_empty(&self) -> bool {
        self.default_rank.is_none() && self.rank_limits.is_none() && self.coefficients.is_none()
    }
}
