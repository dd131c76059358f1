use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

/// Weights of each sub-score in the overall match score. Sum to 1.0 by default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skill: f64,
    pub culture: f64,
    pub vibe: f64,
    pub ats: f64,
    pub salary: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 0.35,
            culture: 0.25,
            vibe: 0.20,
            ats: 0.10,
            salary: 0.10,
        }
    }
}

/// Numeric knobs of the match engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    /// Average salary that earns a full salary score. Currency-specific.
    pub salary_ceiling: NonZeroU64,
    /// The overall score never drops below this ...
    overall_floor: u32,
    /// ... nor rises above this. Takes precedence over the floor.
    overall_ceiling: u32,
}

pub const DEFAULT_SALARY_CEILING: u64 = 5_000_000;

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            salary_ceiling: NonZeroU64::new(DEFAULT_SALARY_CEILING).unwrap_or(NonZeroU64::MIN),
            overall_floor: 5,
            overall_ceiling: 98,
        }
    }
}

impl ScoringConfig {
    pub fn with_salary_ceiling(mut self, ceiling: NonZeroU64) -> Self {
        self.salary_ceiling = ceiling;
        self
    }

    /// Weighted blend of the sub-scores, rounded and clamped to the floor/ceiling band.
    pub fn blend(&self, skill: f64, culture: f64, vibe: f64, ats: f64, salary: f64) -> u32 {
        let w = &self.weights;
        let raw = skill * w.skill
            + culture * w.culture
            + vibe * w.vibe
            + ats * w.ats
            + salary * w.salary;
        (raw.round().max(0.0) as u32)
            .max(self.overall_floor)
            .min(self.overall_ceiling)
    }
}
