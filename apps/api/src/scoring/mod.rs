// Match scoring: skill overlap, red-flag scan, culture/vibe/ATS/salary sub-scores.
// Everything here is synchronous and pure; handlers call straight into it.

pub mod engine;
pub mod handlers;
pub mod lexicon;
pub mod skills;
pub mod weights;

pub use engine::{MatchAnalysis, MatchEngine, RankedMatch};
pub use lexicon::{FlagStatus, RedFlagLexicon};
pub use weights::ScoringConfig;
