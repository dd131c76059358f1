//! Red-flag lexicon — phrase lists scanned against job descriptions to rate toxicity.
//!
//! The lexicon is configuration, not code: `MatchEngine` receives one at
//! construction and `RedFlagLexicon::default()` carries the stock phrase lists.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const CRITICAL_WEIGHT: i32 = 30;
const WARNING_WEIGHT: i32 = 10;
const POSITIVE_CREDIT: i32 = 5;

/// Toxicity at or above this is red.
const RED_THRESHOLD: i32 = 50;
/// Toxicity at or above this (and below red) is orange.
const ORANGE_THRESHOLD: i32 = 20;
/// Two critical hits are red no matter what the positives offset.
const RED_CRITICAL_COUNT: usize = 2;

const DEFAULT_CRITICAL: &[&str] = &[
    "rockstar",
    "ninja",
    "guru",
    "family",
    "wear many hats",
    "fast-paced",
    "hit the ground running",
];

const DEFAULT_WARNING: &[&str] = &[
    "urgent",
    "asap",
    "immediately",
    "competitive salary",
    "up to",
    "passion",
    "hustle",
];

const DEFAULT_POSITIVE: &[&str] = &[
    "structured",
    "work-life",
    "mentorship",
    "growth",
    "benefits",
    "remote",
    "flexible",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagTier {
    Critical,
    Warning,
    Positive,
}

impl fmt::Display for FlagTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlagTier::Critical => "critical",
            FlagTier::Warning => "warning",
            FlagTier::Positive => "positive",
        };
        f.write_str(name)
    }
}

/// Traffic-light verdict derived from a `FlagScan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagStatus {
    Green,
    Orange,
    Red,
}

#[derive(Debug, Error, PartialEq)]
pub enum LexiconError {
    #[error("{tier} tier contains an empty phrase")]
    EmptyPhrase { tier: FlagTier },

    #[error("phrase '{phrase}' appears in both the {first} and {second} tiers")]
    Overlap {
        phrase: String,
        first: FlagTier,
        second: FlagTier,
    },
}

/// On-disk / wire shape of a lexicon before validation.
#[derive(Debug, Deserialize)]
struct LexiconTiers {
    critical: Vec<String>,
    warning: Vec<String>,
    positive: Vec<String>,
}

/// Three disjoint lowercase phrase sets matched by substring containment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LexiconTiers")]
pub struct RedFlagLexicon {
    critical: Vec<String>,
    warning: Vec<String>,
    positive: Vec<String>,
}

impl TryFrom<LexiconTiers> for RedFlagLexicon {
    type Error = LexiconError;

    fn try_from(tiers: LexiconTiers) -> Result<Self, Self::Error> {
        RedFlagLexicon::new(tiers.critical, tiers.warning, tiers.positive)
    }
}

impl Default for RedFlagLexicon {
    fn default() -> Self {
        let owned = |phrases: &[&str]| phrases.iter().map(|p| p.to_string()).collect();
        Self {
            critical: owned(DEFAULT_CRITICAL),
            warning: owned(DEFAULT_WARNING),
            positive: owned(DEFAULT_POSITIVE),
        }
    }
}

impl RedFlagLexicon {
    /// Builds a lexicon, lowercasing and trimming every phrase.
    ///
    /// Repeats inside one tier collapse to the first occurrence; a phrase
    /// shared by two tiers is an error.
    pub fn new<I, S>(critical: I, warning: I, positive: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let critical = normalize_tier(critical, FlagTier::Critical)?;
        let warning = normalize_tier(warning, FlagTier::Warning)?;
        let positive = normalize_tier(positive, FlagTier::Positive)?;

        let tiers = [
            (FlagTier::Critical, &critical),
            (FlagTier::Warning, &warning),
            (FlagTier::Positive, &positive),
        ];
        for (i, (first, phrases)) in tiers.iter().enumerate() {
            for (second, others) in &tiers[i + 1..] {
                if let Some(shared) = phrases.iter().find(|p| others.contains(p)) {
                    return Err(LexiconError::Overlap {
                        phrase: shared.clone(),
                        first: *first,
                        second: *second,
                    });
                }
            }
        }

        Ok(Self {
            critical,
            warning,
            positive,
        })
    }

    pub fn critical(&self) -> &[String] {
        &self.critical
    }

    pub fn warning(&self) -> &[String] {
        &self.warning
    }

    pub fn positive(&self) -> &[String] {
        &self.positive
    }

    /// Collects every phrase contained in `description`, case-insensitively,
    /// in lexicon order.
    pub fn scan(&self, description: &str) -> FlagScan {
        let text = description.to_lowercase();
        let hits = |phrases: &[String]| {
            phrases
                .iter()
                .filter(|p| text.contains(p.as_str()))
                .cloned()
                .collect::<Vec<_>>()
        };
        FlagScan {
            critical: hits(&self.critical),
            warning: hits(&self.warning),
            positive: hits(&self.positive),
        }
    }
}

fn normalize_tier<I, S>(phrases: I, tier: FlagTier) -> Result<Vec<String>, LexiconError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for phrase in phrases {
        let phrase = phrase.as_ref().trim().to_lowercase();
        if phrase.is_empty() {
            return Err(LexiconError::EmptyPhrase { tier });
        }
        if seen.insert(phrase.clone()) {
            out.push(phrase);
        }
    }
    Ok(out)
}

/// Phrases found in one description, grouped by tier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlagScan {
    pub critical: Vec<String>,
    pub warning: Vec<String>,
    pub positive: Vec<String>,
}

impl FlagScan {
    /// `30·critical + 10·warning − 5·positive`. Not clamped; clean postings go negative.
    pub fn toxicity_score(&self) -> i32 {
        self.critical.len() as i32 * CRITICAL_WEIGHT + self.warning.len() as i32 * WARNING_WEIGHT
            - self.positive.len() as i32 * POSITIVE_CREDIT
    }

    pub fn status(&self) -> FlagStatus {
        let toxicity = self.toxicity_score();
        if toxicity >= RED_THRESHOLD || self.critical.len() >= RED_CRITICAL_COUNT {
            FlagStatus::Red
        } else if toxicity >= ORANGE_THRESHOLD {
            FlagStatus::Orange
        } else {
            FlagStatus::Green
        }
    }
}
