use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::JobPosting;
use crate::scoring::{FlagStatus, MatchAnalysis};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeOutcome {
    /// Right-swipe accepted; the posting was saved and the deck advanced.
    Matched,
    /// Left-swipe; the deck advanced.
    Passed,
    /// Right-swipe on a red posting held back for confirmation; the deck did not move.
    ToxicityWarning,
}

#[derive(Debug, Error, PartialEq)]
pub enum SwipeError {
    #[error("deck is finished; start a new session")]
    DeckFinished,

    #[error("session position {position} is outside a deck of {total} postings")]
    OutOfRange { position: usize, total: usize },
}

/// A saved right-swipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedJob {
    pub job_id: u32,
    pub company: String,
    pub title: String,
    pub overall: u32,
    pub matched_at: DateTime<Utc>,
}

/// Progress through one pass of the deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwipeSession {
    pub id: Uuid,
    /// Index of the card currently shown.
    pub position: usize,
    #[serde(default)]
    pub matches: Vec<MatchedJob>,
    /// Posting id warned about by the last right-swipe on a red card. Only a
    /// second right-swipe on that same posting confirms it.
    #[serde(default)]
    pub warning_for: Option<u32>,
    #[serde(default)]
    pub finished: bool,
}

impl SwipeSession {
    /// Starts at the first card. An empty deck is finished from the outset.
    pub fn start(deck_len: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            position: 0,
            matches: Vec::new(),
            warning_for: None,
            finished: deck_len == 0,
        }
    }

    /// Fails if the session cannot be applied to a deck of `deck_len` cards.
    pub fn check(&self, deck_len: usize) -> Result<(), SwipeError> {
        if self.finished {
            return Err(SwipeError::DeckFinished);
        }
        if self.position >= deck_len {
            return Err(SwipeError::OutOfRange {
                position: self.position,
                total: deck_len,
            });
        }
        Ok(())
    }

    /// Applies a swipe on the current card (`job`, scored as `analysis`).
    pub fn swipe(
        &mut self,
        direction: SwipeDirection,
        job: &JobPosting,
        analysis: &MatchAnalysis,
        deck_len: usize,
    ) -> Result<SwipeOutcome, SwipeError> {
        self.check(deck_len)?;

        let outcome = match direction {
            SwipeDirection::Right
                if analysis.flag_status == FlagStatus::Red && self.warning_for != Some(job.id) =>
            {
                self.warning_for = Some(job.id);
                return Ok(SwipeOutcome::ToxicityWarning);
            }
            SwipeDirection::Right => {
                self.matches.push(MatchedJob {
                    job_id: job.id,
                    company: job.company.clone(),
                    title: job.title.clone(),
                    overall: analysis.overall,
                    matched_at: Utc::now(),
                });
                SwipeOutcome::Matched
            }
            SwipeDirection::Left => SwipeOutcome::Passed,
        };

        self.warning_for = None;
        self.position += 1;
        self.finished = self.position >= deck_len;
        Ok(outcome)
    }

    /// Backs out of a pending toxicity warning without moving the deck.
    pub fn dismiss_warning(&mut self) {
        self.warning_for = None;
    }
}
