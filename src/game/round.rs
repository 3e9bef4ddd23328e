//! Single game round
//!
//! A round owns a secret target and the guesses made against it. It moves
//! from `InProgress` to `Won` on an all-exact evaluation, or to `Lost` once
//! the attempt budget is spent.

use super::GameRecord;
use crate::config::GameConfig;
use crate::core::{Difficulty, EvalError, Evaluation, Word, evaluate};
use rand::prelude::IndexedRandom;
use thiserror::Error;

/// Errors from driving a round
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("round is already over")]
    RoundOver,

    #[error("guess must have {expected} letters, got {got}")]
    WrongLength { expected: usize, got: usize },

    #[error("no {0}-letter words available for a target")]
    NoTargets(usize),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// One game against a single target word
#[derive(Debug, Clone)]
pub struct Round {
    target: Word,
    max_attempts: usize,
    history: Vec<Evaluation>,
    status: RoundStatus,
}

impl Round {
    /// Start a round against `target`
    ///
    /// A budget of zero attempts is raised to one.
    #[must_use]
    pub fn new(target: Word, max_attempts: usize) -> Self {
        Self {
            target,
            max_attempts: max_attempts.max(1),
            history: Vec::new(),
            status: RoundStatus::InProgress,
        }
    }

    /// Start a round with a random target of the configured tier
    ///
    /// # Errors
    /// Returns `RoundError::NoTargets` if `words` has no word of the tier's length.
    pub fn from_config(config: &GameConfig, words: &[Word]) -> Result<Self, RoundError> {
        let length = config.difficulty.word_length();
        let candidates: Vec<&Word> = words.iter().filter(|w| w.len() == length).collect();

        let target = candidates
            .choose(&mut rand::rng())
            .ok_or(RoundError::NoTargets(length))?;

        log::debug!(
            "Starting {} round from {} candidates",
            config.difficulty,
            candidates.len()
        );
        Ok(Self::new((*target).clone(), config.max_attempts))
    }

    /// Submit a guess
    ///
    /// Guesses of the wrong length or with invalid letters are rejected
    /// without using up an attempt.
    ///
    /// # Errors
    /// - `RoundOver` once the round is won or lost
    /// - `WrongLength` if the guess length differs from the target
    /// - `Eval` if the guess is empty or has non-letters
    pub fn submit(&mut self, guess: &str) -> Result<&Evaluation, RoundError> {
        if self.status != RoundStatus::InProgress {
            return Err(RoundError::RoundOver);
        }

        let guess = Word::new(guess)?;
        if guess.len() != self.target.len() {
            return Err(RoundError::WrongLength {
                expected: self.target.len(),
                got: guess.len(),
            });
        }

        let evaluation = evaluate(&guess, &self.target)?;

        if evaluation.is_win() {
            self.status = RoundStatus::Won;
            log::info!("Round won in {} attempts", self.history.len() + 1);
        } else if self.history.len() + 1 >= self.max_attempts {
            self.status = RoundStatus::Lost;
            log::info!("Round lost after {} attempts", self.max_attempts);
        }

        self.history.push(evaluation);
        Ok(&self.history[self.history.len() - 1])
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != RoundStatus::InProgress
    }

    /// The secret word; callers decide when to reveal it
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Tier matching the target length, if any
    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        Difficulty::for_length(self.target.len())
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts.saturating_sub(self.history.len())
    }

    /// Evaluations in the order they were submitted
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Evaluation] {
        &self.history
    }

    /// Summarize a finished round for storage
    ///
    /// Returns `None` while the round is still in progress.
    #[must_use]
    pub fn record(&self, player: &str) -> Option<GameRecord> {
        if !self.is_over() {
            return None;
        }

        Some(GameRecord {
            player: player.to_string(),
            difficulty: self.difficulty(),
            target: self.target.text().to_string(),
            guesses: self.history.iter().map(|e| e.guess().to_string()).collect(),
            attempts: self.history.len(),
            won: self.status == RoundStatus::Won,
        })
    }
}
