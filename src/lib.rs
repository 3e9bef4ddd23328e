//! Wordle Round
//!
//! Wordle-style guess evaluation, single-round game state, and the glue a
//! small game backend needs around them.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_round::core::{evaluate, Verdict, Word};
//!
//! let guess = Word::new("nonn").unwrap();
//! let target = Word::new("anno").unwrap();
//!
//! let eval = evaluate(&guess, &target).unwrap();
//! assert_eq!(
//!     eval.verdicts(),
//!     &[Verdict::Present, Verdict::Present, Verdict::Exact, Verdict::Absent]
//! );
//! assert!(!eval.is_win());
//! ```

// Core domain types
pub mod core;

// Game rounds and records
pub mod game;

// Request boundary
pub mod api;

// Record storage
pub mod store;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod config;
pub mod logging;
