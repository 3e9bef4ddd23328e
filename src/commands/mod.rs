//! Command implementations

pub mod analyze;
pub mod check;
pub mod play;
pub mod scores;

pub use analyze::{AnalysisResult, analyze_guess};
pub use check::{check_guess, check_guess_response};
pub use play::{PlayOutcome, run_play};
pub use scores::load_scores;
