//! Interactive round
//!
//! Text-based game loop over any line reader and writer, so the same loop
//! serves the terminal and tests.

use crate::game::{GameRecord, Round, RoundStatus};
use crate::output::formatters::evaluation_tiles;
use crate::store::RecordStore;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// How an interactive round ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Round finished and its record was stored
    Finished(GameRecord),
    /// Player quit or input ran out before the round finished
    Abandoned,
}

/// Play `round` reading guesses from `input`
///
/// Invalid guesses are reported and do not use an attempt. A finished round
/// is appended to `store`.
///
/// # Errors
///
/// Returns an error on I/O failure or if the record cannot be stored.
pub fn run_play<R, W, S>(
    mut round: Round,
    player: &str,
    store: &mut S,
    mut input: R,
    mut out: W,
) -> Result<PlayOutcome>
where
    R: BufRead,
    W: Write,
    S: RecordStore + ?Sized,
{
    writeln!(
        out,
        "Guess the {}-letter word in {} tries. Type ':quit' to give up.\n",
        round.target().len(),
        round.max_attempts()
    )?;

    while !round.is_over() {
        write!(
            out,
            "Guess {}/{}: ",
            round.attempts() + 1,
            round.max_attempts()
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(PlayOutcome::Abandoned);
        }

        let guess = line.trim();
        // Commands carry a ':' prefix so no word can collide with them
        if matches!(guess.to_lowercase().as_str(), ":quit" | ":q") {
            writeln!(out, "The word was {}.", round.target())?;
            return Ok(PlayOutcome::Abandoned);
        }

        match round.submit(guess) {
            Ok(evaluation) => {
                writeln!(
                    out,
                    "  {}  {}",
                    evaluation_tiles(evaluation),
                    evaluation.to_emoji()
                )?;
            }
            Err(e) => writeln!(out, "  {} {e}", "✗".red())?,
        }
    }

    match round.status() {
        RoundStatus::Won => writeln!(
            out,
            "\n{} Solved in {} {}!",
            "🎉".bold(),
            round.attempts(),
            if round.attempts() == 1 { "guess" } else { "guesses" }
        )?,
        _ => writeln!(out, "\nOut of guesses. The word was {}.", round.target())?,
    }

    for evaluation in round.history() {
        writeln!(out, "  {}", evaluation.to_emoji())?;
    }

    let Some(record) = round.record(player) else {
        return Ok(PlayOutcome::Abandoned);
    };
    store.append(record.clone())?;

    Ok(PlayOutcome::Finished(record))
}
