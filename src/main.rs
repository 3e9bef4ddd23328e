//! Wordle Round - CLI
//!
//! Check guesses, play rounds, analyze guesses and list scores.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_round::{
    commands::{
        PlayOutcome, analyze_guess, check_guess, check_guess_response, load_scores, run_play,
    },
    config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RECORDS_PATH, GameConfig},
    core::{Difficulty, Word},
    game::Round,
    logging::init_logger,
    output::{print_analysis_result, print_check_result, print_scores},
    store::JsonFileStore,
    wordlists::loader::{load_from_file, words_for_tier},
};

#[derive(Parser)]
#[command(
    name = "wordle_round",
    about = "Wordle-style guess checker and game rounds",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON file holding finished game records
    #[arg(short, long, global = true, default_value = DEFAULT_RECORDS_PATH)]
    records: PathBuf,

    /// Custom word list file (one word per line) instead of the embedded lists
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a round against a random word (default)
    Play {
        /// Difficulty: easy (5 letters), medium (6), hard (8)
        #[arg(short, long, default_value = "easy")]
        difficulty: Difficulty,

        /// Number of guesses allowed
        #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,

        /// Name stored with the game record
        #[arg(short, long, default_value = "player")]
        player: String,

        /// Play against this word instead of a random one
        #[arg(short, long)]
        target: Option<String>,
    },

    /// Evaluate one guess against a target
    Check {
        guess: String,
        target: String,

        /// Print the JSON response body instead of tiles
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a guess against every target of its tier
    Analyze {
        guess: String,

        /// Tier to analyze against (default: from the guess length)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },

    /// Show the best recorded wins
    Scores {
        #[arg(short, long, default_value = "easy")]
        difficulty: Difficulty,

        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let custom_words = match &cli.wordlist {
        Some(path) => Some(
            load_from_file(path)
                .with_context(|| format!("Failed to load word list {}", path.display()))?,
        ),
        None => None,
    };

    let command = cli.command.unwrap_or(Commands::Play {
        difficulty: Difficulty::default(),
        max_attempts: DEFAULT_MAX_ATTEMPTS,
        player: "player".to_string(),
        target: None,
    });

    match command {
        Commands::Play {
            difficulty,
            max_attempts,
            player,
            target,
        } => {
            let config = GameConfig::new(difficulty)
                .with_max_attempts(max_attempts)
                .with_records_path(cli.records);
            run_play_command(&config, &player, target.as_deref(), custom_words.as_deref())
        }
        Commands::Check {
            guess,
            target,
            json,
        } => run_check_command(&guess, &target, json),
        Commands::Analyze { guess, difficulty } => {
            run_analyze_command(&guess, difficulty, custom_words.as_deref())
        }
        Commands::Scores { difficulty, limit } => {
            run_scores_command(&GameConfig::new(difficulty).with_records_path(cli.records), limit)
        }
    }
}

fn run_play_command(
    config: &GameConfig,
    player: &str,
    target: Option<&str>,
    custom_words: Option<&[Word]>,
) -> Result<()> {
    let round = match target {
        Some(text) => Round::new(Word::new(text)?, config.max_attempts),
        None => {
            let words = words_for_tier(config.difficulty, custom_words);
            Round::from_config(config, &words)?
        }
    };

    let mut store = JsonFileStore::new(&config.records_path);
    let stdin = io::stdin();
    let outcome = run_play(round, player, &mut store, stdin.lock(), io::stdout())?;

    if let PlayOutcome::Finished(_) = outcome {
        println!("\nRecord saved to {}", config.records_path.display());
    }
    Ok(())
}

fn run_check_command(guess: &str, target: &str, json: bool) -> Result<()> {
    if json {
        let response = check_guess_response(guess, target);
        println!("{}", serde_json::to_string_pretty(&response.body)?);
        if !response.is_success() {
            bail!("request rejected with status {}", response.status);
        }
        return Ok(());
    }

    let evaluation = check_guess(guess, target)?;
    print_check_result(&evaluation);
    Ok(())
}

fn run_analyze_command(
    guess: &str,
    difficulty: Option<Difficulty>,
    custom_words: Option<&[Word]>,
) -> Result<()> {
    let guess = Word::new(guess)?;
    let Some(difficulty) = difficulty.or_else(|| Difficulty::for_length(guess.len())) else {
        bail!(
            "No tier has {}-letter words; pass --difficulty",
            guess.len()
        );
    };

    let targets = words_for_tier(difficulty, custom_words);
    let result = analyze_guess(&guess, &targets)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_scores_command(config: &GameConfig, limit: usize) -> Result<()> {
    let store = JsonFileStore::new(&config.records_path);
    let scores = load_scores(&store, config.difficulty, limit)?;
    let refs: Vec<_> = scores.iter().collect();
    print_scores(&format!("Top {} scores", config.difficulty), &refs);
    Ok(())
}
