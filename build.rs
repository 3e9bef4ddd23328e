//! Build script to embed the per-tier word lists
//!
//! Each `data/words_<N>.txt` becomes a `WORDS_<N>` const array in `OUT_DIR`.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const TIERS: [usize; 3] = [5, 6, 8];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("word_lists.rs");

    let mut output = fs::File::create(&out_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", out_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();

    for length in TIERS {
        let input_path = format!("data/words_{length}.txt");
        println!("cargo:rerun-if-changed={input_path}");

        let content = fs::read_to_string(&input_path)
            .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

        let words: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .collect();

        for word in &words {
            assert!(
                word.len() == length && word.chars().all(|c| c.is_ascii_alphabetic()),
                "{input_path}: '{word}' is not a {length}-letter word"
            );
        }

        writeln!(output, "/// Target words for {length}-letter rounds").unwrap();
        writeln!(output, "pub const WORDS_{length}: &[&str] = &[").unwrap();
        for word in &words {
            writeln!(output, "    \"{word}\",").unwrap();
        }
        writeln!(output, "];").unwrap();
        writeln!(output).unwrap();
    }
}
