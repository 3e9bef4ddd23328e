//! Logger setup
//!
//! Library code logs through the `log` facade; the binary installs
//! `env_logger` here.

use log::LevelFilter;
use std::env;

/// Initialize logging for the CLI
///
/// Defaults to `Warn` (or `Debug` when `verbose` is set). An explicit
/// `RUST_LOG` takes precedence over either. Calling this twice is harmless.
pub fn init_logger(verbose: bool) {
    let level = default_level(verbose);

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}

const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_level() {
        assert_eq!(default_level(true), LevelFilter::Debug);
        assert_eq!(default_level(false), LevelFilter::Warn);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_logger(false);
        init_logger(true);
    }
}
