// protag/src/logger.rs
//! Logging setup for the `protag` binary and its tests.
//!
//! Uses `env_logger` behind the `log` facade. An explicit level overrides
//! `RUST_LOG`; without one, `RUST_LOG` applies and defaults to `info`.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger. Safe to call more than once; later calls
/// are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).format_target(false);
    let _ = builder.try_init();
}

/// Picks the log level from the global CLI flags.
///
/// `--quiet` silences logging, `--disable-debug` forces `info` even if
/// `RUST_LOG` asks for more, `--debug` forces `debug`.
pub fn level_from_flags(quiet: bool, debug: bool, disable_debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if disable_debug {
        Some(LevelFilter::Info)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
