//! Logger setup for the generator binary.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initialises the global logger for a generator run.
///
/// `verbose` lowers the default filter to debug so per-step progress
/// messages appear; `RUST_LOG` still overrides the default either way.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(default_level.to_string());

    // Initialisation fails only when a logger is already installed, which
    // happens when tests call this more than once.
    let _ = Builder::from_env(env).try_init();
}
