//! Logger setup for the `overwatch` binary.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// `RUST_LOG` wins when set. Otherwise the overwatch crates log at info, or
/// at debug when `verbose` is `true`, and everything else at warn.
pub fn init(verbose: bool) {
    let _ = builder(verbose).try_init();
}

fn default_filter(verbose: bool) -> String {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    format!("warn,overwatch_sim={level},overwatch_app={level}").to_lowercase()
}

fn builder(verbose: bool) -> Builder {
    let env = Env::default().default_filter_or(default_filter(verbose));
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_millis();
    builder
}
