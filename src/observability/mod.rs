//! Logging setup for the command-line tool.
//!
//! The library only emits `log` records; the binary installs `env_logger`
//! here. `RUST_LOG` wins over the `-v` count when set.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Level selected by the number of `-v` flags.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. Safe to call more than once; later calls are
/// ignored.
pub fn init_logging(verbosity: u8) {
    let level = level_for_verbosity(verbosity).to_string().to_lowercase();
    let env = Env::default().default_filter_or(level);

    if let Err(e) = Builder::from_env(env)
        .format_timestamp(None)
        .format_target(verbosity >= 3)
        .try_init()
    {
        log::debug!("Logger already initialized: {}", e);
    }
}
