//! Configuration for impactmap.
//!
//! Settings normally come from an external settings store; on the command
//! line they are read from `.impactmap.toml`, searched for in the current
//! directory and its ancestors, and can be overridden by flags.

mod core;
mod frequency;
mod loader;
mod settings;

pub use self::core::{ImpactmapConfig, OutputConfig};
pub use frequency::FrequencyTable;
pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from_dir,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use settings::{
    default_currency_symbol, default_error_cost, default_hourly_rate, Settings,
    DEFAULT_CURRENCY_SYMBOL, DEFAULT_ERROR_COST, DEFAULT_HOURLY_RATE,
};
