use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::ImpactmapConfig;
use super::frequency::FrequencyTable;
use crate::errors::{ImpactmapError, Result};

pub const CONFIG_FILE_NAME: &str = ".impactmap.toml";

/// Read raw config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<ImpactmapConfig, String> {
    let mut config = toml::from_str::<ImpactmapConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Some(ref table) = config.frequency {
        if let Err(e) = table.validate() {
            log::warn!("Invalid frequency table: {}. Using defaults.", e);
            config.frequency = Some(FrequencyTable::default());
        }
    }

    Ok(config)
}

/// Try loading config from a specific path, logging and skipping bad files
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ImpactmapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.impactmap.toml`
pub fn load_config_from_dir(start: PathBuf) -> ImpactmapConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ImpactmapConfig::default()
        })
}

pub fn load_config() -> ImpactmapConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from_dir(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            ImpactmapConfig::default()
        }
    }
}

/// Load an explicitly requested config file. Unlike discovery, a missing or
/// malformed file is an error.
pub fn load_config_file(path: &Path) -> Result<ImpactmapConfig> {
    let contents = read_config_file(path).map_err(|e| ImpactmapError::FileSystem {
        message: format!("cannot read config file: {}", e),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })?;
    parse_and_validate_config(&contents).map_err(ImpactmapError::Configuration)
}
