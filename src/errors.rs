//! Error types for the parts of impactmap that touch the outside world.
//!
//! The valuation engine itself is total and has no error type: malformed
//! numbers degrade to zero. Errors here come from configuration files, input
//! documents and editor operations that reference metrics which do not exist.

use crate::core::ImpactCategory;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for impactmap operations
#[derive(Debug, Error)]
pub enum ImpactmapError {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input document could not be interpreted
    #[error("Invalid input in {}: {message}", .path.display())]
    Input { path: PathBuf, message: String },

    /// Editor referenced a metric id that is not in the category list
    #[error("Metric '{id}' not found in {category} impact")]
    MetricNotFound {
        category: ImpactCategory,
        id: String,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl ImpactmapError {
    pub fn input(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Input {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn metric_not_found(category: ImpactCategory, id: impl Into<String>) -> Self {
        Self::MetricNotFound {
            category,
            id: id.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ImpactmapError>;
