// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod editor;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod portfolio;
pub mod valuation;

// Re-export commonly used types
pub use crate::config::{FrequencyTable, Settings};

pub use crate::core::{
    Frequency, ImpactCategory, ImpactSet, Metric, MetricType, ProcessRecord, ValueSource,
};

pub use crate::editor::{ImpactEditor, MetricEdit};

pub use crate::errors::{ImpactmapError, Result};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::portfolio::{build_report, PortfolioReport, ProcessFilter, Quadrant, Score};

pub use crate::valuation::{
    compute_metric_value, estimate_from_raw_inputs, sum_impact, value_breakdown, CategoryTotals,
    MetricValuation, RawEstimate, RawInputEstimator,
};
