use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::FrequencyTable;
use crate::core::MetricType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FrequencyPreset {
    /// Daily runs 20 cycles a month, everything else 4 (default)
    Legacy,
    /// Daily 20, weekly 4, monthly and ad-hoc 1
    Calendar,
}

impl From<FrequencyPreset> for FrequencyTable {
    fn from(preset: FrequencyPreset) -> Self {
        match preset {
            FrequencyPreset::Legacy => FrequencyTable::legacy(),
            FrequencyPreset::Calendar => FrequencyTable::calendar(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum MetricKind {
    Labor,
    Error,
    Financial,
    Generic,
}

impl From<MetricKind> for MetricType {
    fn from(kind: MetricKind) -> Self {
        match kind {
            MetricKind::Labor => MetricType::Labor,
            MetricKind::Error => MetricType::Error,
            MetricKind::Financial => MetricType::Financial,
            MetricKind::Generic => MetricType::Generic,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "impactmap")]
#[command(about = "Annualized impact valuation for business-process submissions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .impactmap.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the config file's, then terminal)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Override the configured cost per labor-hour
    #[arg(long = "hourly-rate", global = true)]
    pub hourly_rate: Option<f64>,

    /// Override the configured cost per error
    #[arg(long = "error-cost", global = true)]
    pub error_cost: Option<f64>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Value a single metric from its baseline and target
    Metric {
        /// Current measurement
        #[arg(long)]
        baseline: String,

        /// Expected measurement after automation
        #[arg(long)]
        target: String,

        /// Formula to apply
        #[arg(long = "type", value_enum, default_value = "generic")]
        metric_type: MetricKind,
    },

    /// Sum the category subtotals and potential value of an impact set or process
    Totals {
        /// JSON or YAML file holding a process or a bare impact set
        file: PathBuf,

        /// Refresh non-overridden values from baseline/target before summing
        #[arg(long)]
        recompute: bool,
    },

    /// Rough annual estimate from raw intake inputs
    Estimate {
        /// Hours one run of the workflow takes
        #[arg(long, default_value = "0")]
        hours: String,

        /// Errors the workflow produces per month
        #[arg(long, default_value = "0")]
        errors: String,

        /// How often the workflow runs (Daily, Weekly, Monthly, Ad-hoc, ...)
        #[arg(long, default_value = "")]
        frequency: String,

        /// Cycles-per-month table (overrides the config file's)
        #[arg(long, value_enum)]
        preset: Option<FrequencyPreset>,
    },

    /// Rank and filter a list of submitted processes
    Portfolio {
        /// JSON or YAML file holding a list of processes
        file: PathBuf,

        /// Only processes from this company
        #[arg(long)]
        company: Option<String>,

        /// Only processes in this industry
        #[arg(long)]
        industry: Option<String>,

        /// Only processes with this value score
        #[arg(long = "value-score")]
        value_score: Option<String>,

        /// Only processes with this feasibility score
        #[arg(long = "feasibility-score")]
        feasibility_score: Option<String>,

        /// Only processes with this action signal
        #[arg(long = "action-signal")]
        action_signal: Option<String>,

        /// Only processes with this status
        #[arg(long)]
        status: Option<String>,

        /// Case-insensitive search over name, company and industry
        #[arg(long)]
        search: Option<String>,

        /// Group processes into the value/feasibility matrix
        #[arg(long)]
        matrix: bool,

        /// Recompute metric values with the current settings first
        #[arg(long)]
        recompute: bool,

        /// Show only the top N processes by potential value
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,
    },

    /// Initialize an impactmap configuration file
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
