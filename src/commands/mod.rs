//! Command handlers behind the `impactmap` binary.
//!
//! Each handler turns its arguments into a [`ReportBody`] and hands it to
//! [`CommandContext::emit`], which picks the writer.

pub mod estimate;
pub mod init;
pub mod metric;
pub mod portfolio;
pub mod totals;

use crate::cli::Cli;
use crate::config::{load_config, load_config_file, FrequencyTable, ImpactmapConfig, Settings};
use crate::io::output::{create_writer, OutputFormat, Report, ReportBody};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Settings and output choices shared by every command.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub settings: Settings,
    pub frequency: FrequencyTable,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl CommandContext {
    /// Resolve configuration: explicit `--config` file, else the nearest
    /// `.impactmap.toml`, with command-line rate overrides applied last.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => load_config_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => load_config(),
        };
        Ok(Self::from_config(&config, cli))
    }

    fn from_config(config: &ImpactmapConfig, cli: &Cli) -> Self {
        let mut settings = config.settings();
        if let Some(rate) = cli.hourly_rate {
            settings = settings.with_hourly_rate(rate);
        }
        if let Some(cost) = cli.error_cost {
            settings = settings.with_error_cost(cost);
        }

        let format = match cli.format {
            Some(format) => format.into(),
            None => config
                .default_format()
                .and_then(|name| {
                    let parsed = OutputFormat::parse(name);
                    if parsed.is_none() {
                        log::warn!("Unknown default_format '{}' in config, using terminal", name);
                    }
                    parsed
                })
                .unwrap_or(OutputFormat::Terminal),
        };

        Self {
            settings,
            frequency: config.frequency_table(),
            format,
            output: cli.output.clone(),
        }
    }

    pub fn emit(&self, result: ReportBody) -> Result<()> {
        let report = Report::new(self.settings.clone(), result);
        let mut writer = create_writer(self.format, self.output.as_deref())
            .context("Failed to open output")?;
        writer.write_report(&report)
    }
}
