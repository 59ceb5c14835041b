use crate::config::Settings;
use crate::core::ImpactSet;
use crate::io::writers::{JsonWriter, MarkdownWriter, TerminalWriter};
use crate::portfolio::PortfolioReport;
use crate::valuation::{CategoryTotals, MetricValuation, RawEstimate};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            "terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

/// Category subtotals of one impact set, with the metrics behind them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalsReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_name: Option<String>,
    pub totals: CategoryTotals,
    /// Metrics whose value was refreshed from baseline/target before summing
    pub recomputed: usize,
    pub impact: ImpactSet,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportBody {
    Metric(MetricValuation),
    Totals(TotalsReport),
    Estimate(RawEstimate),
    Portfolio(PortfolioReport),
}

/// Everything a command produces, ready for any writer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub settings: Settings,
    pub result: ReportBody,
}

impl Report {
    pub fn new(settings: Settings, result: ReportBody) -> Self {
        Self {
            generated_at: Utc::now(),
            settings,
            result,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;
}

/// Writer for `format`, targeting `output` or stdout.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    })
}
