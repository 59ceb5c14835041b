pub mod input;
pub mod output;
pub mod writers;

pub use input::{load_impact_document, load_processes, ImpactDocument};
pub use output::{create_writer, OutputFormat, OutputWriter, Report, ReportBody, TotalsReport};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
