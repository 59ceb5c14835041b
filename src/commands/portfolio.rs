use super::CommandContext;
use crate::io::input::load_processes;
use crate::io::output::ReportBody;
use crate::portfolio::{build_report, recompute_portfolio, refresh_potential_values, ProcessFilter};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct PortfolioConfig {
    pub file: PathBuf,
    pub filter: ProcessFilter,
    pub matrix: bool,
    pub recompute: bool,
    pub top: Option<usize>,
}

pub fn handle_portfolio(ctx: &CommandContext, config: PortfolioConfig) -> Result<()> {
    let mut processes = load_processes(&config.file)
        .with_context(|| format!("Failed to load processes from {}", config.file.display()))?;

    if config.recompute {
        let recomputed = recompute_portfolio(&mut processes, &ctx.settings);
        log::info!("Recomputed {} metric values", recomputed);
    } else {
        refresh_potential_values(&mut processes);
    }

    let report = build_report(&processes, &config.filter, config.matrix, config.top);
    ctx.emit(ReportBody::Portfolio(report))
}
