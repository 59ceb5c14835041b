use super::CommandContext;
use crate::editor::ImpactEditor;
use crate::io::input::load_impact_document;
use crate::io::output::{ReportBody, TotalsReport};
use crate::valuation::CategoryTotals;
use anyhow::{Context, Result};
use std::path::Path;

pub fn handle_totals(ctx: &CommandContext, file: &Path, recompute: bool) -> Result<()> {
    let document = load_impact_document(file)
        .with_context(|| format!("Failed to load impact data from {}", file.display()))?;
    let process_name = document.process.as_ref().map(|p| p.name.clone());

    let mut process = document.process.unwrap_or_default();
    process.impact = document.impact;
    let mut editor = ImpactEditor::new(process, ctx.settings.clone());
    let recomputed = if recompute { editor.recompute_all() } else { 0 };

    let impact = editor.impact().clone();
    ctx.emit(ReportBody::Totals(TotalsReport {
        process_name,
        totals: CategoryTotals::from_impact(Some(&impact)),
        recomputed,
        impact,
    }))
}
