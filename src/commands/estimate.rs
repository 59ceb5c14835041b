use super::CommandContext;
use crate::cli::FrequencyPreset;
use crate::config::FrequencyTable;
use crate::io::output::ReportBody;
use crate::valuation::RawInputEstimator;
use anyhow::Result;

pub fn handle_estimate(
    ctx: &CommandContext,
    hours: &str,
    errors: &str,
    frequency: &str,
    preset: Option<FrequencyPreset>,
) -> Result<()> {
    let table = preset
        .map(FrequencyTable::from)
        .unwrap_or_else(|| ctx.frequency.clone());
    let estimate = RawInputEstimator::new(table).estimate(hours, errors, frequency, &ctx.settings);
    ctx.emit(ReportBody::Estimate(estimate))
}
