use super::CommandContext;
use crate::core::{Metric, MetricType};
use crate::io::output::ReportBody;
use crate::valuation::value_breakdown;
use anyhow::Result;

pub fn handle_metric(
    ctx: &CommandContext,
    baseline: &str,
    target: &str,
    metric_type: MetricType,
) -> Result<()> {
    let metric = Metric::new("cli", "Command-line metric", "")
        .with_type(metric_type)
        .with_measurements(baseline, target);
    let valuation = value_breakdown(&metric, &ctx.settings);
    log::info!("{}", valuation.summary());
    ctx.emit(ReportBody::Metric(valuation))
}
