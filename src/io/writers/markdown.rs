use crate::config::Settings;
use crate::core::ImpactCategory;
use crate::formatting::format_money;
use crate::io::output::{OutputWriter, Report, ReportBody, TotalsReport};
use crate::portfolio::PortfolioReport;
use crate::valuation::{MetricValuation, RawEstimate};
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        self.write_header(report)?;
        let settings = &report.settings;
        match &report.result {
            ReportBody::Metric(valuation) => self.write_metric(valuation, settings)?,
            ReportBody::Totals(totals) => self.write_totals(totals, settings)?,
            ReportBody::Estimate(estimate) => self.write_estimate(estimate, settings)?,
            ReportBody::Portfolio(portfolio) => self.write_portfolio(portfolio, settings)?,
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &Report) -> anyhow::Result<()> {
        writeln!(self.writer, "# Impact Valuation Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(
            self.writer,
            "Rates: {} per hour, {} per error",
            format_money(report.settings.hourly_rate, &report.settings.currency_symbol),
            format_money(report.settings.error_cost, &report.settings.currency_symbol)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_metric(
        &mut self,
        valuation: &MetricValuation,
        settings: &Settings,
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "## Metric Value")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Field | Value |")?;
        writeln!(self.writer, "|-------|-------|")?;
        writeln!(self.writer, "| Type | {} |", valuation.metric_type)?;
        writeln!(self.writer, "| Baseline | {} |", valuation.baseline)?;
        writeln!(self.writer, "| Target | {} |", valuation.target)?;
        writeln!(self.writer, "| Improvement | {} |", valuation.improvement)?;
        writeln!(self.writer, "| Formula | {} |", valuation.formula)?;
        writeln!(
            self.writer,
            "| **Annual value** | **{}** |",
            format_money(valuation.value, &settings.currency_symbol)
        )?;
        Ok(())
    }

    fn write_totals(&mut self, report: &TotalsReport, settings: &Settings) -> anyhow::Result<()> {
        let symbol = &settings.currency_symbol;
        match &report.process_name {
            Some(name) => writeln!(self.writer, "## Impact Totals: {}", name)?,
            None => writeln!(self.writer, "## Impact Totals")?,
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "| Category | Metric | Type | Value |")?;
        writeln!(self.writer, "|----------|--------|------|-------|")?;
        for (category, metric) in report.impact.iter() {
            let marker = if metric.is_overridden() { " (override)" } else { "" };
            writeln!(
                self.writer,
                "| {} | {} | {} | {}{} |",
                category.title(),
                metric.name,
                metric.metric_type,
                format_money(metric.value, symbol),
                marker
            )?;
        }
        writeln!(self.writer)?;
        for category in ImpactCategory::ALL {
            writeln!(
                self.writer,
                "- {}: {}",
                category.title(),
                format_money(report.totals.get(category), symbol)
            )?;
        }
        writeln!(
            self.writer,
            "- **Total potential annual value: {}**",
            format_money(report.totals.total, symbol)
        )?;
        Ok(())
    }

    fn write_estimate(&mut self, estimate: &RawEstimate, settings: &Settings) -> anyhow::Result<()> {
        let symbol = &settings.currency_symbol;
        writeln!(self.writer, "## Rough Estimate")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Frequency: {} ({} cycles per month)",
            estimate.frequency, estimate.cycles_per_month
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Component | Annual value |")?;
        writeln!(self.writer, "|-----------|--------------|")?;
        writeln!(self.writer, "| Labor | {} |", format_money(estimate.labor, symbol))?;
        writeln!(self.writer, "| Errors | {} |", format_money(estimate.error, symbol))?;
        writeln!(
            self.writer,
            "| **Total** | **{}** |",
            format_money(estimate.total, symbol)
        )?;
        Ok(())
    }

    fn write_portfolio(
        &mut self,
        report: &PortfolioReport,
        settings: &Settings,
    ) -> anyhow::Result<()> {
        let symbol = &settings.currency_symbol;
        writeln!(self.writer, "## Portfolio")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Submissions | {} |", report.stats.total)?;
        writeln!(self.writer, "| Unscored | {} |", report.stats.unscored)?;
        writeln!(self.writer, "| Pursue | {} |", report.stats.pursue)?;
        writeln!(
            self.writer,
            "| Pipeline value | {} |",
            format_money(report.stats.pipeline_value, symbol)
        )?;
        writeln!(self.writer)?;

        if let Some(matrix) = &report.matrix {
            for group in matrix {
                writeln!(self.writer, "### {} ({})", group.title, group.label)?;
                writeln!(self.writer)?;
                if group.rows.is_empty() {
                    writeln!(self.writer, "_No candidates in this quadrant_")?;
                }
                for row in &group.rows {
                    writeln!(
                        self.writer,
                        "- {} ({}): {}",
                        row.name,
                        row.company,
                        format_money(row.potential_value, symbol)
                    )?;
                }
                writeln!(self.writer)?;
            }
            return Ok(());
        }

        writeln!(self.writer, "| Process | Company | Quadrant | Potential value |")?;
        writeln!(self.writer, "|---------|---------|----------|-----------------|")?;
        for row in &report.rows {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                row.name,
                row.company,
                row.quadrant.map(|q| q.title()).unwrap_or("-"),
                format_money(row.potential_value, symbol)
            )?;
        }
        Ok(())
    }
}
