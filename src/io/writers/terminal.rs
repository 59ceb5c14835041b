use crate::config::Settings;
use crate::core::ImpactCategory;
use crate::formatting::format_money;
use crate::io::output::{OutputWriter, Report, ReportBody, TotalsReport};
use crate::portfolio::{PortfolioReport, PortfolioRow, Score};
use crate::valuation::{MetricValuation, RawEstimate};
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use std::io::Write;

const RULE: &str = "═══════════════════════════════════════════";

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn money_cell(value: f64, symbol: &str) -> Cell {
    Cell::new(format_money(value, symbol)).set_alignment(CellAlignment::Right)
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    table
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
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

impl<W: Write> TerminalWriter<W> {
    fn write_banner(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", RULE.cyan())?;
        writeln!(self.writer, "{}", format!("  {}", title).bold().cyan())?;
        writeln!(self.writer, "{}", RULE.cyan())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_metric(
        &mut self,
        valuation: &MetricValuation,
        settings: &Settings,
    ) -> anyhow::Result<()> {
        self.write_banner("METRIC VALUE")?;
        writeln!(self.writer, "Type:        {}", valuation.metric_type)?;
        writeln!(
            self.writer,
            "Improvement: {} → {} = {}",
            valuation.baseline, valuation.target, valuation.improvement
        )?;
        writeln!(
            self.writer,
            "Formula:     {} (× {})",
            valuation.formula, valuation.multiplier
        )?;
        writeln!(
            self.writer,
            "Annual value: {}",
            format_money(valuation.value, &settings.currency_symbol)
                .bold()
                .green()
        )?;
        Ok(())
    }

    fn write_totals(&mut self, report: &TotalsReport, settings: &Settings) -> anyhow::Result<()> {
        let symbol = &settings.currency_symbol;
        let title = match &report.process_name {
            Some(name) => format!("IMPACT TOTALS: {}", name),
            None => "IMPACT TOTALS".to_string(),
        };
        self.write_banner(&title)?;

        let mut table = new_table(vec!["Category", "Metric", "Type", "Baseline", "Target", "Value"]);
        for (category, metric) in report.impact.iter() {
            let name = if metric.is_overridden() {
                format!("{} (override)", metric.name)
            } else {
                metric.name.clone()
            };
            table.add_row(vec![
                Cell::new(category.title()),
                Cell::new(name),
                Cell::new(metric.metric_type),
                Cell::new(&metric.baseline),
                Cell::new(&metric.target),
                money_cell(metric.value, symbol),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;

        for category in ImpactCategory::ALL {
            writeln!(
                self.writer,
                "{:<12} {}",
                category.title(),
                format_money(report.totals.get(category), symbol)
            )?;
        }
        writeln!(
            self.writer,
            "{:<12} {}",
            "Total".bold(),
            format_money(report.totals.total, symbol).bold().green()
        )?;
        if report.recomputed > 0 {
            writeln!(
                self.writer,
                "{}",
                format!("{} metric value(s) recomputed from baseline/target", report.recomputed)
                    .dimmed()
            )?;
        }
        Ok(())
    }

    fn write_estimate(&mut self, estimate: &RawEstimate, settings: &Settings) -> anyhow::Result<()> {
        let symbol = &settings.currency_symbol;
        self.write_banner("ROUGH ESTIMATE")?;
        writeln!(
            self.writer,
            "Frequency: {} ({} cycles per month)",
            estimate.frequency, estimate.cycles_per_month
        )?;
        writeln!(self.writer)?;

        let mut table = new_table(vec!["Component", "Annual value"]);
        table.add_row(vec![Cell::new("Labor"), money_cell(estimate.labor, symbol)]);
        table.add_row(vec![Cell::new("Errors"), money_cell(estimate.error, symbol)]);
        table.add_row(vec![Cell::new("Total"), money_cell(estimate.total, symbol)]);
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_portfolio(
        &mut self,
        report: &PortfolioReport,
        settings: &Settings,
    ) -> anyhow::Result<()> {
        let symbol = &settings.currency_symbol;
        self.write_banner("PORTFOLIO")?;
        writeln!(
            self.writer,
            "Submissions: {}  Unscored: {}  Pursue: {}  Pipeline: {}",
            report.stats.total,
            report.stats.unscored,
            report.stats.pursue,
            format_money(report.stats.pipeline_value, symbol).bold()
        )?;
        writeln!(self.writer)?;

        match &report.matrix {
            Some(matrix) => {
                for group in matrix {
                    writeln!(self.writer, "{} {}", group.title.bold(), group.label.dimmed())?;
                    if group.rows.is_empty() {
                        writeln!(self.writer, "  {}", "No candidates in this quadrant".dimmed())?;
                    }
                    for row in &group.rows {
                        writeln!(
                            self.writer,
                            "  {} ({}) {}",
                            row.name,
                            row.company,
                            format_money(row.potential_value, symbol).green()
                        )?;
                    }
                    writeln!(self.writer)?;
                }
            }
            None => {
                let table = portfolio_table(&report.rows, symbol);
                writeln!(self.writer, "{table}")?;
            }
        }
        Ok(())
    }
}

fn score_label(score: Option<Score>) -> &'static str {
    match score {
        Some(Score::High) => "H",
        Some(Score::Medium) => "M",
        Some(Score::Low) => "L",
        None => "-",
    }
}

fn portfolio_table(rows: &[PortfolioRow], symbol: &str) -> Table {
    let mut table = new_table(vec![
        "Process",
        "Company",
        "Scores (V/F)",
        "Quadrant",
        "Action",
        "Potential value",
    ]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.name),
            Cell::new(&row.company),
            Cell::new(format!(
                "V:{} F:{}",
                score_label(row.value_score),
                score_label(row.feasibility_score)
            )),
            Cell::new(row.quadrant.map(|q| q.title()).unwrap_or("-")),
            Cell::new(row.action_signal.as_deref().unwrap_or("-")),
            money_cell(row.potential_value, symbol),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProcessRecord;
    use crate::portfolio::{build_report, ProcessFilter};
    use crate::valuation::estimate_from_raw_inputs;

    fn render(report: &Report) -> String {
        let mut writer = TerminalWriter::new(Vec::new());
        writer.write_report(report).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_estimate_output_shows_grouped_totals() {
        let settings = Settings::default();
        let estimate = estimate_from_raw_inputs(2, 10, "Weekly", &settings);
        let text = render(&Report::new(settings, ReportBody::Estimate(estimate)));

        assert!(text.contains("ROUGH ESTIMATE"));
        assert!(text.contains("$4,320"));
        assert!(text.contains("$18,000"));
        assert!(text.contains("$22,320"));
    }

    #[test]
    fn test_portfolio_table_lists_processes() {
        let mut process = ProcessRecord::new("p1", "Invoice matching");
        process.company = "Acme".to_string();
        process.potential_value = 1500.0;
        process.value_score = Some("High".to_string());
        let report = build_report(&[process], &ProcessFilter::default(), false, None);
        let text = render(&Report::new(Settings::default(), ReportBody::Portfolio(report)));

        assert!(text.contains("Invoice matching"));
        assert!(text.contains("V:H F:-"));
        assert!(text.contains("$1,500"));
    }

    #[test]
    fn test_score_label() {
        assert_eq!(score_label(Some(Score::Medium)), "M");
        assert_eq!(score_label(None), "-");
    }
}
