//! Prioritization views over many submitted processes.
//!
//! Processes are ranked by potential value, placed on the value/feasibility
//! matrix and filtered the way the admin dashboard does. Recomputing
//! potential values for a whole portfolio runs in parallel since every
//! process is valued independently.

mod filter;
mod quadrant;

pub use filter::ProcessFilter;
pub use quadrant::{Quadrant, Score};

use crate::config::Settings;
use crate::core::ProcessRecord;
use crate::valuation::{sum_impact, CategoryTotals};
use rayon::prelude::*;
use serde::Serialize;

const NEW_STATUS: &str = "New";
const PIPELINE_SIGNALS: [&str; 2] = ["Pursue", "Discovery"];

/// Headline counters for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PortfolioStats {
    pub total: usize,
    /// Processes still in the `New` status
    pub unscored: usize,
    /// Processes flagged `Pursue`
    pub pursue: usize,
    /// Potential value of everything flagged `Pursue` or `Discovery`
    pub pipeline_value: f64,
}

impl PortfolioStats {
    pub fn from_processes(processes: &[ProcessRecord]) -> Self {
        let signal_is = |p: &ProcessRecord, wanted: &str| p.action_signal.as_deref() == Some(wanted);

        Self {
            total: processes.len(),
            unscored: processes
                .iter()
                .filter(|p| p.status.as_deref() == Some(NEW_STATUS))
                .count(),
            pursue: processes.iter().filter(|p| signal_is(p, "Pursue")).count(),
            pipeline_value: processes
                .iter()
                .filter(|p| PIPELINE_SIGNALS.iter().any(|s| signal_is(p, s)))
                .map(|p| p.potential_value)
                .sum(),
        }
    }
}

/// One process as listed in the portfolio table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioRow {
    pub id: String,
    pub name: String,
    pub company: String,
    pub value_score: Option<Score>,
    pub feasibility_score: Option<Score>,
    pub quadrant: Option<Quadrant>,
    pub action_signal: Option<String>,
    pub status: Option<String>,
    pub potential_value: f64,
    pub totals: CategoryTotals,
}

impl PortfolioRow {
    pub fn from_process(process: &ProcessRecord) -> Self {
        let value_score = Score::parse(process.value_score.as_deref());
        let feasibility_score = Score::parse(process.feasibility_score.as_deref());
        Self {
            id: process.id.clone(),
            name: process.name.clone(),
            company: process.company.clone(),
            value_score,
            feasibility_score,
            quadrant: Quadrant::classify(value_score, feasibility_score),
            action_signal: process.action_signal.clone(),
            status: process.status.clone(),
            potential_value: process.potential_value,
            totals: CategoryTotals::from_impact(Some(&process.impact)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadrantGroup {
    pub quadrant: Quadrant,
    pub title: &'static str,
    pub label: &'static str,
    pub rows: Vec<PortfolioRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioReport {
    pub stats: PortfolioStats,
    /// Filtered rows, highest potential value first
    pub rows: Vec<PortfolioRow>,
    /// Present when the matrix view was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Vec<QuadrantGroup>>,
}

/// Refresh `potential_value` on every process from its stored metric values.
pub fn refresh_potential_values(processes: &mut [ProcessRecord]) {
    processes.par_iter_mut().for_each(|process| {
        process.potential_value = sum_impact(Some(&process.impact));
    });
}

/// Recompute non-overridden metric values with `settings`, then refresh
/// potential values. Returns the number of metrics recomputed.
pub fn recompute_portfolio(processes: &mut [ProcessRecord], settings: &Settings) -> usize {
    processes
        .par_iter_mut()
        .map(|process| {
            let recomputed = process
                .impact
                .financial
                .iter_mut()
                .chain(process.impact.efficiency.iter_mut())
                .chain(process.impact.accuracy.iter_mut())
                .map(|metric| metric.recompute(settings))
                .filter(|recomputed| *recomputed)
                .count();
            process.potential_value = sum_impact(Some(&process.impact));
            recomputed
        })
        .sum()
}

/// Highest potential value first; ties keep their input order.
pub fn sort_by_potential_value(rows: &mut [PortfolioRow]) {
    rows.sort_by(|a, b| b.potential_value.total_cmp(&a.potential_value));
}

pub fn group_by_quadrant(rows: &[PortfolioRow]) -> Vec<QuadrantGroup> {
    Quadrant::ALL
        .into_iter()
        .map(|quadrant| QuadrantGroup {
            quadrant,
            title: quadrant.title(),
            label: quadrant.label(),
            rows: rows
                .iter()
                .filter(|row| row.quadrant == Some(quadrant))
                .cloned()
                .collect(),
        })
        .collect()
}

/// Build the dashboard view: stats over the whole portfolio, rows after
/// filtering, optionally grouped into the matrix.
pub fn build_report(
    processes: &[ProcessRecord],
    filter: &ProcessFilter,
    with_matrix: bool,
    top: Option<usize>,
) -> PortfolioReport {
    let mut rows: Vec<PortfolioRow> = filter
        .apply(processes)
        .into_iter()
        .map(PortfolioRow::from_process)
        .collect();
    sort_by_potential_value(&mut rows);
    if let Some(limit) = top {
        rows.truncate(limit);
    }

    log::info!(
        "Portfolio: {} of {} processes after filtering",
        rows.len(),
        processes.len()
    );

    PortfolioReport {
        stats: PortfolioStats::from_processes(processes),
        matrix: with_matrix.then(|| group_by_quadrant(&rows)),
        rows,
    }
}
