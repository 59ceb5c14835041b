//! Analyst-side editing of a process's impact metrics.
//!
//! [`ImpactEditor`] applies add/edit/remove operations to one process and
//! refreshes `potential_value` after each of them. Edits to baseline, target
//! or type recompute the metric's value; typing a value directly records an
//! override that later recomputations leave alone.

use crate::config::Settings;
use crate::core::{ImpactCategory, ImpactSet, Metric, MetricType, ProcessRecord};
use crate::errors::{ImpactmapError, Result};
use crate::valuation::{sum_impact, RawEstimate};

/// A single field change on a metric.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricEdit {
    Name(String),
    Unit(String),
    Baseline(String),
    Target(String),
    Type(MetricType),
    /// Analyst-entered value; marks the metric as overridden
    Value(f64),
    ClearOverride,
}

/// The stub metrics the admin view shows for a process nobody has assessed.
pub fn default_impact_template() -> ImpactSet {
    ImpactSet {
        financial: vec![
            Metric::new("f1", "Potential labor savings", "$"),
            Metric::new("f2", "Cost of undetected errors", "$"),
        ],
        efficiency: vec![
            Metric::new("e1", "Process turnaround time", "Days"),
            Metric::new("e2", "Manual effort reduction", "Hours"),
        ],
        accuracy: vec![
            Metric::new("a1", "Error reduction rate", "%"),
            Metric::new("a2", "Zero-touch rate", "%"),
        ],
    }
}

/// Next free id for `category`, formed from the category initial and a
/// counter, skipping ids already present in the list.
fn next_metric_id(category: ImpactCategory, metrics: &[Metric]) -> String {
    let prefix = &category.as_str()[..1];
    (metrics.len() + 1..)
        .map(|n| format!("{}{}", prefix, n))
        .find(|candidate| metrics.iter().all(|m| &m.id != candidate))
        .unwrap_or_else(|| format!("{}{}", prefix, metrics.len() + 1))
}

pub struct ImpactEditor {
    process: ProcessRecord,
    settings: Settings,
}

impl ImpactEditor {
    pub fn new(process: ProcessRecord, settings: Settings) -> Self {
        let mut editor = Self { process, settings };
        editor.refresh_potential_value();
        editor
    }

    pub fn process(&self) -> &ProcessRecord {
        &self.process
    }

    pub fn impact(&self) -> &ImpactSet {
        &self.process.impact
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn potential_value(&self) -> f64 {
        self.process.potential_value
    }

    pub fn into_process(self) -> ProcessRecord {
        self.process
    }

    /// Install the default template when every category is empty.
    /// Returns whether anything was added.
    pub fn seed_defaults(&mut self) -> bool {
        if !self.process.impact.is_empty() {
            return false;
        }
        self.process.impact = default_impact_template();
        self.refresh_potential_value();
        true
    }

    /// Attach the estimator's synthetic metrics to the financial list, as the
    /// submission flow does before the process is first saved.
    pub fn seed_from_estimate(&mut self, estimate: &RawEstimate) {
        let financial = &mut self.process.impact.financial;
        for synthetic in &estimate.synthetic_metrics {
            let mut metric = synthetic.clone();
            if financial.iter().any(|m| m.id == metric.id) {
                metric.id = next_metric_id(ImpactCategory::Financial, financial);
            }
            financial.push(metric);
        }
        self.refresh_potential_value();
    }

    /// Append a stub metric and return its id.
    pub fn add_metric(&mut self, category: ImpactCategory) -> String {
        let metrics = self.process.impact.metrics_mut(category);
        let id = next_metric_id(category, metrics);
        metrics.push(Metric::new(id.clone(), "New Metric", "units"));
        log::debug!("Added metric {} to {} impact", id, category);
        self.refresh_potential_value();
        id
    }

    pub fn update_metric(
        &mut self,
        category: ImpactCategory,
        id: &str,
        edit: MetricEdit,
    ) -> Result<&Metric> {
        let settings = &self.settings;
        let metric = self
            .process
            .impact
            .metrics_mut(category)
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| ImpactmapError::metric_not_found(category, id))?;

        match edit {
            MetricEdit::Name(name) => metric.name = name,
            MetricEdit::Unit(unit) => metric.unit = unit,
            MetricEdit::Baseline(baseline) => {
                metric.baseline = baseline;
                metric.recompute(settings);
            }
            MetricEdit::Target(target) => {
                metric.target = target;
                metric.recompute(settings);
            }
            MetricEdit::Type(metric_type) => {
                metric.metric_type = metric_type;
                metric.recompute(settings);
            }
            MetricEdit::Value(value) => metric.override_value(value),
            MetricEdit::ClearOverride => metric.clear_override(settings),
        }

        self.refresh_potential_value();
        self.find_metric(category, id)
    }

    pub fn remove_metric(&mut self, category: ImpactCategory, id: &str) -> Result<Metric> {
        let metrics = self.process.impact.metrics_mut(category);
        let index = metrics
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| ImpactmapError::metric_not_found(category, id))?;
        let removed = metrics.remove(index);
        self.refresh_potential_value();
        Ok(removed)
    }

    /// Recompute every non-overridden metric, e.g. after the settings
    /// changed. Returns how many values were recomputed.
    pub fn recompute_all(&mut self) -> usize {
        let settings = &self.settings;
        let impact = &mut self.process.impact;
        let recomputed = ImpactCategory::ALL
            .into_iter()
            .map(|category| {
                impact
                    .metrics_mut(category)
                    .iter_mut()
                    .map(|m| m.recompute(settings))
                    .filter(|recomputed| *recomputed)
                    .count()
            })
            .sum();
        self.refresh_potential_value();
        recomputed
    }

    /// Switch to a new settings snapshot and recompute derived values.
    pub fn apply_settings(&mut self, settings: Settings) -> usize {
        self.settings = settings;
        self.recompute_all()
    }

    fn find_metric(&self, category: ImpactCategory, id: &str) -> Result<&Metric> {
        self.process
            .impact
            .metrics(category)
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| ImpactmapError::metric_not_found(category, id))
    }

    fn refresh_potential_value(&mut self) {
        self.process.potential_value = sum_impact(Some(&self.process.impact));
    }
}
