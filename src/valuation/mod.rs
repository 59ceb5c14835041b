//! Impact valuation engine.
//!
//! Turns operational metrics into annualized currency figures:
//!
//! - [`compute_metric_value`] values a single metric from its baseline,
//!   target and type.
//! - [`sum_impact`] totals the stored values of an [`ImpactSet`] into a
//!   process's potential value.
//! - [`estimate_from_raw_inputs`] produces a rough figure from intake-form
//!   hours and error counts and packages it as synthetic metrics.
//!
//! Every function here is pure and total. Settings are passed in explicitly
//! and never modified.
//!
//! [`ImpactSet`]: crate::core::ImpactSet

pub mod estimate;
pub mod totals;

#[cfg(test)]
mod tests;

use crate::config::Settings;
use crate::core::numeric::{parse_lenient, round_to_unit};
use crate::core::{Metric, MetricType, ValueSource};
use serde::Serialize;

pub use estimate::{estimate_from_raw_inputs, RawEstimate, RawInputEstimator};
pub use totals::{sum_impact, CategoryTotals};

/// How a metric's value was derived.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetricValuation {
    pub metric_type: MetricType,
    pub baseline: f64,
    pub target: f64,
    /// Improvement from baseline to target, floored at zero
    pub improvement: f64,
    pub multiplier: f64,
    pub value: f64,
    pub formula: String,
}

impl MetricValuation {
    pub fn summary(&self) -> String {
        format!(
            "{} | baseline {} → target {} | improvement {} × {} = {}",
            self.metric_type,
            self.baseline,
            self.target,
            self.improvement,
            self.multiplier,
            self.value
        )
    }
}

impl MetricType {
    /// Currency per unit of improvement under this valuation rule.
    pub fn multiplier(&self, settings: &Settings) -> f64 {
        match self {
            MetricType::Labor => settings.hourly_rate,
            MetricType::Error => settings.error_cost,
            MetricType::Financial | MetricType::Generic => 1.0,
        }
    }

    fn formula(&self) -> &'static str {
        match self {
            MetricType::Labor => "improvement × hourly_rate",
            MetricType::Error => "improvement × error_cost",
            MetricType::Financial => "improvement (direct currency)",
            MetricType::Generic => "improvement",
        }
    }
}

/// Annualized currency value of one metric, rounded to whole units.
///
/// Improvement is a reduction from baseline to target; a target at or above
/// the baseline is worth nothing, never a negative amount.
pub fn compute_metric_value(metric: &Metric, settings: &Settings) -> f64 {
    value_breakdown(metric, settings).value
}

/// [`compute_metric_value`] with the intermediate figures kept.
pub fn value_breakdown(metric: &Metric, settings: &Settings) -> MetricValuation {
    let baseline = parse_lenient(&metric.baseline);
    let target = parse_lenient(&metric.target);
    let improvement = if baseline > target {
        baseline - target
    } else {
        0.0
    };
    let multiplier = metric.metric_type.multiplier(settings);

    MetricValuation {
        metric_type: metric.metric_type,
        baseline,
        target,
        improvement,
        multiplier,
        value: round_to_unit(improvement * multiplier),
        formula: metric.metric_type.formula().to_string(),
    }
}

impl Metric {
    /// Refresh the stored value from baseline/target unless an analyst has
    /// overridden it. Returns whether the value was recomputed.
    pub fn recompute(&mut self, settings: &Settings) -> bool {
        if self.source == ValueSource::Override {
            return false;
        }
        self.value = compute_metric_value(self, settings);
        true
    }

    /// Store an analyst-entered value and mark it as an override.
    pub fn override_value(&mut self, value: f64) {
        self.value = value;
        self.source = ValueSource::Override;
    }

    /// Drop an override and go back to the computed value.
    pub fn clear_override(&mut self, settings: &Settings) {
        self.source = ValueSource::Computed;
        self.recompute(settings);
    }
}
