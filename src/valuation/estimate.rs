//! Rough estimate from raw intake inputs.
//!
//! Before an analyst has entered structured metrics, the submission form
//! only knows how many hours one run of the workflow takes, how many errors
//! it produces a month, and how often it runs. This module turns those into
//! an annual figure and seeds the process with two synthetic metrics.

use crate::config::{FrequencyTable, Settings};
use crate::core::numeric::{finite_or_zero, NumericInput};
use crate::core::{Frequency, Metric, MetricType};
use crate::valuation::compute_metric_value;
use serde::Serialize;

const MONTHS_PER_YEAR: f64 = 12.0;

pub const LABOR_METRIC_ID: &str = "f1";
pub const ERROR_METRIC_ID: &str = "f2";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RawEstimate {
    pub frequency: Frequency,
    pub cycles_per_month: f64,
    /// Annual labor cost of the workflow
    pub labor: f64,
    /// Annual cost of its errors
    pub error: f64,
    pub total: f64,
    /// Labor and error metrics carrying the figures above
    pub synthetic_metrics: Vec<Metric>,
}

/// Estimator bound to a cycles-per-month table.
#[derive(Clone, Debug, Default)]
pub struct RawInputEstimator {
    table: FrequencyTable,
}

impl RawInputEstimator {
    pub fn new(table: FrequencyTable) -> Self {
        Self { table }
    }

    pub fn estimate(
        &self,
        hours_per_cycle: impl NumericInput,
        monthly_error_count: impl NumericInput,
        frequency: impl Into<Frequency>,
        settings: &Settings,
    ) -> RawEstimate {
        let hours = hours_per_cycle.to_lenient_f64();
        let errors = monthly_error_count.to_lenient_f64();
        let frequency = frequency.into();
        let cycles_per_month = self.table.cycles_per_month(frequency);

        let annual_hours = finite_or_zero(hours * cycles_per_month * MONTHS_PER_YEAR).max(0.0);
        let annual_errors = finite_or_zero(errors * MONTHS_PER_YEAR).max(0.0);

        let labor_metric = synthetic_metric(
            LABOR_METRIC_ID,
            "Potential labor savings",
            "Hours",
            MetricType::Labor,
            annual_hours,
            settings,
        );
        let error_metric = synthetic_metric(
            ERROR_METRIC_ID,
            "Cost of undetected errors",
            "Errors",
            MetricType::Error,
            annual_errors,
            settings,
        );
        let labor = labor_metric.value;
        let error = error_metric.value;

        log::debug!(
            "Raw estimate: {}h x {} cycles ({}) -> labor {}, {} errors/month -> error {}",
            hours,
            cycles_per_month,
            frequency,
            labor,
            errors,
            error
        );

        RawEstimate {
            frequency,
            cycles_per_month,
            labor,
            error,
            total: labor + error,
            synthetic_metrics: vec![labor_metric, error_metric],
        }
    }
}

/// A metric whose baseline is the annual quantity and whose target is zero.
/// Its value is computed from those measurements, so a later recompute
/// leaves it unchanged.
fn synthetic_metric(
    id: &str,
    name: &str,
    unit: &str,
    metric_type: MetricType,
    annual_quantity: f64,
    settings: &Settings,
) -> Metric {
    let mut metric = Metric::new(id, name, unit)
        .with_type(metric_type)
        .with_measurements(annual_quantity.to_string(), "0");
    metric.value = compute_metric_value(&metric, settings);
    metric
}

/// Estimate with the default (legacy) cycles-per-month table.
pub fn estimate_from_raw_inputs(
    hours_per_cycle: impl NumericInput,
    monthly_error_count: impl NumericInput,
    frequency: impl Into<Frequency>,
    settings: &Settings,
) -> RawEstimate {
    RawInputEstimator::default().estimate(hours_per_cycle, monthly_error_count, frequency, settings)
}
