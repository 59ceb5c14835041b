// Test utility module for impactmap integration tests
#![allow(dead_code)]

use impactmap::{ImpactSet, Metric, MetricType, ProcessRecord};
use std::path::PathBuf;

pub fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

pub fn metric(id: &str, metric_type: MetricType, baseline: &str, target: &str) -> Metric {
    Metric::new(id, format!("Metric {id}"), "units")
        .with_type(metric_type)
        .with_measurements(baseline, target)
}

/// A process with one stored value per category.
pub fn scored_process(id: &str, financial: f64, efficiency: f64, accuracy: f64) -> ProcessRecord {
    let mut process = ProcessRecord::new(id, format!("Process {id}"));
    process.company = "Acme".to_string();
    process.impact = ImpactSet {
        financial: vec![Metric::new("f1", "Savings", "$").with_value(financial)],
        efficiency: vec![Metric::new("e1", "Turnaround", "Days").with_value(efficiency)],
        accuracy: vec![Metric::new("a1", "Errors", "%").with_value(accuracy)],
    };
    process
}
