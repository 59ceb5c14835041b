use super::*;
use crate::config::{FrequencyTable, Settings};
use crate::core::{Frequency, ImpactSet, Metric, MetricType, ValueSource};
use pretty_assertions::assert_eq;

fn metric(baseline: &str, target: &str, metric_type: MetricType) -> Metric {
    Metric::new("m1", "Test metric", "units")
        .with_type(metric_type)
        .with_measurements(baseline, target)
}

fn valued(id: &str, value: f64) -> Metric {
    Metric::new(id, "Valued metric", "$").with_value(value)
}

fn intake_settings() -> Settings {
    Settings::default()
        .with_hourly_rate(45.0)
        .with_error_cost(150.0)
}

#[test]
fn test_labor_metric_uses_hourly_rate() {
    let settings = Settings::default().with_hourly_rate(50.0);
    let value = compute_metric_value(&metric("100", "20", MetricType::Labor), &settings);
    assert_eq!(value, 4000.0);
}

#[test]
fn test_error_metric_uses_error_cost() {
    let settings = Settings::default().with_error_cost(150.0);
    let value = compute_metric_value(&metric("30", "5", MetricType::Error), &settings);
    assert_eq!(value, 3750.0);
}

#[test]
fn test_financial_metric_is_direct_difference() {
    let value = compute_metric_value(
        &metric("1000", "200", MetricType::Financial),
        &Settings::default(),
    );
    assert_eq!(value, 800.0);
}

#[test]
fn test_generic_metric_matches_financial_rule() {
    let settings = Settings::default().with_hourly_rate(99.0);
    let generic = compute_metric_value(&metric("12", "2", MetricType::Generic), &settings);
    let financial = compute_metric_value(&metric("12", "2", MetricType::Financial), &settings);
    assert_eq!(generic, 10.0);
    assert_eq!(generic, financial);
}

#[test]
fn test_unparseable_baseline_reads_as_zero() {
    let settings = Settings::default().with_hourly_rate(45.0);
    let value = compute_metric_value(&metric("abc", "5", MetricType::Labor), &settings);
    assert_eq!(value, 0.0);
}

#[test]
fn test_regression_is_floored_at_zero() {
    let settings = Settings::default();
    for metric_type in [
        MetricType::Labor,
        MetricType::Error,
        MetricType::Financial,
        MetricType::Generic,
    ] {
        let value = compute_metric_value(&metric("20", "100", metric_type), &settings);
        assert_eq!(value, 0.0, "{metric_type}");
    }
}

#[test]
fn test_blank_measurements_are_worthless() {
    let value = compute_metric_value(&metric("", "", MetricType::Labor), &Settings::default());
    assert_eq!(value, 0.0);
}

#[test]
fn test_value_rounds_to_whole_units() {
    let settings = Settings::default().with_hourly_rate(45.0);
    // 1.5h x 45 = 67.5
    assert_eq!(
        compute_metric_value(&metric("2", "0.5", MetricType::Labor), &settings),
        68.0
    );
    assert_eq!(
        compute_metric_value(&metric("10.4", "0", MetricType::Financial), &settings),
        10.0
    );
}

#[test]
fn test_compute_is_idempotent() {
    let settings = intake_settings();
    let m = metric("37.5", "12", MetricType::Error);
    let first = compute_metric_value(&m, &settings);
    let second = compute_metric_value(&m, &settings);
    assert_eq!(first, second);
}

#[test]
fn test_category_does_not_change_formula() {
    let settings = intake_settings();
    let labor = metric("10", "0", MetricType::Labor);
    let impact = ImpactSet {
        financial: vec![labor.clone()],
        efficiency: vec![labor.clone()],
        accuracy: vec![],
    };
    let values: Vec<f64> = impact
        .iter()
        .map(|(_, m)| compute_metric_value(m, &settings))
        .collect();
    assert_eq!(values, vec![450.0, 450.0]);
}

#[test]
fn test_breakdown_reports_intermediate_figures() {
    let settings = Settings::default().with_hourly_rate(50.0);
    let breakdown = value_breakdown(&metric("100", "20", MetricType::Labor), &settings);
    assert_eq!(breakdown.baseline, 100.0);
    assert_eq!(breakdown.target, 20.0);
    assert_eq!(breakdown.improvement, 80.0);
    assert_eq!(breakdown.multiplier, 50.0);
    assert_eq!(breakdown.value, 4000.0);
    assert!(breakdown.summary().contains("labor"));
}

#[test]
fn test_sum_impact_adds_categories() {
    let impact = ImpactSet {
        financial: vec![valued("f1", 100.0)],
        efficiency: vec![valued("e1", 50.0)],
        accuracy: vec![],
    };
    assert_eq!(sum_impact(Some(&impact)), 150.0);
}

#[test]
fn test_sum_impact_of_nothing_is_zero() {
    assert_eq!(sum_impact(None), 0.0);
    assert_eq!(sum_impact(Some(&ImpactSet::default())), 0.0);
}

#[test]
fn test_sum_impact_reads_string_values_from_documents() {
    let impact: ImpactSet = serde_json::from_str(
        r#"{"financial": [{"value": "100"}], "efficiency": [{"value": 50}], "accuracy": [{"value": "n/a"}]}"#,
    )
    .unwrap();
    assert_eq!(sum_impact(Some(&impact)), 150.0);
}

#[test]
fn test_sum_impact_ignores_non_finite_values() {
    let impact = ImpactSet {
        financial: vec![valued("f1", f64::NAN), valued("f2", 25.0)],
        efficiency: vec![valued("e1", f64::INFINITY)],
        accuracy: vec![],
    };
    assert_eq!(sum_impact(Some(&impact)), 25.0);
}

#[test]
fn test_sum_impact_trusts_stored_values() {
    let settings = intake_settings();
    let mut labor = metric("100", "20", MetricType::Labor);
    labor.recompute(&settings);
    let mut impact = ImpactSet {
        financial: vec![labor],
        efficiency: vec![],
        accuracy: vec![],
    };
    assert_eq!(sum_impact(Some(&impact)), 3600.0);

    // Direct edit of the value without touching baseline/target
    impact.financial[0].value = 1234.0;
    assert_eq!(sum_impact(Some(&impact)), 1234.0);
}

#[test]
fn test_category_totals() {
    let impact = ImpactSet {
        financial: vec![valued("f1", 100.0), valued("f2", 10.0)],
        efficiency: vec![valued("e1", 50.0)],
        accuracy: vec![valued("a1", 5.0)],
    };
    let totals = CategoryTotals::from_impact(Some(&impact));
    assert_eq!(
        totals,
        CategoryTotals {
            financial: 110.0,
            efficiency: 50.0,
            accuracy: 5.0,
            total: 165.0,
        }
    );
}

#[test]
fn test_recompute_respects_override() {
    let settings = intake_settings();
    let mut m = metric("10", "0", MetricType::Labor);
    assert!(m.recompute(&settings));
    assert_eq!(m.value, 450.0);

    m.override_value(999.0);
    m.baseline = "20".to_string();
    assert!(!m.recompute(&settings));
    assert_eq!(m.value, 999.0);
    assert_eq!(m.source, ValueSource::Override);

    m.clear_override(&settings);
    assert_eq!(m.value, 900.0);
    assert_eq!(m.source, ValueSource::Computed);
}

#[test]
fn test_estimate_daily() {
    let estimate = estimate_from_raw_inputs(2, 10, "Daily", &intake_settings());
    assert_eq!(estimate.cycles_per_month, 20.0);
    assert_eq!(estimate.labor, 21_600.0);
    assert_eq!(estimate.error, 18_000.0);
    assert_eq!(estimate.total, 39_600.0);
}

#[test]
fn test_estimate_weekly_uses_coarse_bucket() {
    let estimate = estimate_from_raw_inputs(2, 10, "Weekly", &intake_settings());
    assert_eq!(estimate.cycles_per_month, 4.0);
    assert_eq!(estimate.labor, 4_320.0);
    assert_eq!(estimate.error, 18_000.0);
    assert_eq!(estimate.total, 22_320.0);
}

#[test]
fn test_estimate_legacy_collapses_non_daily_frequencies() {
    let settings = intake_settings();
    let weekly = estimate_from_raw_inputs(1, 0, "Weekly", &settings);
    for label in ["Monthly", "Ad-hoc", "Rarely", "Continuous", ""] {
        let estimate = estimate_from_raw_inputs(1, 0, label, &settings);
        assert_eq!(estimate.labor, weekly.labor, "{label}");
    }
}

#[test]
fn test_estimate_with_calendar_table() {
    let estimator = RawInputEstimator::new(FrequencyTable::calendar());
    let estimate = estimator.estimate(2, 0, Frequency::Monthly, &intake_settings());
    assert_eq!(estimate.labor, 2.0 * 1.0 * 45.0 * 12.0);
}

#[test]
fn test_estimate_accepts_form_text() {
    let estimate = estimate_from_raw_inputs("2", "ten", "Daily", &intake_settings());
    assert_eq!(estimate.labor, 21_600.0);
    assert_eq!(estimate.error, 0.0);
    assert_eq!(estimate.total, 21_600.0);
}

#[test]
fn test_estimate_emits_synthetic_metrics() {
    let settings = intake_settings();
    let estimate = estimate_from_raw_inputs(2, 10, "Daily", &settings);

    let [labor, error] = estimate.synthetic_metrics.as_slice() else {
        panic!("expected two synthetic metrics");
    };
    assert_eq!(labor.metric_type, MetricType::Labor);
    assert_eq!(labor.value, estimate.labor);
    assert_eq!(error.metric_type, MetricType::Error);
    assert_eq!(error.value, estimate.error);

    // The synthetic records are re-derivable from their own measurements
    assert_eq!(compute_metric_value(labor, &settings), estimate.labor);
    assert_eq!(compute_metric_value(error, &settings), estimate.error);

    let impact = ImpactSet {
        financial: estimate.synthetic_metrics.clone(),
        ..ImpactSet::default()
    };
    assert_eq!(sum_impact(Some(&impact)), estimate.total);
}

#[test]
fn test_estimate_negative_inputs_are_floored_at_zero() {
    let settings = intake_settings();
    let estimate = estimate_from_raw_inputs("-2", "-10", "Daily", &settings);
    assert_eq!(estimate.labor, 0.0);
    assert_eq!(estimate.error, 0.0);
    assert_eq!(estimate.total, 0.0);

    for metric in &estimate.synthetic_metrics {
        assert_eq!(metric.value, 0.0);
        assert_eq!(compute_metric_value(metric, &settings), metric.value);
    }
}

#[test]
fn test_estimate_fractional_inputs_round_like_recompute() {
    let settings = intake_settings();
    let estimate = estimate_from_raw_inputs("0.001", "0", "Daily", &settings);
    assert_eq!(estimate.labor, 11.0);
    assert!(estimate.total >= 0.0);

    let mut metrics = estimate.synthetic_metrics.clone();
    for metric in &mut metrics {
        let stored = metric.value;
        metric.recompute(&settings);
        assert_eq!(metric.value, stored);
    }
    assert_eq!(
        metrics.iter().map(|m| m.value).sum::<f64>(),
        estimate.total
    );
}
