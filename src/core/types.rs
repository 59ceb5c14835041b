//! Domain records shared by the valuation engine, the impact editor and the
//! portfolio views.

use super::numeric::{deserialize_lenient_f64, deserialize_text};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Valuation rule selector for a metric.
///
/// Unknown or missing type strings resolve to [`MetricType::Generic`], which
/// values the metric at its raw improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MetricType {
    /// Improvement measured in labor hours, valued at the hourly rate.
    Labor,
    /// Improvement measured in error occurrences, valued at the error cost.
    Error,
    /// Improvement already expressed in currency.
    Financial,
    #[default]
    Generic,
}

impl MetricType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::Labor => "labor",
            MetricType::Error => "error",
            MetricType::Financial => "financial",
            MetricType::Generic => "generic",
        }
    }

    /// Resolve a free-text type tag. Matching is exact after trimming and
    /// lowercasing; anything else is generic.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "labor" => MetricType::Labor,
            "error" => MetricType::Error,
            "financial" => MetricType::Financial,
            "" | "generic" => MetricType::Generic,
            other => {
                log::debug!("Unknown metric type '{}', using generic valuation", other);
                MetricType::Generic
            }
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MetricType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MetricType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = deserialize_text(deserializer)?;
        Ok(MetricType::from_tag(&tag))
    }
}

/// Where a metric's stored `value` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    /// Derived from baseline/target by the engine; refreshed on edits.
    #[default]
    Computed,
    /// Typed in by an analyst; kept until the override is cleared.
    Override,
}

impl ValueSource {
    pub fn is_computed(&self) -> bool {
        matches!(self, ValueSource::Computed)
    }
}

/// A single measured quantity inside an impact category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub unit: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub baseline: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub target: String,
    #[serde(rename = "type", default)]
    pub metric_type: MetricType,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub value: f64,
    #[serde(default, skip_serializing_if = "ValueSource::is_computed")]
    pub source: ValueSource,
}

impl Metric {
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit: unit.into(),
            baseline: "0".to_string(),
            target: "0".to_string(),
            metric_type: MetricType::Generic,
            value: 0.0,
            source: ValueSource::Computed,
        }
    }

    pub fn with_type(mut self, metric_type: MetricType) -> Self {
        self.metric_type = metric_type;
        self
    }

    pub fn with_measurements(mut self, baseline: impl Into<String>, target: impl Into<String>) -> Self {
        self.baseline = baseline.into();
        self.target = target.into();
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn is_overridden(&self) -> bool {
        self.source == ValueSource::Override
    }
}

/// The three impact categories attached to a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactCategory {
    Financial,
    Efficiency,
    Accuracy,
}

impl ImpactCategory {
    pub const ALL: [ImpactCategory; 3] = [
        ImpactCategory::Financial,
        ImpactCategory::Efficiency,
        ImpactCategory::Accuracy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactCategory::Financial => "financial",
            ImpactCategory::Efficiency => "efficiency",
            ImpactCategory::Accuracy => "accuracy",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ImpactCategory::Financial => "Financial",
            ImpactCategory::Efficiency => "Efficiency",
            ImpactCategory::Accuracy => "Accuracy",
        }
    }
}

impl fmt::Display for ImpactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three ordered metric lists. Missing or `null` lists load as empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImpactSet {
    #[serde(default, deserialize_with = "deserialize_metric_list")]
    pub financial: Vec<Metric>,
    #[serde(default, deserialize_with = "deserialize_metric_list")]
    pub efficiency: Vec<Metric>,
    #[serde(default, deserialize_with = "deserialize_metric_list")]
    pub accuracy: Vec<Metric>,
}

impl ImpactSet {
    pub fn metrics(&self, category: ImpactCategory) -> &[Metric] {
        match category {
            ImpactCategory::Financial => &self.financial,
            ImpactCategory::Efficiency => &self.efficiency,
            ImpactCategory::Accuracy => &self.accuracy,
        }
    }

    pub fn metrics_mut(&mut self, category: ImpactCategory) -> &mut Vec<Metric> {
        match category {
            ImpactCategory::Financial => &mut self.financial,
            ImpactCategory::Efficiency => &mut self.efficiency,
            ImpactCategory::Accuracy => &mut self.accuracy,
        }
    }

    pub fn is_empty(&self) -> bool {
        ImpactCategory::ALL
            .iter()
            .all(|category| self.metrics(*category).is_empty())
    }

    pub fn metric_count(&self) -> usize {
        ImpactCategory::ALL
            .iter()
            .map(|category| self.metrics(*category).len())
            .sum()
    }

    /// Iterate every metric together with the category that owns it.
    pub fn iter(&self) -> impl Iterator<Item = (ImpactCategory, &Metric)> {
        ImpactCategory::ALL.into_iter().flat_map(move |category| {
            self.metrics(category)
                .iter()
                .map(move |metric| (category, metric))
        })
    }
}

fn deserialize_metric_list<'de, D>(deserializer: D) -> Result<Vec<Metric>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Metric>>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_impact<'de, D>(deserializer: D) -> Result<ImpactSet, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ImpactSet>::deserialize(deserializer)?.unwrap_or_default())
}

/// The slice of a submitted process that valuation and prioritization read.
///
/// Fields this crate does not interpret are preserved in `extra` so records
/// survive a load/save cycle unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProcessRecord {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_signal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_score: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feasibility_score: Option<String>,
    #[serde(default, deserialize_with = "deserialize_impact")]
    pub impact: ImpactSet,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub potential_value: f64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ProcessRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Declared execution frequency of a submitted workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Frequency {
    Continuous,
    Daily,
    Weekly,
    Monthly,
    AdHoc,
    Rarely,
    #[default]
    Unspecified,
}

impl Frequency {
    /// Resolve a form label. Case, spaces, `-` and `_` are ignored.
    pub fn parse(label: &str) -> Self {
        let normalized: String = label
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "continuous" => Frequency::Continuous,
            "daily" => Frequency::Daily,
            "weekly" => Frequency::Weekly,
            "monthly" => Frequency::Monthly,
            "adhoc" => Frequency::AdHoc,
            "rarely" => Frequency::Rarely,
            _ => Frequency::Unspecified,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Continuous => "Continuous",
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::AdHoc => "Ad-hoc",
            Frequency::Rarely => "Rarely",
            Frequency::Unspecified => "Unspecified",
        }
    }
}

impl From<&str> for Frequency {
    fn from(label: &str) -> Self {
        Frequency::parse(label)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Frequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_metric_type_from_tag() {
        assert_eq!(MetricType::from_tag("labor"), MetricType::Labor);
        assert_eq!(MetricType::from_tag(" Error "), MetricType::Error);
        assert_eq!(MetricType::from_tag("FINANCIAL"), MetricType::Financial);
        assert_eq!(MetricType::from_tag("labour"), MetricType::Generic);
        assert_eq!(MetricType::from_tag(""), MetricType::Generic);
    }

    #[test]
    fn test_metric_loads_from_loose_json() {
        let metric: Metric = serde_json::from_str(
            r#"{"id": 1712345678, "name": "Manual effort", "baseline": 100, "target": "20", "type": "labor", "value": "4000"}"#,
        )
        .unwrap();

        assert_eq!(metric.id, "1712345678");
        assert_eq!(metric.baseline, "100");
        assert_eq!(metric.target, "20");
        assert_eq!(metric.metric_type, MetricType::Labor);
        assert_eq!(metric.value, 4000.0);
        assert_eq!(metric.unit, "");
        assert_eq!(metric.source, ValueSource::Computed);
    }

    #[test]
    fn test_metric_without_type_is_generic() {
        let metric: Metric = serde_json::from_str(r#"{"id": "a1", "value": 12}"#).unwrap();
        assert_eq!(metric.metric_type, MetricType::Generic);

        let metric: Metric = serde_json::from_str(r#"{"id": "a1", "type": null}"#).unwrap();
        assert_eq!(metric.metric_type, MetricType::Generic);
    }

    #[test]
    fn test_computed_source_is_not_serialized() {
        let metric = Metric::new("f1", "Savings", "$");
        let json = serde_json::to_value(&metric).unwrap();
        assert!(json.get("source").is_none());
        assert_eq!(json["type"], "generic");

        let mut overridden = metric;
        overridden.source = ValueSource::Override;
        let json = serde_json::to_value(&overridden).unwrap();
        assert_eq!(json["source"], "override");
    }

    #[test]
    fn test_impact_set_tolerates_missing_and_null_lists() {
        let impact: ImpactSet =
            serde_json::from_str(r#"{"financial": [{"id": "f1", "value": 5}], "accuracy": null}"#)
                .unwrap();
        assert_eq!(impact.financial.len(), 1);
        assert!(impact.efficiency.is_empty());
        assert!(impact.accuracy.is_empty());
        assert_eq!(impact.metric_count(), 1);
    }

    #[test]
    fn test_impact_set_iter_preserves_category_order() {
        let impact = ImpactSet {
            financial: vec![Metric::new("f1", "a", "$")],
            efficiency: vec![Metric::new("e1", "b", "Hours")],
            accuracy: vec![Metric::new("a1", "c", "%")],
        };
        let ids: Vec<_> = impact
            .iter()
            .map(|(category, metric)| format!("{}:{}", category, metric.id))
            .collect();
        assert_eq!(ids, vec!["financial:f1", "efficiency:e1", "accuracy:a1"]);
    }

    #[test]
    fn test_process_record_keeps_unknown_fields() {
        let json = r#"{"id": 7, "name": "AP Reconciliation", "company": "Acme",
            "impact": null, "potential_value": "1200", "team_size": "6-10"}"#;
        let process: ProcessRecord = serde_json::from_str(json).unwrap();

        assert_eq!(process.id, "7");
        assert!(process.impact.is_empty());
        assert_eq!(process.potential_value, 1200.0);
        assert_eq!(process.extra["team_size"], "6-10");

        let round_trip = serde_json::to_value(&process).unwrap();
        assert_eq!(round_trip["team_size"], "6-10");
    }

    #[test]
    fn test_frequency_parse() {
        assert_eq!(Frequency::parse("Daily"), Frequency::Daily);
        assert_eq!(Frequency::parse("ad-hoc"), Frequency::AdHoc);
        assert_eq!(Frequency::parse("Ad hoc"), Frequency::AdHoc);
        assert_eq!(Frequency::parse("WEEKLY"), Frequency::Weekly);
        assert_eq!(Frequency::parse(""), Frequency::Unspecified);
        assert_eq!(Frequency::parse("fortnightly"), Frequency::Unspecified);
    }
}
