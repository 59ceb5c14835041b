use crate::core::numeric::finite_or_zero;
use crate::core::{ImpactCategory, ImpactSet, Metric};
use serde::Serialize;

/// Per-category subtotals of stored metric values.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CategoryTotals {
    pub financial: f64,
    pub efficiency: f64,
    pub accuracy: f64,
    pub total: f64,
}

impl CategoryTotals {
    /// Sum what each metric currently stores. Values are trusted as-is, so
    /// analyst overrides are never silently replaced by a recomputation.
    pub fn from_impact(impact: Option<&ImpactSet>) -> Self {
        let Some(impact) = impact else {
            return Self::default();
        };

        let financial = category_sum(&impact.financial);
        let efficiency = category_sum(&impact.efficiency);
        let accuracy = category_sum(&impact.accuracy);

        Self {
            financial,
            efficiency,
            accuracy,
            total: financial + efficiency + accuracy,
        }
    }

    pub fn get(&self, category: ImpactCategory) -> f64 {
        match category {
            ImpactCategory::Financial => self.financial,
            ImpactCategory::Efficiency => self.efficiency,
            ImpactCategory::Accuracy => self.accuracy,
        }
    }
}

fn category_sum(metrics: &[Metric]) -> f64 {
    metrics.iter().map(|m| finite_or_zero(m.value)).sum()
}

/// Total potential annual value of an impact set; `0` when absent or empty.
pub fn sum_impact(impact: Option<&ImpactSet>) -> f64 {
    CategoryTotals::from_impact(impact).total
}
