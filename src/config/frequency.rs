//! Cycles-per-month table used by the raw-input estimator.
//!
//! The default [`FrequencyTable::legacy`] table reproduces the intake form's
//! historical heuristic: `Daily` runs 20 cycles a month and every other
//! frequency runs 4. It is a coarse approximation of working-day density,
//! kept as the default so existing estimates stay stable. The
//! [`FrequencyTable::calendar`] preset distinguishes weekly, monthly and
//! ad-hoc work.

use crate::core::Frequency;
use serde::{Deserialize, Serialize};

/// Entries missing from a configured table keep their legacy values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyTable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuous: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_hoc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarely: Option<f64>,

    /// Cycles for any frequency without its own entry
    pub fallback: f64,
}

fn default_fallback_cycles() -> f64 {
    4.0
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::legacy()
    }
}

impl FrequencyTable {
    /// `Daily → 20`, everything else `→ 4`.
    pub fn legacy() -> Self {
        Self {
            continuous: None,
            daily: Some(20.0),
            weekly: None,
            monthly: None,
            ad_hoc: None,
            rarely: None,
            fallback: default_fallback_cycles(),
        }
    }

    /// `Daily → 20`, `Weekly → 4`, `Monthly → 1`, `Ad-hoc → 1`.
    pub fn calendar() -> Self {
        Self {
            daily: Some(20.0),
            weekly: Some(4.0),
            monthly: Some(1.0),
            ad_hoc: Some(1.0),
            ..Self::legacy()
        }
    }

    pub fn cycles_per_month(&self, frequency: Frequency) -> f64 {
        let entry = match frequency {
            Frequency::Continuous => self.continuous,
            Frequency::Daily => self.daily,
            Frequency::Weekly => self.weekly,
            Frequency::Monthly => self.monthly,
            Frequency::AdHoc => self.ad_hoc,
            Frequency::Rarely => self.rarely,
            Frequency::Unspecified => None,
        };
        entry.unwrap_or(self.fallback)
    }

    fn entries(&self) -> [(&'static str, Option<f64>); 7] {
        [
            ("continuous", self.continuous),
            ("daily", self.daily),
            ("weekly", self.weekly),
            ("monthly", self.monthly),
            ("ad_hoc", self.ad_hoc),
            ("rarely", self.rarely),
            ("fallback", Some(self.fallback)),
        ]
    }

    /// Every entry must be a finite, non-negative cycle count.
    pub fn validate(&self) -> Result<(), String> {
        self.entries()
            .into_iter()
            .filter_map(|(name, cycles)| cycles.map(|c| (name, c)))
            .try_for_each(|(name, cycles)| {
                if cycles.is_finite() && cycles >= 0.0 {
                    Ok(())
                } else {
                    Err(format!(
                        "frequency.{} must be a non-negative number of cycles per month, got {}",
                        name, cycles
                    ))
                }
            })
    }
}
