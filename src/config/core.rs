use serde::{Deserialize, Serialize};

use super::frequency::FrequencyTable;
use super::settings::Settings;

/// Root configuration structure for impactmap
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ImpactmapConfig {
    /// Valuation settings (hourly rate, error cost, currency symbol)
    #[serde(default)]
    pub settings: Option<Settings>,

    /// Cycles-per-month table for the raw-input estimator
    #[serde(default)]
    pub frequency: Option<FrequencyTable>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// One of `terminal`, `json`, `markdown`
    #[serde(default)]
    pub default_format: Option<String>,
}

impl ImpactmapConfig {
    pub fn settings(&self) -> Settings {
        self.settings.clone().unwrap_or_default()
    }

    pub fn frequency_table(&self) -> FrequencyTable {
        self.frequency.clone().unwrap_or_default()
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|output| output.default_format.as_deref())
    }
}
