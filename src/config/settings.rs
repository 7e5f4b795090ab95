//! User settings for spendscope
//!
//! Display preferences and the sizes of the derived report views.

use serde::{Deserialize, Serialize};

use super::paths::SpendscopePaths;
use crate::error::SpendscopeError;

/// User settings, persisted as `config.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when rendering amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Number of categories shown in a breakdown report
    #[serde(default = "default_breakdown_limit")]
    pub breakdown_limit: usize,

    /// Number of top categories per type on the summary dashboard
    #[serde(default = "default_dashboard_top")]
    pub dashboard_top: usize,

    /// Number of recent transactions on the summary dashboard
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,

    /// Number of months kept in the monthly trend
    #[serde(default = "default_trend_months")]
    pub trend_months: usize,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_breakdown_limit() -> usize {
    crate::reports::aggregation::DISPLAY_BREAKDOWN_LIMIT
}

fn default_dashboard_top() -> usize {
    5
}

fn default_recent_count() -> usize {
    5
}

fn default_trend_months() -> usize {
    crate::reports::trend::TREND_WINDOW
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            breakdown_limit: default_breakdown_limit(),
            dashboard_top: default_dashboard_top(),
            recent_count: default_recent_count(),
            trend_months: default_trend_months(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &SpendscopePaths) -> Result<Self, SpendscopeError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - `init` decides when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| SpendscopeError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| SpendscopeError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendscopePaths) -> Result<(), SpendscopeError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SpendscopeError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SpendscopeError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
