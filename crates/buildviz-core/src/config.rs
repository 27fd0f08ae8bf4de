use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};
use crate::i18n::Language;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub default_language: Language,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_stage_count")]
    pub stage_count: usize,
}

fn default_tick_interval_ms() -> u64 {
    3000
}

fn default_stage_count() -> usize {
    5
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            tick_interval_ms: default_tick_interval_ms(),
            stage_count: default_stage_count(),
        }
    }
}

impl DashboardConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(DashboardError::Config(
                "tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.stage_count == 0 {
            return Err(DashboardError::Config(
                "stage_count must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.default_language, Language::Vi);
        assert_eq!(config.tick_interval(), Duration::from_secs(3));
        assert_eq!(config.stage_count, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{ "default_language": "en" }"#).unwrap();
        assert_eq!(config.default_language, Language::En);
        assert_eq!(config.tick_interval_ms, 3000);
        assert_eq!(config.stage_count, 5);
    }

    #[test]
    fn test_zero_values_rejected() {
        let config = DashboardConfig {
            stage_count: 0,
            ..DashboardConfig::default()
        };
        assert!(matches!(config.validate(), Err(DashboardError::Config(_))));

        let config = DashboardConfig {
            tick_interval_ms: 0,
            ..DashboardConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
