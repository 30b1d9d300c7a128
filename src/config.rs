//! Dashboard Configuration
//!
//! Sample data and startup settings, embedded at build time from `dashboard.json`.

use serde::{Deserialize, Serialize};

use crate::models::{ChartDataset, GridColumn, GridRow};
use crate::theme::ThemeMode;

const EMBEDDED_CONFIG: &str = include_str!("../dashboard.json");

/// Common result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    pub columns: Vec<GridColumn>,
    #[serde(default)]
    pub rows: Vec<GridRow>,
}

fn default_page_size() -> usize {
    5
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub title: String,
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub seed_tasks: Vec<String>,
    pub grid: GridConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl DashboardConfig {
    /// Load the configuration compiled into the binary
    pub fn load() -> ConfigResult<Self> {
        Self::from_json(EMBEDDED_CONFIG)
    }

    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: DashboardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.grid.page_size == 0 {
            return Err(ConfigError::Invalid("grid.page_size must be positive".to_string()));
        }
        if self.grid.columns.is_empty() {
            return Err(ConfigError::Invalid("grid.columns is empty".to_string()));
        }
        for dataset in &self.chart.datasets {
            if dataset.data.len() != self.chart.labels.len() {
                return Err(ConfigError::Invalid(format!(
                    "chart dataset '{}' has {} points for {} labels",
                    dataset.label,
                    dataset.data.len(),
                    self.chart.labels.len()
                )));
            }
        }
        if let Some(blank) = self.seed_tasks.iter().position(|t| t.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("seed task #{} is blank", blank + 1)));
        }
        Ok(())
    }

    /// Minimal configuration used when the embedded one cannot be loaded
    pub fn fallback() -> Self {
        Self {
            title: "Dashboard".to_string(),
            theme: ThemeMode::Light,
            log_level: default_log_level(),
            seed_tasks: vec!["First task".into(), "Second task".into(), "Third task".into()],
            grid: GridConfig {
                page_size: default_page_size(),
                columns: vec![GridColumn { field: "id".into(), header_name: "ID".into(), width: 90 }],
                rows: Vec::new(),
            },
            chart: ChartConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = DashboardConfig::load().expect("embedded config should be valid");
        assert_eq!(config.title, "Tarun's Dashboard");
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.seed_tasks, vec!["First task", "Second task", "Third task"]);
        assert_eq!(config.grid.page_size, 5);
        assert_eq!(config.grid.columns.len(), 3);
        assert_eq!(config.grid.rows.len(), 3);
        assert_eq!(config.chart.labels.len(), 7);
        assert_eq!(config.chart.datasets[0].data, vec![65.0, 59.0, 80.0, 81.0, 56.0, 55.0, 40.0]);
    }

    #[test]
    fn test_fallback_is_valid() {
        assert!(DashboardConfig::fallback().validate().is_ok());
    }

    #[test]
    fn test_parse_error() {
        let err = DashboardConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error:"));
    }

    #[test]
    fn test_validation_errors() {
        let mut config = DashboardConfig::fallback();
        config.grid.page_size = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = DashboardConfig::load().unwrap();
        config.chart.labels.pop();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid("chart dataset 'My First Dataset' has 7 points for 6 labels".to_string())
        );

        let mut config = DashboardConfig::fallback();
        config.seed_tasks.push("  ".to_string());
        assert_eq!(config.validate(), Err(ConfigError::Invalid("seed task #4 is blank".to_string())));
    }
}
