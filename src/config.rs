use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// environment variable holding a tracing filter directive
pub const LOG_ENV_VAR: &str = "LOAN_CALC_LOG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// shell configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub prompt: String,
    pub intro: String,
    /// decimal places used when rendering amounts and rates
    pub display_precision: u32,
    pub color: bool,
    /// default tracing directive when `LOAN_CALC_LOG` is unset
    pub log_filter: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "loan_calc> ".to_string(),
            intro: "Welcome to the Enhanced Loan Calculator. Type help or ? to list commands."
                .to_string(),
            display_precision: 2,
            color: true,
            log_filter: "loan_calculator=warn".to_string(),
        }
    }
}

impl ShellConfig {
    /// configuration for non-interactive runs: no colour, no intro
    pub fn script() -> Self {
        Self {
            intro: String::new(),
            color: false,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// load from a json file; absent fields take their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        Self::from_json_str(&contents).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.prompt, "loan_calc> ");
        assert_eq!(config.display_precision, 2);
        assert!(config.color);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ShellConfig::from_json_str(r#"{ "display_precision": 4, "color": false }"#)
            .unwrap();
        assert_eq!(config.display_precision, 4);
        assert!(!config.color);
        assert_eq!(config.prompt, ShellConfig::default().prompt);
    }

    #[test]
    fn test_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("loan_calc_config_{}.json", std::process::id()));
        let config = ShellConfig {
            prompt: "> ".to_string(),
            ..ShellConfig::script()
        };
        fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = ShellConfig::load(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let path = std::env::temp_dir().join(format!("loan_calc_bad_{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();

        let err = ShellConfig::load(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("loan_calc_bad_"));
    }

    #[test]
    fn test_missing_file() {
        let err = ShellConfig::load("/nonexistent/loan_calc.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
