//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Report formatting configuration.
    #[serde(default)]
    pub reports: ReportConfig,
    /// Calendar conversion configuration.
    #[serde(default)]
    pub calendar: CalendarConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "genfleet=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

/// Report formatting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Decimal places for hours and litres.
    #[serde(default = "default_hours_decimals")]
    pub hours_decimals: u32,
    /// Decimal places for costs and rates.
    #[serde(default = "default_amount_decimals")]
    pub amount_decimals: u32,
}

fn default_hours_decimals() -> u32 {
    1
}

fn default_amount_decimals() -> u32 {
    2
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            hours_decimals: default_hours_decimals(),
            amount_decimals: default_amount_decimals(),
        }
    }
}

/// Calendar conversion configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarConfig {
    /// Reject dates whose BS year is outside the month-length table.
    #[serde(default)]
    pub strict: bool,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("GENFLEET").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        temp_env::with_vars_unset(
            [
                "GENFLEET__LOGGING__FILTER",
                "GENFLEET__LOGGING__JSON",
                "GENFLEET__CALENDAR__STRICT",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.logging.filter, "genfleet=info");
                assert!(!config.logging.json);
                assert_eq!(config.reports.hours_decimals, 1);
                assert_eq!(config.reports.amount_decimals, 2);
                assert!(!config.calendar.strict);
            },
        );
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                ("GENFLEET__LOGGING__FILTER", Some("genfleet=debug")),
                ("GENFLEET__LOGGING__JSON", Some("true")),
                ("GENFLEET__CALENDAR__STRICT", Some("true")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.logging.filter, "genfleet=debug");
                assert!(config.logging.json);
                assert!(config.calendar.strict);
            },
        );
    }
}
