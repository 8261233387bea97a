//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, DataSettings, LoggingConfig, TargetWeight};

use config::{Config, Environment, File};
use std::path::Path;
use thiserror::Error;

/// Prefix for environment overrides, e.g. `SIGNALS__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "SIGNALS";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Load configuration from file and environment.
///
/// Without a file only defaults and environment overrides apply.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, SettingsError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }

    let config = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let settings: AppConfig = config.try_deserialize()?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("signals.toml");
        fs::write(
            &path,
            r#"
[logging]
level = "debug"

[orders]
quantity = 25

[strategies.trend_following]
short_window = 10
long_window = 50

[[target_weights]]
symbol = "SPY"
weight = 0.6
"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.orders.quantity, dec!(25));
        assert_eq!(config.orders.quantity_a, dec!(10));
        assert_eq!(config.strategies["trend_following"]["long_window"], 50);
        assert_eq!(config.target_weights[0].symbol, "SPY");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(SettingsError::Load(_))));
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("signals.toml");
        fs::write(&path, "[logging]\nformat = \"xml\"\n").unwrap();

        assert!(matches!(
            load_config(Some(&path)),
            Err(SettingsError::Invalid(_))
        ));
    }
}
