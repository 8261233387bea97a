//! Configuration structures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use signals_core::types::StrategyKind;
use signals_execution::OrderSizes;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::SettingsError;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub orders: OrderSizes,
    /// Strategy identifier to parameter object, handed to the registry as is.
    #[serde(default)]
    pub strategies: HashMap<String, Value>,
    /// Index rebalance targets. A list rather than a table because symbol
    /// keys would lose their case.
    #[serde(default)]
    pub target_weights: Vec<TargetWeight>,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "signals".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// Where market data lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// CSV file, or directory of `{SYMBOL}.csv` files
    pub dir: PathBuf,
    /// `Symbol,current_weight` snapshot for index rebalance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<PathBuf>,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
            weights: None,
        }
    }
}

/// One index rebalance target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetWeight {
    pub symbol: String,
    pub weight: f64,
}

impl AppConfig {
    /// Check settings that do not depend on a strategy's own parameters.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !matches!(self.logging.format.to_lowercase().as_str(), "pretty" | "json") {
            return Err(SettingsError::Invalid(format!(
                "logging.format must be pretty or json, got {}",
                self.logging.format
            )));
        }

        let orders = &self.orders;
        for (name, quantity) in [
            ("quantity", orders.quantity),
            ("quantity_a", orders.quantity_a),
            ("quantity_b", orders.quantity_b),
        ] {
            if quantity <= Decimal::ZERO {
                return Err(SettingsError::Invalid(format!(
                    "orders.{} must be positive",
                    name
                )));
            }
        }

        if let Some(id) = self
            .strategies
            .keys()
            .find(|id| id.parse::<StrategyKind>().is_err())
        {
            return Err(SettingsError::Invalid(format!("unknown strategy: {}", id)));
        }

        if let Some(target) = self
            .target_weights
            .iter()
            .find(|t| !(0.0..=1.0).contains(&t.weight))
        {
            return Err(SettingsError::Invalid(format!(
                "target weight for {} must be between 0 and 1",
                target.symbol
            )));
        }

        Ok(())
    }

    /// Strategy parameters with the configured target weights merged into
    /// the index rebalance entry.
    pub fn strategy_params(&self) -> HashMap<String, Value> {
        let mut params = self.strategies.clone();
        if self.target_weights.is_empty() {
            return params;
        }

        let targets: Map<String, Value> = self
            .target_weights
            .iter()
            .map(|t| (t.symbol.clone(), Value::from(t.weight)))
            .collect();

        let id = StrategyKind::IndexRebalance.id().to_string();
        let entry = params
            .entry(id)
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Value::Object(map) = entry {
            map.insert("target_weights".to_string(), Value::Object(targets));
        }
        params
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
