//! Strategy registry: builds strategies from an identifier and parameters.

use crate::{
    ArbitrageConfig, ArbitrageStrategy, BuiltinStrategy, IndexRebalanceConfig,
    IndexRebalanceStrategy, MarketTimingConfig, MarketTimingStrategy, MeanReversionConfig,
    MeanReversionStrategy, Mode, TrendFollowingConfig, TrendFollowingStrategy,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use signals_core::{
    error::StrategyError,
    traits::{Strategy, StrategyConfig},
    types::StrategyKind,
};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// Information about a registered strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyInfo {
    /// Registry identifier
    pub id: String,
    /// Strategy name
    pub name: String,
    /// Strategy description
    pub description: String,
    /// Required input columns
    pub required_columns: Vec<String>,
    /// Default configuration as JSON
    pub default_config: Value,
}

/// Registry for the built-in strategies.
pub struct StrategyRegistry {
    strategies: BTreeMap<String, StrategyInfo>,
}

impl StrategyRegistry {
    /// Create a new strategy registry with all built-in strategies.
    pub fn new() -> Self {
        let strategies = StrategyKind::ALL
            .into_iter()
            .map(|kind| {
                let strategy = default_strategy(kind);
                let info = StrategyInfo {
                    id: kind.id().to_string(),
                    name: strategy.name().to_string(),
                    description: strategy.description().to_string(),
                    required_columns: strategy
                        .required_columns()
                        .iter()
                        .map(|c| c.to_string())
                        .collect(),
                    default_config: default_config(kind),
                };
                (info.id.clone(), info)
            })
            .collect();

        Self { strategies }
    }

    /// List all available strategies, ordered by identifier.
    pub fn list(&self) -> Vec<&StrategyInfo> {
        self.strategies.values().collect()
    }

    /// Get strategy info by identifier.
    pub fn get(&self, id: &str) -> Option<&StrategyInfo> {
        self.strategies.get(id)
    }

    /// Check if a strategy exists.
    pub fn exists(&self, id: &str) -> bool {
        self.strategies.contains_key(id)
    }

    /// Get all strategy identifiers.
    pub fn names(&self) -> Vec<&String> {
        self.strategies.keys().collect()
    }

    /// Create a strategy from its identifier and a parameter object.
    ///
    /// Missing parameters take the strategy's defaults; `Value::Null` means
    /// "all defaults".
    ///
    /// # Errors
    /// `Unsupported` for unknown identifiers, `InvalidConfig` for parameters
    /// that do not parse or validate.
    pub fn create(&self, id: &str, params: Value) -> Result<BuiltinStrategy, StrategyError> {
        let kind: StrategyKind = id.parse()?;
        self.create_kind(kind, params)
    }

    /// Create a strategy of a known kind.
    pub fn create_kind(
        &self,
        kind: StrategyKind,
        params: Value,
    ) -> Result<BuiltinStrategy, StrategyError> {
        let strategy: BuiltinStrategy = match kind {
            StrategyKind::TrendFollowing => {
                let config: TrendFollowingConfig = parse_config(kind, params)?;
                TrendFollowingStrategy::new(config).into()
            }
            StrategyKind::MeanReversion => {
                let config: MeanReversionConfig = parse_config(kind, params)?;
                MeanReversionStrategy::new(config).into()
            }
            StrategyKind::MarketTiming => {
                let config: MarketTimingConfig = parse_config(kind, params)?;
                MarketTimingStrategy::new(config).into()
            }
            StrategyKind::Arbitrage => {
                let config: ArbitrageConfig = parse_config(kind, params)?;
                ArbitrageStrategy::new(config).into()
            }
            StrategyKind::IndexRebalance => {
                let mut params = params;
                // explicit null means "not configured"
                if let Value::Object(map) = &mut params {
                    if map.get("target_weights").is_some_and(Value::is_null) {
                        map.remove("target_weights");
                    }
                }
                if params.get("target_weights").is_none() {
                    warn!("No target weights configured, using placeholder AAPL/MSFT 50/50");
                }
                let config: IndexRebalanceConfig = parse_config(kind, params)?;
                IndexRebalanceStrategy::new(config).into()
            }
        };

        debug!(strategy = %kind, "Strategy created");
        Ok(strategy)
    }

    /// Create a strategy with default configuration.
    pub fn create_default(&self, id: &str) -> Result<BuiltinStrategy, StrategyError> {
        self.create(id, Value::Null)
    }

    /// Create every strategy a mode runs.
    ///
    /// `params` maps strategy identifiers to parameter objects; strategies
    /// without an entry use their defaults.
    pub fn create_for_mode(
        &self,
        mode: Mode,
        params: &HashMap<String, Value>,
    ) -> Result<Vec<BuiltinStrategy>, StrategyError> {
        mode.strategies()
            .iter()
            .map(|&kind| {
                let params = params.get(kind.id()).cloned().unwrap_or(Value::Null);
                self.create_kind(kind, params)
            })
            .collect()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_config<C>(kind: StrategyKind, params: Value) -> Result<C, StrategyError>
where
    C: StrategyConfig + DeserializeOwned,
{
    let params = match params {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };

    let config: C = serde_json::from_value(params)
        .map_err(|e| StrategyError::InvalidConfig(format!("{}: {}", kind, e)))?;
    config.validate()?;
    Ok(config)
}

fn default_strategy(kind: StrategyKind) -> BuiltinStrategy {
    match kind {
        StrategyKind::TrendFollowing => TrendFollowingStrategy::new(Default::default()).into(),
        StrategyKind::MeanReversion => MeanReversionStrategy::new(Default::default()).into(),
        StrategyKind::MarketTiming => MarketTimingStrategy::new(Default::default()).into(),
        StrategyKind::Arbitrage => ArbitrageStrategy::new(Default::default()).into(),
        StrategyKind::IndexRebalance => IndexRebalanceStrategy::new(Default::default()).into(),
    }
}

fn default_config(kind: StrategyKind) -> Value {
    let value = match kind {
        StrategyKind::TrendFollowing => serde_json::to_value(TrendFollowingConfig::default()),
        StrategyKind::MeanReversion => serde_json::to_value(MeanReversionConfig::default()),
        StrategyKind::MarketTiming => serde_json::to_value(MarketTimingConfig::default()),
        StrategyKind::Arbitrage => serde_json::to_value(ArbitrageConfig::default()),
        StrategyKind::IndexRebalance => serde_json::to_value(IndexRebalanceConfig::default()),
    };
    value.unwrap_or(Value::Null)
}
