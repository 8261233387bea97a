//! Validate configuration command.

use anyhow::{Context, Result};
use signals_config::AppConfig;
use signals_core::types::StrategyKind;
use signals_strategies::StrategyRegistry;
use std::path::Path;

pub async fn run(config_path: Option<&Path>, config: &AppConfig) -> Result<()> {
    match config_path {
        Some(path) => println!("Validating configuration: {}", path.display()),
        None => println!("Validating defaults and environment overrides"),
    }

    let registry = StrategyRegistry::new();
    let params = config.strategy_params();
    for kind in StrategyKind::ALL {
        let value = params.get(kind.id()).cloned().unwrap_or_default();
        registry
            .create_kind(kind, value)
            .with_context(|| format!("Invalid parameters for {}", kind))?;
    }

    println!("Configuration is valid!");
    println!();
    println!("App: {}", config.app.name);
    println!("Environment: {}", config.app.environment);
    println!("Log level: {}", config.logging.level);
    println!("Data: {}", config.data.dir.display());
    println!("Order quantity: {}", config.orders.quantity);
    println!(
        "Pair quantities: {} / {}",
        config.orders.quantity_a, config.orders.quantity_b
    );
    println!();
    println!("{}", config.to_toml()?);

    Ok(())
}
