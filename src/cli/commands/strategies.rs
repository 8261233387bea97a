//! List strategies command.

use anyhow::Result;
use signals_strategies::{Mode, StrategyRegistry};

pub async fn run() -> Result<()> {
    let registry = StrategyRegistry::new();

    println!("Available Strategies");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    for info in registry.list() {
        println!("  {} ({})", info.name, info.id);
        println!("  ───────────────────────────────────────────────────────");
        println!("  {}", info.description);
        println!("  Requires: {}", info.required_columns.join(", "));
        println!("  Defaults: {}", info.default_config);
        println!();
    }

    println!("Trading modes");
    println!("═══════════════════════════════════════════════════════════");
    for mode in Mode::ALL {
        let ids: Vec<&str> = mode.strategies().iter().map(|k| k.id()).collect();
        println!("  {:<12} {}", mode.id(), ids.join(", "));
    }
    println!();

    println!("Use --strategy <id> with `run`, or --mode <mode> with `mode`.");

    Ok(())
}
