//! Properties every strategy output must satisfy.

use proptest::prelude::*;
use serde_json::json;
use signals_core::{columns, error::StrategyError, Strategy, Table, WeightRow};
use signals_strategies::{BuiltinStrategy, StrategyRegistry};

fn small_params(id: &str) -> serde_json::Value {
    match id {
        "trend_following" => json!({ "short_window": 2, "long_window": 5 }),
        "mean_reversion" => json!({ "rsi_period": 3 }),
        "market_timing" => json!({ "sma_window": 4 }),
        "arbitrage" => json!({ "spread_window": 3, "threshold": 1.0, "ratio": 0.5 }),
        _ => json!({ "target_weights": { "AAPL": 0.5, "MSFT": 0.3 }, "threshold": 0.02 }),
    }
}

fn all_strategies() -> Vec<BuiltinStrategy> {
    let registry = StrategyRegistry::new();
    registry
        .names()
        .into_iter()
        .map(|id| registry.create(id, small_params(id)).unwrap())
        .collect()
}

/// A table carrying every column any strategy needs.
fn universal_table(closes: &[f64], weights: &[f64]) -> Table {
    let n = closes.len();
    let symbols: Vec<String> = (0..n)
        .map(|i| ["AAPL", "MSFT", "TSLA"][i % 3].to_string())
        .collect();
    let close_b: Vec<f64> = closes.iter().rev().copied().collect();

    Table::new((0..n as i64).map(|i| 1_700_000_000_000 + i * 60_000).collect())
        .with_column(columns::CLOSE, closes.to_vec())
        .unwrap()
        .with_column(columns::CLOSE_A, closes.to_vec())
        .unwrap()
        .with_column(columns::CLOSE_B, close_b)
        .unwrap()
        .with_column(columns::SYMBOL, symbols)
        .unwrap()
        .with_column(columns::CURRENT_WEIGHT, weights[..n].to_vec())
        .unwrap()
}

fn same_values(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
}

proptest! {
    #[test]
    fn prop_position_is_signal_transition(
        closes in prop::collection::vec(1.0f64..500.0, 0..60),
        weights in prop::collection::vec(0.0f64..1.0, 60),
    ) {
        let table = universal_table(&closes, &weights);

        for strategy in all_strategies() {
            let out = strategy.generate_signals(&table).unwrap();
            let signal = out.floats(columns::SIGNAL).unwrap();
            let position = out.floats(columns::POSITION).unwrap();

            prop_assert_eq!(signal.len(), table.len());
            prop_assert_eq!(position.len(), table.len());
            prop_assert!(signal.iter().all(|s| [-1.0, 0.0, 1.0].contains(s)));
            if let Some(first) = position.first() {
                prop_assert!(first.is_nan());
            }
            for i in 1..position.len() {
                prop_assert_eq!(position[i], signal[i] - signal[i - 1]);
            }
        }
    }

    #[test]
    fn prop_generate_is_pure(
        closes in prop::collection::vec(1.0f64..500.0, 1..40),
        weights in prop::collection::vec(0.0f64..1.0, 40),
    ) {
        let table = universal_table(&closes, &weights);
        let snapshot = table.clone();

        for strategy in all_strategies() {
            let first = strategy.generate_signals(&table).unwrap();
            let second = strategy.generate_signals(&table).unwrap();

            prop_assert_eq!(&table, &snapshot);
            let names: Vec<&str> = first.column_names().collect();
            prop_assert_eq!(&names, &second.column_names().collect::<Vec<_>>());
            for name in names {
                match (first.floats(name), second.floats(name)) {
                    (Ok(a), Ok(b)) => prop_assert!(same_values(a, b), "column {} differs", name),
                    _ => prop_assert_eq!(first.column(name), second.column(name)),
                }
            }
        }
    }
}

#[test]
fn close_strategies_name_missing_close() {
    let table = Table::from_weights(&[WeightRow::new("AAPL", 0.5)]);
    let registry = StrategyRegistry::new();

    for id in ["trend_following", "mean_reversion", "market_timing"] {
        let strategy = registry.create_default(id).unwrap();
        assert_eq!(
            strategy.generate_signals(&table).unwrap_err(),
            StrategyError::MissingColumn("Close".to_string()),
            "{}",
            id
        );
    }
}

#[test]
fn empty_table_yields_empty_columns() {
    let table = universal_table(&[], &[]);

    for strategy in all_strategies() {
        let out = strategy.generate_signals(&table).unwrap();
        assert!(out.floats(columns::POSITION).unwrap().is_empty());
    }
}
