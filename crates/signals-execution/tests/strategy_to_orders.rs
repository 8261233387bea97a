//! Strategy outputs flowing through the translator and the paper executor.

use rust_decimal_macros::dec;
use serde_json::json;
use signals_core::traits::{OrderExecutor, Strategy};
use signals_core::types::{columns, Side, StrategyKind, Table, TradeIntent, WeightRow};
use signals_execution::{translate, OrderPlan, OrderSizes, PaperExecutor};
use signals_strategies::StrategyRegistry;

fn close_table(prices: &[f64]) -> Table {
    Table::new((0..prices.len() as i64).collect())
        .with_column(columns::CLOSE, prices.to_vec())
        .unwrap()
}

fn symbols(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_crossover_row_buys_then_holds() {
    let strategy = StrategyRegistry::new()
        .create("trend_following", json!({ "short_window": 2, "long_window": 4 }))
        .unwrap();
    let plan = OrderPlan::for_kind(
        StrategyKind::TrendFollowing,
        &symbols(&["AAPL"]),
        &OrderSizes::default(),
    )
    .unwrap();
    let prices: Vec<f64> = (1..=10).map(f64::from).collect();

    // the crossover lands on the fourth row
    let at_cross = strategy.generate_signals(&close_table(&prices[..4])).unwrap();
    let intents = translate(&at_cross, &plan);
    assert_eq!(intents, vec![TradeIntent::buy("AAPL", dec!(10))]);

    let executor = PaperExecutor::new();
    let receipts = executor.place_all(&intents).await.unwrap();
    assert_eq!(receipts[0].intent.side, Side::Buy);

    // afterwards the regime holds and nothing trades
    let holding = strategy.generate_signals(&close_table(&prices)).unwrap();
    assert!(translate(&holding, &plan).is_empty());
}

#[test]
fn test_arbitrage_breakout_trades_both_legs() {
    let strategy = StrategyRegistry::new()
        .create("arbitrage", json!({ "spread_window": 4, "threshold": 1.0 }))
        .unwrap();
    let table = Table::new((0..5).collect())
        .with_column(columns::CLOSE_A, vec![100.0, 101.0, 100.0, 101.0, 110.0])
        .unwrap()
        .with_column(columns::CLOSE_B, vec![100.0; 5])
        .unwrap();
    let sizes = OrderSizes {
        quantity_a: dec!(4),
        quantity_b: dec!(6),
        ..Default::default()
    };
    let plan =
        OrderPlan::for_kind(StrategyKind::Arbitrage, &symbols(&["KO", "PEP"]), &sizes).unwrap();

    let intents = translate(&strategy.generate_signals(&table).unwrap(), &plan);
    assert_eq!(
        intents,
        vec![TradeIntent::sell("KO", dec!(4)), TradeIntent::buy("PEP", dec!(6))]
    );
}

#[test]
fn test_rebalance_last_row_symbol() {
    let strategy = StrategyRegistry::new()
        .create(
            "index_rebalance",
            json!({ "target_weights": { "SPY": 0.6, "TLT": 0.4 } }),
        )
        .unwrap();
    let table = Table::from_weights(&[WeightRow::new("SPY", 0.6), WeightRow::new("TLT", 0.5)]);
    let plan =
        OrderPlan::for_kind(StrategyKind::IndexRebalance, &[], &OrderSizes::default()).unwrap();

    let intents = translate(&strategy.generate_signals(&table).unwrap(), &plan);
    assert_eq!(intents, vec![TradeIntent::sell("TLT", dec!(10))]);
}

#[test]
fn test_warmup_only_history_never_trades() {
    let registry = StrategyRegistry::new();
    for kind in [
        StrategyKind::TrendFollowing,
        StrategyKind::MeanReversion,
        StrategyKind::MarketTiming,
    ] {
        let strategy = registry.create_kind(kind, serde_json::Value::Null).unwrap();
        let plan = OrderPlan::for_kind(kind, &symbols(&["AAPL"]), &OrderSizes::default()).unwrap();
        let output = strategy.generate_signals(&close_table(&[10.0, 11.0, 12.0])).unwrap();
        assert!(translate(&output, &plan).is_empty(), "{} traded during warmup", kind);
    }
}
