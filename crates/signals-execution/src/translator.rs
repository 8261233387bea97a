//! Signal-to-action translation.

use signals_core::{
    columns,
    types::{Table, TradeIntent},
};
use tracing::{info, warn};

use crate::plan::OrderPlan;

/// Direction of the latest regime change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Signal moved up (0 -> 1, -1 -> 0 or -1 -> 1)
    Up,
    /// Signal moved down
    Down,
    /// No change, no history, or no position column
    None,
}

/// Read the final row's `position` value.
///
/// Empty tables, tables without a numeric `position` column and an undefined
/// (NaN) final position all read as [`Transition::None`].
pub fn last_transition(table: &Table) -> Transition {
    match table.last_float(columns::POSITION) {
        Some(p) if p > 0.0 => Transition::Up,
        Some(p) if p < 0.0 => Transition::Down,
        _ => Transition::None,
    }
}

/// Turn the latest transition of a strategy output into trade intents.
pub fn translate(table: &Table, plan: &OrderPlan) -> Vec<TradeIntent> {
    let transition = last_transition(table);
    if transition == Transition::None {
        return Vec::new();
    }
    let rising = transition == Transition::Up;

    let intents = match plan {
        OrderPlan::Single { symbol, quantity } => {
            if rising {
                vec![TradeIntent::buy(symbol.clone(), *quantity)]
            } else {
                vec![TradeIntent::sell(symbol.clone(), *quantity)]
            }
        }
        OrderPlan::Pair { a, b } => {
            if rising {
                vec![
                    TradeIntent::buy(a.symbol.clone(), a.quantity),
                    TradeIntent::sell(b.symbol.clone(), b.quantity),
                ]
            } else {
                vec![
                    TradeIntent::sell(a.symbol.clone(), a.quantity),
                    TradeIntent::buy(b.symbol.clone(), b.quantity),
                ]
            }
        }
        OrderPlan::Rebalance { quantity } => match table.last_text(columns::SYMBOL) {
            Some(symbol) if rising => vec![TradeIntent::buy(symbol, *quantity)],
            Some(symbol) => vec![TradeIntent::sell(symbol, *quantity)],
            None => {
                warn!("Rebalance transition without a Symbol column, no trade");
                Vec::new()
            }
        },
    };

    for intent in &intents {
        info!(
            symbol = %intent.symbol,
            side = %intent.side,
            quantity = %intent.quantity,
            "Trade intent"
        );
    }

    intents
}
