//! Append-only trade history.
//!
//! Trades are keyed by a strictly increasing [`TradeId`] and never mutated
//! or deleted once recorded.

use std::collections::BTreeMap;

use bourse_types::{Trade, TradeId};
use serde::{Deserialize, Serialize};

/// The trade log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradeLog {
    trades: BTreeMap<TradeId, Trade>,
    /// Next id to allocate. Only ever incremented.
    next_id: u64,
}

impl TradeLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trade, allocating the next trade id.
    pub fn append(&mut self, trade: Trade) -> TradeId {
        let id = TradeId(self.next_id);
        self.next_id += 1;
        self.trades.insert(id, trade);
        id
    }

    /// The trade with `id`, if recorded.
    #[must_use]
    pub fn trade(&self, id: TradeId) -> Option<&Trade> {
        self.trades.get(&id)
    }

    /// Number of recorded trades.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trades.len()
    }

    /// Whether no trade has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// Iterate trades in settlement order.
    pub fn iter(&self) -> impl Iterator<Item = (&TradeId, &Trade)> {
        self.trades.iter()
    }
}

#[cfg(test)]
mod tests {
    use bourse_types::AccountId;
    use chrono::Utc;
    use rust_decimal::Decimal;

    use super::*;

    fn make_trade(qty: Decimal) -> Trade {
        Trade {
            buyer: AccountId::new(),
            seller: AccountId::new(),
            price: Decimal::new(120, 2),
            quantity: qty,
            quote_amount: Decimal::new(120, 2) * qty,
            executed_at: Utc::now(),
        }
    }

    #[test]
    fn ids_are_sequential() {
        let mut log = TradeLog::new();
        assert_eq!(log.append(make_trade(Decimal::ONE)), TradeId(0));
        assert_eq!(log.append(make_trade(Decimal::TWO)), TradeId(1));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn lookup_recorded_trade() {
        let mut log = TradeLog::new();
        let id = log.append(make_trade(Decimal::new(50, 0)));
        let trade = log.trade(id).unwrap();
        assert_eq!(trade.quantity, Decimal::new(50, 0));
        assert!(log.trade(TradeId(7)).is_none());
    }

    #[test]
    fn iteration_in_settlement_order() {
        let mut log = TradeLog::new();
        log.append(make_trade(Decimal::ONE));
        log.append(make_trade(Decimal::TWO));
        let quantities: Vec<Decimal> = log.iter().map(|(_, t)| t.quantity).collect();
        assert_eq!(quantities, vec![Decimal::ONE, Decimal::TWO]);
    }

    #[test]
    fn log_serde_roundtrip() {
        let mut log = TradeLog::new();
        log.append(make_trade(Decimal::ONE));
        let json = serde_json::to_string(&log).unwrap();
        let mut back: TradeLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back.append(make_trade(Decimal::TWO)), TradeId(1));
    }
}
