//! Trade types produced by settlement.
//!
//! A [`Trade`] is the immutable record of one fill between a buy order and
//! a sell order. Trades are appended to the trade log and never mutated or
//! deleted afterwards.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::AccountId;

/// A settled fill between one buyer and one seller.
///
/// The execution price is always the resting *sell* order's price, so a
/// crossing buy order receives any price improvement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// The buy order's owner.
    pub buyer: AccountId,
    /// The sell order's owner.
    pub seller: AccountId,
    /// Execution price (the sell order's quoted price).
    pub price: Decimal,
    /// Filled quantity: `min(buy remaining, sell remaining)`.
    pub quantity: Decimal,
    /// Quote value moved to the seller: `price × quantity`.
    pub quote_amount: Decimal,
    /// When the trade was settled.
    pub executed_at: DateTime<Utc>,
}

impl Trade {
    /// Notional value of the fill (quote amount).
    #[must_use]
    pub fn notional(&self) -> Decimal {
        self.quote_amount
    }
}

impl std::fmt::Display for Trade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Trade {} @ {} = {} ({} <- {})",
            self.quantity, self.price, self.quote_amount, self.buyer, self.seller,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_trade() -> Trade {
        Trade {
            buyer: AccountId::new(),
            seller: AccountId::new(),
            price: Decimal::new(120, 2),
            quantity: Decimal::new(50, 0),
            quote_amount: Decimal::new(60, 0),
            executed_at: Utc::now(),
        }
    }

    #[test]
    fn trade_notional() {
        let t = make_trade();
        assert_eq!(t.notional(), Decimal::new(60, 0));
    }

    #[test]
    fn trade_display() {
        let t = make_trade();
        let s = format!("{t}");
        assert!(s.contains("1.20"));
        assert!(s.contains("50"));
    }

    #[test]
    fn trade_serde_roundtrip() {
        let trade = make_trade();
        let json = serde_json::to_string(&trade).unwrap();
        let back: Trade = serde_json::from_str(&json).unwrap();
        assert_eq!(trade, back);
    }
}
