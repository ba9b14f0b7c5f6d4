//! Order types for the Bourse exchange core.
//!
//! An order is a standing offer to buy or sell at a stated price and
//! quantity. It rests in the book until settled against a counterparty or
//! cancelled by its owner — placement never triggers matching.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::AccountId;

/// Which side of the book this order is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

/// A resting order.
///
/// `quantity` is the *remaining* quantity: partial fills decrement it in
/// place, leaving price, trader, and timestamp untouched. An order present
/// in the book always has `price > 0` and `quantity > 0`; a fully filled or
/// cancelled order is removed, never zeroed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub trader: AccountId,
    pub side: OrderSide,
    /// Quote value per unit of the token.
    pub price: Decimal,
    /// Remaining quantity of the token.
    pub quantity: Decimal,
    /// When the order was placed. Unchanged by partial fills.
    pub placed_at: DateTime<Utc>,
}

impl Order {
    #[must_use]
    pub fn new(trader: AccountId, side: OrderSide, price: Decimal, quantity: Decimal) -> Self {
        Self {
            trader,
            side,
            price,
            quantity,
            placed_at: Utc::now(),
        }
    }

    /// Quote value of the full remaining quantity: `price × quantity`.
    ///
    /// For a buy order this is exactly the escrow still held against it.
    #[must_use]
    pub fn notional(&self) -> Decimal {
        self.price * self.quantity
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} @ {} by {}",
            self.side, self.quantity, self.price, self.trader,
        )
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Order {
    pub fn dummy(side: OrderSide, price: Decimal, qty: Decimal) -> Self {
        Self::new(AccountId::new(), side, price, qty)
    }
}
