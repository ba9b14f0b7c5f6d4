//! Settlement planning — the validate half of validate-then-commit.
//!
//! [`plan`] reads the book and ledger without mutating anything and either
//! rejects the named pair or produces a [`Fill`] whose commit cannot fail.
//! The [`crate::Exchange`] applies the plan; the split is what guarantees
//! that a rejected settlement leaves zero observable mutation.

use bourse_ledger::Ledger;
use bourse_orderbook::OrderBook;
use bourse_types::{AccountId, BourseError, OrderId, OrderSide, Result};
use rust_decimal::Decimal;

/// A fully validated settlement, ready to commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill {
    pub buy_id: OrderId,
    pub sell_id: OrderId,
    pub buyer: AccountId,
    pub seller: AccountId,
    /// `min(buy remaining, sell remaining)`.
    pub quantity: Decimal,
    /// Always the resting sell order's price.
    pub price: Decimal,
    /// Escrow released to the seller: `price × quantity`.
    pub seller_payout: Decimal,
    /// Escrow released back to the buyer for the filled portion:
    /// `(buy_price − price) × quantity`.
    pub buyer_refund: Decimal,
}

impl Fill {
    /// Total escrow this fill releases: the buy order's original
    /// `buy_price × quantity` for the filled portion.
    #[must_use]
    pub fn escrow_released(&self) -> Decimal {
        self.seller_payout + self.buyer_refund
    }
}

/// Validate a caller-named (buy, sell) pair and compute the fill.
///
/// # Errors
/// - `OrderNotFound` if either order is absent from its side
/// - `IncompatiblePrices` if `buy.price < sell.price`
/// - `InsufficientBalance` if the seller's current balance no longer covers
///   the sell order's remaining quantity (the placement-time check was
///   advisory, not a lock)
pub fn plan(book: &OrderBook, ledger: &Ledger, buy_id: OrderId, sell_id: OrderId) -> Result<Fill> {
    let buy = book.require(OrderSide::Buy, buy_id)?;
    let sell = book.require(OrderSide::Sell, sell_id)?;

    if buy.price < sell.price {
        return Err(BourseError::IncompatiblePrices {
            bid: buy.price,
            ask: sell.price,
        });
    }

    // Re-check the seller against the full remaining sell quantity, not
    // just the fill: a sell order whose backing has drained below its own
    // size is not settleable at all.
    ledger.require_balance(sell.trader, sell.quantity)?;

    let quantity = buy.quantity.min(sell.quantity);
    let price = sell.price;
    Ok(Fill {
        buy_id,
        sell_id,
        buyer: buy.trader,
        seller: sell.trader,
        quantity,
        price,
        seller_payout: price * quantity,
        buyer_refund: (buy.price - price) * quantity,
    })
}
