//! Operation receipts.
//!
//! The core keeps no native-currency balance map: quote value leaving the
//! system (a seller's payout, a buyer's refund) is reported back to the
//! substrate on a receipt, and the substrate performs the actual payment.
//! Receipts are plain data — the core never re-reads them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{OrderId, OrderSide, Trade, TradeId};

/// What happened to one side's order during a settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderOutcome {
    /// Fully filled and removed from the book.
    Closed,
    /// Partially filled; decremented in place and still resting.
    Open { remaining: Decimal },
}

impl OrderOutcome {
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

/// Receipt for one `execute_trade` settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementReceipt {
    /// Id of the appended trade record.
    pub trade_id: TradeId,
    /// The recorded trade.
    pub trade: Trade,
    /// Quote value released from escrow to the seller:
    /// `fill_price × fill_quantity`.
    pub seller_payout: Decimal,
    /// Price-improvement refund released from escrow to the buyer:
    /// `(buy_price − fill_price) × fill_quantity`. Zero when the pair
    /// crossed at equal prices.
    pub buyer_refund: Decimal,
    /// What happened to the buy order.
    pub buy_order: OrderOutcome,
    /// What happened to the sell order.
    pub sell_order: OrderOutcome,
}

/// Receipt for one `cancel_order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelReceipt {
    pub order_id: OrderId,
    pub side: OrderSide,
    /// Escrow refunded to the trader. Always `price × remaining` for a buy
    /// order; always zero for a sell order (no escrow existed).
    pub refund: Decimal,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::AccountId;

    #[test]
    fn order_outcome_closed() {
        assert!(OrderOutcome::Closed.is_closed());
        assert!(
            !OrderOutcome::Open {
                remaining: Decimal::ONE
            }
            .is_closed()
        );
    }

    #[test]
    fn settlement_receipt_serde_roundtrip() {
        let receipt = SettlementReceipt {
            trade_id: TradeId(0),
            trade: Trade {
                buyer: AccountId::new(),
                seller: AccountId::new(),
                price: Decimal::new(120, 2),
                quantity: Decimal::new(50, 0),
                quote_amount: Decimal::new(60, 0),
                executed_at: Utc::now(),
            },
            seller_payout: Decimal::new(60, 0),
            buyer_refund: Decimal::ZERO,
            buy_order: OrderOutcome::Closed,
            sell_order: OrderOutcome::Open {
                remaining: Decimal::new(50, 0),
            },
        };
        let json = serde_json::to_string(&receipt).unwrap();
        let back: SettlementReceipt = serde_json::from_str(&json).unwrap();
        assert_eq!(receipt, back);
    }
}
