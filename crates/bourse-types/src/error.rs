//! Error types for the Bourse exchange core.
//!
//! All errors use the `BRS_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Order errors
//! - 2xx: Balance errors
//! - 3xx: Escrow / payment errors
//! - 4xx: Authorization errors
//! - 5xx: Settlement errors
//! - 8xx: Invariant errors
//!
//! Every operation is all-or-nothing: any of these errors aborts the
//! operation with zero observable mutation.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{OrderId, TradeId};

/// Central error enum for all Bourse operations.
#[derive(Debug, Error)]
pub enum BourseError {
    // =================================================================
    // Order Errors (1xx)
    // =================================================================
    /// The referenced order does not exist (never placed, fully filled,
    /// or cancelled).
    #[error("BRS_ERR_100: Order not found: {0}")]
    OrderNotFound(OrderId),

    /// An order price must be strictly positive.
    #[error("BRS_ERR_101: Order price must be positive, got {price}")]
    NonPositivePrice { price: Decimal },

    /// An order quantity must be strictly positive.
    #[error("BRS_ERR_102: Order quantity must be positive, got {quantity}")]
    NonPositiveQuantity { quantity: Decimal },

    /// The referenced trade does not exist.
    #[error("BRS_ERR_103: Trade not found: {0}")]
    TradeNotFound(TradeId),

    // =================================================================
    // Balance Errors (2xx)
    // =================================================================
    /// Not enough token balance to perform the operation.
    #[error("BRS_ERR_200: Insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: Decimal, available: Decimal },

    /// A supply or balance subtraction would go negative.
    #[error("BRS_ERR_201: Balance underflow")]
    BalanceUnderflow,

    /// A mint/burn/transfer amount must be strictly positive.
    #[error("BRS_ERR_202: Amount must be positive, got {amount}")]
    NonPositiveAmount { amount: Decimal },

    // =================================================================
    // Escrow / Payment Errors (3xx)
    // =================================================================
    /// The attached value does not equal the required escrow exactly.
    #[error("BRS_ERR_300: Incorrect escrow amount: expected {expected}, attached {attached}")]
    IncorrectEscrowAmount { expected: Decimal, attached: Decimal },

    /// The operation does not accept attached value.
    #[error("BRS_ERR_301: Unexpected payment: {attached} attached to a value-free operation")]
    UnexpectedPayment { attached: Decimal },

    /// A release would take more out of the escrow vault than it holds.
    #[error("BRS_ERR_302: Escrow underflow: requested {requested}, held {held}")]
    EscrowUnderflow { requested: Decimal, held: Decimal },

    // =================================================================
    // Authorization Errors (4xx)
    // =================================================================
    /// The caller is not the admin (mint is admin-only).
    #[error("BRS_ERR_400: Unauthorized: caller is not the admin")]
    NotAdmin,

    /// The caller does not own the order it is trying to cancel.
    #[error("BRS_ERR_401: Unauthorized: caller does not own {0}")]
    NotOrderOwner(OrderId),

    // =================================================================
    // Settlement Errors (5xx)
    // =================================================================
    /// The named pair does not cross: the bid is below the ask.
    #[error("BRS_ERR_500: Incompatible prices: bid {bid} < ask {ask}")]
    IncompatiblePrices { bid: Decimal, ask: Decimal },

    // =================================================================
    // Invariant Errors (8xx)
    // =================================================================
    /// Supply conservation invariant violated — critical safety alert.
    #[error("BRS_ERR_800: Supply invariant violation: {reason}")]
    SupplyInvariantViolation { reason: String },
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, BourseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = BourseError::OrderNotFound(OrderId(9));
        let msg = format!("{err}");
        assert!(msg.starts_with("BRS_ERR_100"), "Got: {msg}");
        assert!(msg.contains("order:9"));
    }

    #[test]
    fn insufficient_balance_display() {
        let err = BourseError::InsufficientBalance {
            needed: Decimal::new(100, 0),
            available: Decimal::new(50, 0),
        };
        let msg = format!("{err}");
        assert!(msg.contains("BRS_ERR_200"));
        assert!(msg.contains("100"));
        assert!(msg.contains("50"));
    }

    #[test]
    fn incompatible_prices_display() {
        let err = BourseError::IncompatiblePrices {
            bid: Decimal::new(110, 2),
            ask: Decimal::new(120, 2),
        };
        let msg = format!("{err}");
        assert!(msg.contains("BRS_ERR_500"));
        assert!(msg.contains("1.10"));
        assert!(msg.contains("1.20"));
    }

    #[test]
    fn all_errors_have_brs_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(BourseError::NotAdmin),
            Box::new(BourseError::NotOrderOwner(OrderId(1))),
            Box::new(BourseError::BalanceUnderflow),
            Box::new(BourseError::UnexpectedPayment {
                attached: Decimal::ONE,
            }),
            Box::new(BourseError::SupplyInvariantViolation {
                reason: "test".into(),
            }),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("BRS_ERR_"),
                "Error missing BRS_ERR_ prefix: {msg}"
            );
        }
    }
}
