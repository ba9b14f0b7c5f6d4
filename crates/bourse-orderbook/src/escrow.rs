//! Escrow vault — quote value held against resting buy orders.
//!
//! Placing a buy order deposits exactly `price × quantity` here; settlement
//! and cancellation release it back out (seller payout, price-improvement
//! refund, cancel refund). Sell orders never touch the vault.
//!
//! Invariant: `held == Σ (price × quantity)` over all resting buy orders.

use bourse_types::{BourseError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Total quote value the system is holding in escrow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowVault {
    held: Decimal,
}

impl EscrowVault {
    /// Create an empty vault.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take `amount` into escrow.
    pub fn hold(&mut self, amount: Decimal) {
        self.held += amount;
    }

    /// Release `amount` out of escrow.
    ///
    /// # Errors
    /// Returns [`BourseError::EscrowUnderflow`] if the vault holds less
    /// than `amount`. Nothing is mutated on failure.
    pub fn release(&mut self, amount: Decimal) -> Result<()> {
        if self.held < amount {
            return Err(BourseError::EscrowUnderflow {
                requested: amount,
                held: self.held,
            });
        }
        self.held -= amount;
        Ok(())
    }

    /// Quote value currently held.
    #[must_use]
    pub fn held(&self) -> Decimal {
        self.held
    }

    /// Whether the vault is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.held == Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hold_then_release() {
        let mut vault = EscrowVault::new();
        vault.hold(Decimal::new(60, 0));
        assert_eq!(vault.held(), Decimal::new(60, 0));

        vault.release(Decimal::new(60, 0)).unwrap();
        assert!(vault.is_empty());
    }

    #[test]
    fn partial_release() {
        let mut vault = EscrowVault::new();
        vault.hold(Decimal::new(100, 0));
        vault.release(Decimal::new(40, 0)).unwrap();
        assert_eq!(vault.held(), Decimal::new(60, 0));
    }

    #[test]
    fn over_release_fails_clean() {
        let mut vault = EscrowVault::new();
        vault.hold(Decimal::new(10, 0));
        let err = vault.release(Decimal::new(11, 0)).unwrap_err();
        assert!(matches!(
            err,
            BourseError::EscrowUnderflow { requested, held }
                if requested == Decimal::new(11, 0) && held == Decimal::new(10, 0)
        ));
        assert_eq!(vault.held(), Decimal::new(10, 0));
    }

    #[test]
    fn vault_serde_roundtrip() {
        let mut vault = EscrowVault::new();
        vault.hold(Decimal::new(1234, 2));
        let json = serde_json::to_string(&vault).unwrap();
        let back: EscrowVault = serde_json::from_str(&json).unwrap();
        assert_eq!(vault, back);
    }
}
