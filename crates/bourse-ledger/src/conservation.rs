//! Supply conservation invariant checker.
//!
//! Mathematical invariant for every committed ledger state:
//! ```text
//! Σ balances == total_supply
//! ```
//!
//! Mint and burn move the supply and exactly one balance by the same
//! amount; everything else only shuffles balances between accounts. If this
//! check ever fails, something has gone catastrophically wrong — embedders
//! should halt and refuse further operations.

use bourse_types::{BourseError, Result};
use rust_decimal::Decimal;

use crate::ledger::Ledger;

/// Verify that the sum of all balances equals the total supply.
///
/// # Errors
/// Returns [`BourseError::SupplyInvariantViolation`] if they differ.
pub fn verify_conservation(ledger: &Ledger) -> Result<()> {
    let actual: Decimal = ledger.entries().map(|(_, balance)| *balance).sum();
    let expected = ledger.total_supply();
    if actual != expected {
        return Err(BourseError::SupplyInvariantViolation {
            reason: format!("sum of balances {actual} != total supply {expected}"),
        });
    }
    Ok(())
}
