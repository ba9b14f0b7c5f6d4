//! Call context — the calling convention of every mutating operation.
//!
//! The core has no transport of its own; the substrate invokes it with a
//! sender identity and the quote value attached to the call. Operations that
//! move no value must reject a nonzero attachment, and the buy placement
//! must receive exactly its escrow.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AccountId, BourseError, Result};

/// The sender identity and attached quote value of one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    /// Who is invoking the operation.
    pub sender: AccountId,
    /// Quote value attached to the call (zero for value-free operations).
    pub attached: Decimal,
}

impl Call {
    /// A call with no attached value.
    #[must_use]
    pub fn new(sender: AccountId) -> Self {
        Self {
            sender,
            attached: Decimal::ZERO,
        }
    }

    /// A call carrying `attached` in quote value.
    #[must_use]
    pub fn with_value(sender: AccountId, attached: Decimal) -> Self {
        Self { sender, attached }
    }

    /// Require that no value is attached.
    ///
    /// # Errors
    /// Returns [`BourseError::UnexpectedPayment`] if `attached != 0`.
    pub fn require_no_value(&self) -> Result<()> {
        if self.attached != Decimal::ZERO {
            return Err(BourseError::UnexpectedPayment {
                attached: self.attached,
            });
        }
        Ok(())
    }

    /// Require that the attached value equals `expected` exactly.
    ///
    /// # Errors
    /// Returns [`BourseError::IncorrectEscrowAmount`] on any mismatch,
    /// whether short or over.
    pub fn require_value(&self, expected: Decimal) -> Result<()> {
        if self.attached != expected {
            return Err(BourseError::IncorrectEscrowAmount {
                expected,
                attached: self.attached,
            });
        }
        Ok(())
    }
}
