//! Admin gate — the single mint capability.
//!
//! One fixed identity is set at creation and never reassigned. The gate is
//! a stateless predicate compared per call; only the mint path consults it.

use bourse_types::{AccountId, BourseError, Result};
use serde::{Deserialize, Serialize};

/// Holds the admin identity and answers "is this caller the admin?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminGate {
    admin: AccountId,
}

impl AdminGate {
    #[must_use]
    pub fn new(admin: AccountId) -> Self {
        Self { admin }
    }

    /// The admin identity.
    #[must_use]
    pub fn admin(&self) -> AccountId {
        self.admin
    }

    /// Whether `caller` holds the mint capability.
    #[must_use]
    pub fn is_admin(&self, caller: AccountId) -> bool {
        caller == self.admin
    }

    /// Gate an admin-only operation.
    ///
    /// # Errors
    /// Returns [`BourseError::NotAdmin`] for any other caller.
    pub fn require_admin(&self, caller: AccountId) -> Result<()> {
        if self.is_admin(caller) {
            Ok(())
        } else {
            Err(BourseError::NotAdmin)
        }
    }
}
