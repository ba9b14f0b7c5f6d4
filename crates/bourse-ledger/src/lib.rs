//! # bourse-ledger
//!
//! **Token ledger** for the Bourse exchange core.
//!
//! The ledger is the source of truth for balances and total supply:
//! 1. **Ledger**: sparse balance map + total-supply counter; mint, burn,
//!    and transfer with checked arithmetic
//! 2. **AdminGate**: the single mint capability, compared per call
//! 3. **Conservation**: `sum(balances) == total_supply` invariant checker
//!
//! Every mutation is all-or-nothing: preconditions are validated before the
//! first write, so a failed operation leaves the ledger untouched.

pub mod admin;
pub mod conservation;
pub mod ledger;

pub use admin::AdminGate;
pub use conservation::verify_conservation;
pub use ledger::Ledger;
