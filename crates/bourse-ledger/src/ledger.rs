//! The balance ledger.
//!
//! Balances live in a sparse map: absence means zero, and any entry that
//! reaches exactly zero is removed. The invariant `sum(balances) ==
//! total_supply` holds for every committed state — mint and burn are the
//! only operations that touch the supply, and both move a balance by the
//! same amount.

use std::collections::HashMap;

use bourse_types::{AccountId, BourseError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::admin::AdminGate;

/// Token balances, total supply, and the admin gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    /// Sparse balance map. No entry is ever zero.
    balances: HashMap<AccountId, Decimal>,
    /// Sum of all balances, by construction.
    total_supply: Decimal,
    gate: AdminGate,
}

impl Ledger {
    /// Create a ledger with the entire initial supply credited to the admin.
    #[must_use]
    pub fn new(admin: AccountId, initial_supply: Decimal) -> Self {
        let mut balances = HashMap::new();
        if initial_supply > Decimal::ZERO {
            balances.insert(admin, initial_supply);
        }
        Self {
            balances,
            total_supply: initial_supply.max(Decimal::ZERO),
            gate: AdminGate::new(admin),
        }
    }

    // =================================================================
    // Admin-gated supply changes
    // =================================================================

    /// Mint `amount` new tokens to `to`. Admin only.
    ///
    /// # Errors
    /// - `NotAdmin` if the caller is not the admin
    /// - `NonPositiveAmount` if `amount <= 0`
    pub fn mint(&mut self, caller: AccountId, to: AccountId, amount: Decimal) -> Result<()> {
        self.gate.require_admin(caller)?;
        require_positive(amount)?;

        self.credit(to, amount);
        self.total_supply += amount;
        tracing::info!(%to, %amount, supply = %self.total_supply, "minted");
        Ok(())
    }

    /// Burn `amount` tokens from the caller's own balance.
    ///
    /// # Errors
    /// - `NonPositiveAmount` if `amount <= 0`
    /// - `InsufficientBalance` if the caller holds less than `amount`
    /// - `BalanceUnderflow` if the supply would go negative (unreachable
    ///   while conservation holds, kept as a hard guard)
    pub fn burn(&mut self, caller: AccountId, amount: Decimal) -> Result<()> {
        require_positive(amount)?;
        self.require_balance(caller, amount)?;
        if self.total_supply < amount {
            return Err(BourseError::BalanceUnderflow);
        }

        self.debit(caller, amount)?;
        self.total_supply -= amount;
        tracing::info!(from = %caller, %amount, supply = %self.total_supply, "burned");
        Ok(())
    }

    // =================================================================
    // Transfers
    // =================================================================

    /// Move `amount` tokens from the caller to `to`. Supply is unchanged.
    ///
    /// # Errors
    /// - `NonPositiveAmount` if `amount <= 0`
    /// - `InsufficientBalance` if the caller holds less than `amount`
    pub fn transfer(&mut self, caller: AccountId, to: AccountId, amount: Decimal) -> Result<()> {
        require_positive(amount)?;
        self.require_balance(caller, amount)?;

        self.debit(caller, amount)?;
        self.credit(to, amount);
        Ok(())
    }

    // =================================================================
    // Primitives (used by the settlement engine)
    // =================================================================

    /// Credit `amount` to `to`, creating the entry on first credit.
    pub fn credit(&mut self, to: AccountId, amount: Decimal) {
        if amount == Decimal::ZERO {
            return;
        }
        *self.balances.entry(to).or_insert(Decimal::ZERO) += amount;
    }

    /// Debit `amount` from `from`, removing the entry if it reaches zero.
    ///
    /// # Errors
    /// Returns `InsufficientBalance` if `from` holds less than `amount`.
    /// Nothing is mutated on failure.
    pub fn debit(&mut self, from: AccountId, amount: Decimal) -> Result<()> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(BourseError::InsufficientBalance {
                needed: amount,
                available,
            });
        }

        let remaining = available - amount;
        if remaining == Decimal::ZERO {
            self.balances.remove(&from);
        } else {
            self.balances.insert(from, remaining);
        }
        Ok(())
    }

    /// Check that `account` holds at least `amount` without mutating.
    ///
    /// # Errors
    /// Returns `InsufficientBalance` otherwise.
    pub fn require_balance(&self, account: AccountId, amount: Decimal) -> Result<()> {
        let available = self.balance_of(account);
        if available < amount {
            return Err(BourseError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        Ok(())
    }

    // =================================================================
    // Queries
    // =================================================================

    /// Balance of `account`; zero for unknown accounts.
    #[must_use]
    pub fn balance_of(&self, account: AccountId) -> Decimal {
        self.balances.get(&account).copied().unwrap_or(Decimal::ZERO)
    }

    /// Total token supply.
    #[must_use]
    pub fn total_supply(&self) -> Decimal {
        self.total_supply
    }

    /// The admin identity.
    #[must_use]
    pub fn admin(&self) -> AccountId {
        self.gate.admin()
    }

    /// Whether the sparse map carries an entry for `account`.
    #[must_use]
    pub fn has_entry(&self, account: AccountId) -> bool {
        self.balances.contains_key(&account)
    }

    /// Number of accounts with a nonzero balance.
    #[must_use]
    pub fn account_count(&self) -> usize {
        self.balances.len()
    }

    /// Iterate all (account, balance) entries.
    pub fn entries(&self) -> impl Iterator<Item = (&AccountId, &Decimal)> {
        self.balances.iter()
    }
}

fn require_positive(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(BourseError::NonPositiveAmount { amount });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Ledger, AccountId) {
        let admin = AccountId::new();
        (Ledger::new(admin, Decimal::new(1_000_000, 0)), admin)
    }

    #[test]
    fn genesis_credits_admin() {
        let (ledger, admin) = setup();
        assert_eq!(ledger.balance_of(admin), Decimal::new(1_000_000, 0));
        assert_eq!(ledger.total_supply(), Decimal::new(1_000_000, 0));
        assert_eq!(ledger.account_count(), 1);
    }

    #[test]
    fn mint_requires_admin() {
        let (mut ledger, _admin) = setup();
        let outsider = AccountId::new();
        let err = ledger
            .mint(outsider, outsider, Decimal::new(100, 0))
            .unwrap_err();
        assert!(matches!(err, BourseError::NotAdmin));
        // No balance or supply change
        assert_eq!(ledger.balance_of(outsider), Decimal::ZERO);
        assert_eq!(ledger.total_supply(), Decimal::new(1_000_000, 0));
    }

    #[test]
    fn mint_credits_and_grows_supply() {
        let (mut ledger, admin) = setup();
        let alice = AccountId::new();
        ledger.mint(admin, alice, Decimal::new(10_000, 0)).unwrap();
        assert_eq!(ledger.balance_of(alice), Decimal::new(10_000, 0));
        assert_eq!(ledger.total_supply(), Decimal::new(1_010_000, 0));
    }

    #[test]
    fn burn_debits_and_shrinks_supply() {
        let (mut ledger, admin) = setup();
        ledger.burn(admin, Decimal::new(250_000, 0)).unwrap();
        assert_eq!(ledger.balance_of(admin), Decimal::new(750_000, 0));
        assert_eq!(ledger.total_supply(), Decimal::new(750_000, 0));
    }

    #[test]
    fn burn_more_than_held_fails() {
        let (mut ledger, admin) = setup();
        let err = ledger.burn(admin, Decimal::new(2_000_000, 0)).unwrap_err();
        assert!(matches!(err, BourseError::InsufficientBalance { .. }));
        assert_eq!(ledger.total_supply(), Decimal::new(1_000_000, 0));
    }

    #[test]
    fn transfer_moves_balance() {
        let (mut ledger, admin) = setup();
        let bob = AccountId::new();
        ledger.transfer(admin, bob, Decimal::new(400, 0)).unwrap();
        assert_eq!(ledger.balance_of(bob), Decimal::new(400, 0));
        assert_eq!(ledger.balance_of(admin), Decimal::new(999_600, 0));
        assert_eq!(ledger.total_supply(), Decimal::new(1_000_000, 0));
    }

    #[test]
    fn transfer_insufficient_fails_clean() {
        let (mut ledger, _admin) = setup();
        let poor = AccountId::new();
        let rich = AccountId::new();
        let err = ledger.transfer(poor, rich, Decimal::ONE).unwrap_err();
        assert!(matches!(
            err,
            BourseError::InsufficientBalance { needed, available }
                if needed == Decimal::ONE && available == Decimal::ZERO
        ));
        assert_eq!(ledger.balance_of(rich), Decimal::ZERO);
    }

    #[test]
    fn self_transfer_preserves_balance() {
        let (mut ledger, admin) = setup();
        ledger.transfer(admin, admin, Decimal::new(500, 0)).unwrap();
        assert_eq!(ledger.balance_of(admin), Decimal::new(1_000_000, 0));
    }

    #[test]
    fn zero_balance_entry_removed() {
        let (mut ledger, admin) = setup();
        let alice = AccountId::new();
        ledger.mint(admin, alice, Decimal::new(100, 0)).unwrap();
        assert!(ledger.has_entry(alice));

        ledger.transfer(alice, admin, Decimal::new(100, 0)).unwrap();
        assert!(!ledger.has_entry(alice));
        assert_eq!(ledger.balance_of(alice), Decimal::ZERO);
    }

    #[test]
    fn non_positive_amounts_rejected() {
        let (mut ledger, admin) = setup();
        let err = ledger.mint(admin, admin, Decimal::ZERO).unwrap_err();
        assert!(matches!(err, BourseError::NonPositiveAmount { .. }));
        let err = ledger.burn(admin, Decimal::new(-1, 0)).unwrap_err();
        assert!(matches!(err, BourseError::NonPositiveAmount { .. }));
        let err = ledger.transfer(admin, admin, Decimal::ZERO).unwrap_err();
        assert!(matches!(err, BourseError::NonPositiveAmount { .. }));
    }

    #[test]
    fn ledger_serde_roundtrip() {
        let (mut ledger, admin) = setup();
        ledger.mint(admin, AccountId::new(), Decimal::new(5, 0)).unwrap();
        let json = serde_json::to_string(&ledger).unwrap();
        let back: Ledger = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total_supply(), ledger.total_supply());
        assert_eq!(back.balance_of(admin), ledger.balance_of(admin));
    }
}
