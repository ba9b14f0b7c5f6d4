//! Creation-time configuration for an exchange instance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AccountId, TokenMetadata};

/// Genesis parameters for a new exchange.
///
/// The admin is the single fixed identity holding the mint capability; it
/// is credited the entire initial supply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisConfig {
    /// The mint-capability holder. Not reassignable.
    pub admin: AccountId,
    /// Token supply credited to the admin at creation.
    pub initial_supply: Decimal,
    /// Seed for the last-trade-price statistic before any settlement.
    pub initial_price: Decimal,
    /// Token name, symbol, and fixed decimal count.
    pub token: TokenMetadata,
}

impl GenesisConfig {
    #[must_use]
    pub fn new(admin: AccountId, initial_supply: Decimal) -> Self {
        Self {
            admin,
            initial_supply,
            initial_price: Decimal::ONE,
            token: TokenMetadata::default(),
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: TokenMetadata) -> Self {
        self.token = token;
        self
    }

    #[must_use]
    pub fn with_initial_price(mut self, price: Decimal) -> Self {
        self.initial_price = price;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_defaults() {
        let admin = AccountId::new();
        let cfg = GenesisConfig::new(admin, Decimal::new(1_000_000, 0));
        assert_eq!(cfg.admin, admin);
        assert_eq!(cfg.initial_price, Decimal::ONE);
        assert_eq!(cfg.token.decimals, 6);
    }

    #[test]
    fn builder_overrides() {
        let cfg = GenesisConfig::new(AccountId::new(), Decimal::ZERO)
            .with_token(TokenMetadata::new("ActionChain Token", "ACT", 6))
            .with_initial_price(Decimal::new(150, 2));
        assert_eq!(cfg.token.symbol, "ACT");
        assert_eq!(cfg.initial_price, Decimal::new(150, 2));
    }

    #[test]
    fn genesis_serde_roundtrip() {
        let cfg = GenesisConfig::new(AccountId::new(), Decimal::new(1_000_000, 0));
        let json = serde_json::to_string(&cfg).unwrap();
        let back: GenesisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
