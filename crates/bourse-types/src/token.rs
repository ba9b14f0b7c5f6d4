//! Token metadata.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Descriptive metadata for the single token this core trades.
///
/// Fixed at creation; the decimal count never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

impl TokenMetadata {
    #[must_use]
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, decimals: u32) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        }
    }
}

impl Default for TokenMetadata {
    fn default() -> Self {
        Self::new("Bourse Token", "BRS", constants::DEFAULT_DECIMALS)
    }
}

impl std::fmt::Display for TokenMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metadata() {
        let token = TokenMetadata::default();
        assert_eq!(token.symbol, "BRS");
        assert_eq!(token.decimals, 6);
    }

    #[test]
    fn metadata_serde_roundtrip() {
        let token = TokenMetadata::new("ActionChain Token", "ACT", 6);
        let json = serde_json::to_string(&token).unwrap();
        let back: TokenMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(token, back);
    }
}
