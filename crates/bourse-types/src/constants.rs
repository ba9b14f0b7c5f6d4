//! System-wide constants for the Bourse exchange core.

/// Default fixed decimal count for token metadata.
pub const DEFAULT_DECIMALS: u32 = 6;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "Bourse";
