//! Driving port for token read operations.

use async_trait::async_trait;

use crate::domain::{BarcodeResolution, Error, TokenNumber, TokenRecord, TokenStats};

/// Read side of the kiosk: validation before deposit, lookup before return.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenQuery: Send + Sync {
    /// Confirm `token_number` is registered and free.
    ///
    /// Fails with `NotFound` for unknown tokens and `Conflict` when the token
    /// already holds a deposit.
    async fn validate(&self, token_number: TokenNumber) -> Result<TokenRecord, Error>;

    /// Fetch an in-use token with its deposit.
    ///
    /// Fails with `NotFound` both for unknown tokens and for idle ones.
    async fn get(&self, token_number: TokenNumber) -> Result<TokenRecord, Error>;

    /// Every registered token, in registry order.
    async fn list(&self) -> Result<Vec<TokenRecord>, Error>;

    /// Occupancy summary.
    async fn stats(&self) -> Result<TokenStats, Error>;

    /// Match scanned barcode text against the registry.
    async fn resolve_barcode(&self, barcode: &str) -> Result<BarcodeResolution, Error>;
}
