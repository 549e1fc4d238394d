//! Driving port for deposit mutations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{DepositedItem, Error, TokenNumber};

/// Request to hold items against a token.
///
/// Photo and item validation belong to the inbound adapter; the service
/// stores whatever it receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepositRequest {
    /// Token the items are held against.
    pub token_number: TokenNumber,
    /// Depositor photo as a data URL.
    pub sangat_photo: String,
    /// Checklist lines in submission order.
    pub items: Vec<DepositedItem>,
    /// Free-text description of unlisted items.
    #[serde(default)]
    pub others: Option<String>,
}

/// Driving port for creating and clearing deposits.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepositCommand: Send + Sync {
    /// Record a deposit.
    ///
    /// Fails with `InvalidToken` for unregistered tokens and `AlreadyInUse`
    /// when the token already holds a deposit, including a lost race.
    async fn create_deposit(&self, request: CreateDepositRequest) -> Result<(), Error>;

    /// Clear any deposit held for `token_number`. Always succeeds for an
    /// available store.
    async fn delete_deposit(&self, token_number: TokenNumber) -> Result<(), Error>;
}
