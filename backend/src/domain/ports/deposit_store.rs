//! Driven port for the mutable token-to-deposit mapping.
//!
//! A token is in use exactly when the store holds a record for it.

use async_trait::async_trait;

use crate::domain::{DepositRecord, TokenNumber};

use super::define_port_error;

define_port_error! {
    /// Errors raised by deposit store adapters.
    pub enum DepositStoreError {
        /// A record already exists for the token.
        AlreadyInUse { token_number: TokenNumber } =>
            "token {token_number} already holds a deposit",
        /// The backing store cannot serve requests.
        Unavailable { message: String } =>
            "deposit store unavailable: {message}",
    }
}

/// Port for storing and clearing deposits.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepositStore: Send + Sync {
    /// Store `record` for `token_number`.
    ///
    /// Fails with [`DepositStoreError::AlreadyInUse`] if a record exists. The
    /// existence check and insert happen atomically.
    async fn put(
        &self,
        token_number: TokenNumber,
        record: DepositRecord,
    ) -> Result<(), DepositStoreError>;

    /// Fetch the record held for `token_number`.
    async fn get(
        &self,
        token_number: TokenNumber,
    ) -> Result<Option<DepositRecord>, DepositStoreError>;

    /// Drop any record for `token_number`. Removing an absent record succeeds.
    async fn remove(&self, token_number: TokenNumber) -> Result<(), DepositStoreError>;

    /// Number of held records.
    async fn count(&self) -> Result<usize, DepositStoreError>;
}
