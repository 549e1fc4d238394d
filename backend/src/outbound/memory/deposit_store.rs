//! Mutex-guarded deposit store.
//!
//! Every operation takes the single lock covering the whole map, so the
//! existence check and insert in `put` cannot interleave with another writer.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{DepositStore, DepositStoreError};
use crate::domain::{DepositRecord, TokenNumber};

/// Deposit store holding records in process memory.
#[derive(Debug, Default)]
pub struct InMemoryDepositStore {
    deposits: Mutex<HashMap<TokenNumber, DepositRecord>>,
}

impl InMemoryDepositStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<TokenNumber, DepositRecord>>, DepositStoreError> {
        self.deposits
            .lock()
            .map_err(|_| DepositStoreError::unavailable("deposit map lock poisoned"))
    }
}

#[async_trait]
impl DepositStore for InMemoryDepositStore {
    async fn put(
        &self,
        token_number: TokenNumber,
        record: DepositRecord,
    ) -> Result<(), DepositStoreError> {
        match self.lock()?.entry(token_number) {
            Entry::Occupied(_) => Err(DepositStoreError::already_in_use(token_number)),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn get(
        &self,
        token_number: TokenNumber,
    ) -> Result<Option<DepositRecord>, DepositStoreError> {
        Ok(self.lock()?.get(&token_number).cloned())
    }

    async fn remove(&self, token_number: TokenNumber) -> Result<(), DepositStoreError> {
        self.lock()?.remove(&token_number);
        Ok(())
    }

    async fn count(&self) -> Result<usize, DepositStoreError> {
        Ok(self.lock()?.len())
    }
}
