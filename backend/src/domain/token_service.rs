//! Token lifecycle service.
//!
//! Joins the static [`TokenRegistry`] with a [`DepositStore`] to implement
//! both the [`TokenQuery`] and [`DepositCommand`] driving ports.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    CreateDepositRequest, DepositCommand, DepositStore, DepositStoreError, TokenQuery,
};
use crate::domain::{
    BarcodeResolution, DepositRecord, Error, TOTAL_TOKEN_SLOTS, Token, TokenNumber, TokenRecord,
    TokenRegistry, TokenStats,
};

const INVALID_TOKEN_MESSAGE: &str = "Invalid token number";
const ALREADY_IN_USE_MESSAGE: &str = "Token is already in use";

fn map_store_error(error: DepositStoreError) -> Error {
    match error {
        DepositStoreError::AlreadyInUse { .. } => Error::already_in_use(ALREADY_IN_USE_MESSAGE),
        DepositStoreError::Unavailable { message } => {
            Error::service_unavailable(format!("deposit store unavailable: {message}"))
        }
    }
}

/// Token service implementing the kiosk driving ports.
#[derive(Clone)]
pub struct TokenService<S> {
    registry: Arc<TokenRegistry>,
    store: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S> TokenService<S> {
    /// Create a service over `registry` and `store`, timestamping deposits
    /// with `clock`.
    ///
    /// Availability is always reported against [`TOTAL_TOKEN_SLOTS`]; a
    /// registry of any other size is accepted but logged.
    pub fn new(registry: Arc<TokenRegistry>, store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        if registry.len() != TOTAL_TOKEN_SLOTS {
            warn!(
                registry_size = registry.len(),
                total_slots = TOTAL_TOKEN_SLOTS,
                "token registry size differs from advertised slot total"
            );
        }
        Self {
            registry,
            store,
            clock,
        }
    }

    /// Registry backing this service.
    #[must_use]
    pub fn registry(&self) -> &TokenRegistry {
        &self.registry
    }
}

impl<S> TokenService<S>
where
    S: DepositStore,
{
    async fn deposit_for(&self, token_number: TokenNumber) -> Result<Option<DepositRecord>, Error> {
        self.store.get(token_number).await.map_err(map_store_error)
    }

    async fn record_for(&self, token: &Token) -> Result<TokenRecord, Error> {
        let deposit = self.deposit_for(token.number()).await?;
        Ok(TokenRecord::join(token, deposit))
    }
}

#[async_trait]
impl<S> TokenQuery for TokenService<S>
where
    S: DepositStore,
{
    async fn validate(&self, token_number: TokenNumber) -> Result<TokenRecord, Error> {
        let token = self
            .registry
            .lookup(token_number)
            .ok_or_else(|| Error::not_found("Token not found in system"))?;

        let record = self.record_for(token).await?;
        if record.is_in_use {
            debug!(%token_number, "validation rejected: token in use");
            return Err(Error::conflict(ALREADY_IN_USE_MESSAGE));
        }
        Ok(record)
    }

    async fn get(&self, token_number: TokenNumber) -> Result<TokenRecord, Error> {
        let token = self
            .registry
            .lookup(token_number)
            .ok_or_else(|| Error::not_found("Token not found"))?;

        let record = self.record_for(token).await?;
        if !record.is_in_use {
            return Err(Error::not_found("Token is not currently in use"));
        }
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<TokenRecord>, Error> {
        let mut records = Vec::with_capacity(self.registry.len());
        for token in self.registry.tokens() {
            records.push(self.record_for(token).await?);
        }
        Ok(records)
    }

    async fn stats(&self) -> Result<TokenStats, Error> {
        let in_use = self.store.count().await.map_err(map_store_error)?;
        Ok(TokenStats::from_in_use(in_use))
    }

    async fn resolve_barcode(&self, barcode: &str) -> Result<BarcodeResolution, Error> {
        Ok(self
            .registry
            .match_barcode(barcode)
            .map_or_else(BarcodeResolution::unmatched, |token| {
                BarcodeResolution::matched(token.number())
            }))
    }
}

#[async_trait]
impl<S> DepositCommand for TokenService<S>
where
    S: DepositStore,
{
    async fn create_deposit(&self, request: CreateDepositRequest) -> Result<(), Error> {
        let CreateDepositRequest {
            token_number,
            sangat_photo,
            items,
            others,
        } = request;

        if !self.registry.exists(token_number) {
            debug!(%token_number, "deposit rejected: token not registered");
            return Err(Error::invalid_token(INVALID_TOKEN_MESSAGE));
        }

        let record = DepositRecord {
            sangat_photo,
            items,
            others,
            timestamp: self.clock.utc(),
        };
        let item_count = record.items.len();

        self.store
            .put(token_number, record)
            .await
            .map_err(map_store_error)?;

        info!(%token_number, item_count, "deposit recorded");
        Ok(())
    }

    async fn delete_deposit(&self, token_number: TokenNumber) -> Result<(), Error> {
        self.store
            .remove(token_number)
            .await
            .map_err(map_store_error)?;
        info!(%token_number, "deposit cleared");
        Ok(())
    }
}

#[cfg(test)]
#[path = "token_service_tests.rs"]
mod tests;
