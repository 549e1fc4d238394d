//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{DepositCommand, DepositStore, TokenQuery};
use crate::domain::TokenService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Token read operations.
    pub tokens: Arc<dyn TokenQuery>,
    /// Deposit mutations.
    pub deposits: Arc<dyn DepositCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(tokens: Arc<dyn TokenQuery>, deposits: Arc<dyn DepositCommand>) -> Self {
        Self { tokens, deposits }
    }

    /// Serve both ports from one token service.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use sewavault::domain::{TokenRegistry, TokenService};
    /// use sewavault::inbound::http::state::HttpState;
    /// use sewavault::outbound::memory::InMemoryDepositStore;
    ///
    /// let service = TokenService::new(
    ///     TokenRegistry::standard(),
    ///     Arc::new(InMemoryDepositStore::new()),
    ///     Arc::new(mockable::DefaultClock),
    /// );
    /// let _state = HttpState::from_service(Arc::new(service));
    /// ```
    pub fn from_service<S>(service: Arc<TokenService<S>>) -> Self
    where
        S: DepositStore + 'static,
    {
        let tokens: Arc<dyn TokenQuery> = service.clone();
        Self::new(tokens, service)
    }
}
