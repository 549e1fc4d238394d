//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::{TokenRegistry, TokenService};
use crate::inbound::http::api_scope;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryDepositStore;

/// Token service over a fresh in-memory store, plus HTTP state serving it.
///
/// The service handle lets tests seed or inspect deposits directly.
pub(crate) fn kiosk_state() -> (HttpState, Arc<TokenService<InMemoryDepositStore>>) {
    let service = Arc::new(TokenService::new(
        TokenRegistry::standard(),
        Arc::new(InMemoryDepositStore::new()),
        Arc::new(mockable::DefaultClock),
    ));
    (HttpState::from_service(Arc::clone(&service)), service)
}

/// Full `/api` application wrapped in the trace middleware.
pub(crate) fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(api_scope())
}
