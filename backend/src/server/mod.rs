//! HTTP server assembly for the kiosk.

mod config;
#[cfg(feature = "metrics")]
mod metrics;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
#[cfg(feature = "metrics")]
use metrics::MetricsLayer;
use sewavault::Trace;
#[cfg(debug_assertions)]
use sewavault::doc::ApiDoc;
use sewavault::domain::{TokenRegistry, TokenService};
use sewavault::inbound::http::api_scope;
use sewavault::inbound::http::health::{HealthState, live, ready};
use sewavault::inbound::http::state::HttpState;
use sewavault::outbound::memory::InMemoryDepositStore;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// State built once per process and shared by every worker.
///
/// The deposit store lives inside `http`; sharing it is what keeps one
/// deposit per token across workers.
#[derive(Clone)]
struct KioskState {
    health: web::Data<HealthState>,
    http: web::Data<HttpState>,
}

impl KioskState {
    fn new(health: web::Data<HealthState>) -> Self {
        let service = TokenService::new(
            TokenRegistry::standard(),
            Arc::new(InMemoryDepositStore::new()),
            Arc::new(DefaultClock),
        );
        Self {
            health,
            http: web::Data::new(HttpState::from_service(Arc::new(service))),
        }
    }

    fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.health.clone())
            .app_data(self.http.clone())
            .service(api_scope())
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        cfg.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }
}

/// Bind the kiosk server and flag the process ready.
///
/// Deposits are held in memory for the lifetime of the returned server.
///
/// # Errors
/// Propagates [`std::io::Error`] when the listener cannot bind.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let state = KioskState::new(health_state.clone());
    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(config.prometheus);

    let server = HttpServer::new(move || {
        let app = App::new()
            .wrap(Trace)
            .configure(|cfg| state.configure(cfg));

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
