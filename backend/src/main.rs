//! Kiosk entry-point: loads settings, wires the HTTP server and serves until
//! shutdown.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use sewavault::inbound::http::health::HealthState;
use sewavault::settings::ServerSettings;
use server::{ServerConfig, create_server};

#[cfg(feature = "metrics")]
fn initialize_metrics<F, E>(build: F) -> Option<PrometheusMetrics>
where
    F: FnOnce() -> Result<PrometheusMetrics, E>,
    E: std::fmt::Display,
{
    match build() {
        Ok(metrics) => Some(metrics),
        Err(error) => {
            warn!(%error, "Prometheus metrics disabled");
            None
        }
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|e| std::io::Error::other(e.to_string()))?;
    let config = ServerConfig::from_settings(&settings).map_err(std::io::Error::other)?;
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(initialize_metrics(|| {
        PrometheusMetricsBuilder::new("sewavault")
            .endpoint("/metrics")
            .build()
    }));

    info!(addr = %config.bind_addr(), "starting kiosk server");
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
