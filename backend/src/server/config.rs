//! Listener configuration derived from [`ServerSettings`].

use std::net::SocketAddr;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;
use sewavault::settings::{ServerSettings, SettingsError};

/// Resolved inputs for [`super::create_server`].
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Listen on `bind_addr` with no optional layers attached.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Resolve the configured host and port.
    ///
    /// # Errors
    /// Returns [`SettingsError`] when the address does not resolve.
    pub fn from_settings(settings: &ServerSettings) -> Result<Self, SettingsError> {
        settings.bind_addr().map(Self::new)
    }

    /// Socket address the listener binds.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Replace the Prometheus middleware; `None` disables `/metrics`.
    #[cfg(feature = "metrics")]
    #[must_use]
    pub fn with_metrics(self, prometheus: Option<PrometheusMetrics>) -> Self {
        Self { prometheus, ..self }
    }

    #[cfg(all(feature = "metrics", test))]
    pub(crate) fn metrics(&self) -> Option<&PrometheusMetrics> {
        self.prometheus.as_ref()
    }
}
