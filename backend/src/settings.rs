//! Server settings loaded via OrthoConfig.
//!
//! Values merge from defaults, an optional configuration file, `SEWAVAULT_*`
//! environment variables and command-line flags, in increasing precedence.

use std::net::{SocketAddr, ToSocketAddrs};

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Errors raised while turning settings into a listen address.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The host and port do not resolve to a socket address.
    #[error("cannot resolve bind address {host}:{port}: {reason}")]
    UnresolvableBindAddress {
        /// Configured host.
        host: String,
        /// Configured port.
        port: u16,
        /// Resolver failure detail.
        reason: String,
    },
}

/// Listener configuration for the kiosk HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SEWAVAULT")]
pub struct ServerSettings {
    /// Interface to bind.
    #[ortho_config(default = "0.0.0.0".to_owned())]
    pub host: String,
    /// TCP port to bind.
    #[ortho_config(default = 5000)]
    pub port: u16,
}

impl ServerSettings {
    /// Resolve host and port to the first matching socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host.as_str();
        let port = self.port;
        let unresolvable = |reason: String| SettingsError::UnresolvableBindAddress {
            host: host.to_owned(),
            port,
            reason,
        };

        (host, port)
            .to_socket_addrs()
            .map_err(|err| unresolvable(err.to_string()))?
            .next()
            .ok_or_else(|| unresolvable("no addresses returned".to_owned()))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use std::ffi::OsString;
    use std::net::{IpAddr, Ipv4Addr};

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("sewavault")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("SEWAVAULT_HOST", None::<String>),
            ("SEWAVAULT_PORT", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 5000);
        assert_eq!(
            settings.bind_addr().expect("default address resolves"),
            SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 5000)
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("SEWAVAULT_HOST", Some("127.0.0.1".to_owned())),
            ("SEWAVAULT_PORT", Some("8088".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 8088);
        assert_eq!(
            settings.bind_addr().expect("loopback resolves"),
            SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8088)
        );
    }

    #[rstest]
    fn port_override_keeps_default_host() {
        let _guard = lock_env([
            ("SEWAVAULT_HOST", None::<String>),
            ("SEWAVAULT_PORT", Some("5001".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 5001);
    }

    #[rstest]
    fn unresolvable_host_is_reported() {
        let settings = ServerSettings {
            host: "bad host name".to_owned(),
            port: 80,
        };

        let err = settings.bind_addr().expect_err("invalid host");
        assert!(matches!(
            err,
            SettingsError::UnresolvableBindAddress { ref host, port: 80, .. } if host == "bad host name"
        ));
    }
}
