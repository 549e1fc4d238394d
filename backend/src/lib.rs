//! Item-deposit kiosk backend.
//!
//! Kiosk users validate a numbered token, deposit photographed and itemised
//! belongings against it, and later redeem the token to collect them. The
//! crate is laid out hexagonally:
//!
//! - [`domain`]: token registry, deposit records, ports and the token service.
//! - [`outbound`]: driven adapters, currently the in-memory deposit store.
//! - [`inbound`]: the actix-web HTTP adapter.
//! - [`middleware`]: request tracing.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
