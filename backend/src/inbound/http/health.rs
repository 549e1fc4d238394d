//! Readiness and liveness probes for the kiosk process.
//!
//! The process moves through three phases: starting, serving and draining.
//! Readiness holds only while serving; liveness holds until draining begins.
//! Both probes answer with `{"status": ...}` and `Cache-Control: no-store`.

use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
enum Phase {
    Starting = 0,
    Serving = 1,
    Draining = 2,
}

impl Phase {
    const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Starting,
            1 => Self::Serving,
            _ => Self::Draining,
        }
    }
}

#[derive(Serialize)]
struct ProbeBody {
    status: Phase,
}

/// Lifecycle phase shared between `main`, the server and the probe handlers.
#[derive(Debug)]
pub struct HealthState {
    phase: AtomicU8,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            phase: AtomicU8::new(Phase::Starting as u8),
        }
    }
}

impl HealthState {
    /// Start in the starting phase: alive but not ready.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn phase(&self) -> Phase {
        Phase::from_raw(self.phase.load(Ordering::Acquire))
    }

    /// Enter the serving phase once the listener is bound.
    ///
    /// Has no effect after draining has begun.
    pub fn mark_ready(&self) {
        let _ = self.phase.compare_exchange(
            Phase::Starting as u8,
            Phase::Serving as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }

    /// Enter the draining phase; both probes report 503 from here on.
    pub fn mark_unhealthy(&self) {
        self.phase.store(Phase::Draining as u8, Ordering::Release);
    }

    /// Whether the kiosk accepts traffic.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase() == Phase::Serving
    }

    /// Whether the process should be kept running.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.phase() != Phase::Draining
    }

    fn probe(&self, healthy: bool) -> HttpResponse {
        let mut response = if healthy {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };
        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .json(ProbeBody {
                status: self.phase(),
            })
    }
}

/// Readiness probe: 200 while serving, 503 while starting or draining.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Kiosk is serving"),
        (status = 503, description = "Kiosk is starting or draining")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    state.probe(state.is_ready())
}

/// Liveness probe: 200 until draining begins.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Process is alive"),
        (status = 503, description = "Process is draining")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    state.probe(state.is_alive())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::Value;

    use super::*;

    fn state_in(phase: Phase) -> HealthState {
        let state = HealthState::new();
        match phase {
            Phase::Starting => {}
            Phase::Serving => state.mark_ready(),
            Phase::Draining => {
                state.mark_ready();
                state.mark_unhealthy();
            }
        }
        state
    }

    #[rstest]
    #[case(Phase::Starting, "/health/ready", StatusCode::SERVICE_UNAVAILABLE, "starting")]
    #[case(Phase::Starting, "/health/live", StatusCode::OK, "starting")]
    #[case(Phase::Serving, "/health/ready", StatusCode::OK, "serving")]
    #[case(Phase::Serving, "/health/live", StatusCode::OK, "serving")]
    #[case(Phase::Draining, "/health/ready", StatusCode::SERVICE_UNAVAILABLE, "draining")]
    #[case(Phase::Draining, "/health/live", StatusCode::SERVICE_UNAVAILABLE, "draining")]
    #[actix_web::test]
    async fn probes_follow_phase(
        #[case] phase: Phase,
        #[case] uri: &str,
        #[case] expected: StatusCode,
        #[case] status: &str,
    ) {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state_in(phase)))
                .service(ready)
                .service(live),
        )
        .await;

        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;

        assert_eq!(res.status(), expected);
        assert_eq!(
            res.headers()
                .get(header::CACHE_CONTROL)
                .and_then(|v| v.to_str().ok()),
            Some("no-store")
        );
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["status"], status);
    }

    #[rstest]
    fn draining_is_terminal() {
        let state = HealthState::new();
        state.mark_unhealthy();
        state.mark_ready();
        assert!(!state.is_ready());
        assert!(!state.is_alive());
    }
}
