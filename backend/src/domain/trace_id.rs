//! Request correlation identifier.
//!
//! Held in Tokio task-local storage for the duration of a request. Spawned
//! tasks do not inherit it; wrap them in [`TraceId::scope`].

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

task_local! {
    static CURRENT: TraceId;
}

/// Why a client supplied trace identifier was refused.
#[derive(Debug, thiserror::Error)]
pub enum TraceIdParseError {
    /// Not a UUID at all.
    #[error("trace identifier is not a UUID: {0}")]
    Malformed(#[from] uuid::Error),
    /// The nil UUID would correlate unrelated requests.
    #[error("trace identifier must not be the nil UUID")]
    Nil,
}

/// Per-request trace identifier, always a non-nil UUID.
///
/// # Examples
/// ```
/// use sewavault::TraceId;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let trace_id: TraceId = "6f1c8a8e-2d0b-4a47-9d55-4a3f6c0e9b21"
///     .parse()
///     .expect("valid UUID");
/// let observed = TraceId::scope(trace_id, async move { TraceId::current() }).await;
/// assert_eq!(observed, Some(trace_id));
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The identifier in scope for the running task, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` in scope.
    pub async fn scope<Fut>(trace_id: Self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CURRENT.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for TraceId {
    type Err = TraceIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::parse_str(s)?;
        if uuid.is_nil() {
            return Err(TraceIdParseError::Nil);
        }
        Ok(Self(uuid))
    }
}
