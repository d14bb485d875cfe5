//! Happy Homes Observability
//!
//! - Console, rolling-file and OpenTelemetry tracing
//! - Prometheus metrics for HTTP traffic and domain events
//! - Per-request logging middleware
//!
//! Compiled in by the `observability` feature (default). At runtime the
//! `OBSERVABILITY_ENABLED` environment variable switches to console-only
//! logging and disables metrics.
//!
//! ```no_run
//! use happyhomes_observability::{init_tracing, shutdown_tracer};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     // ... serve ...
//!     shutdown_tracer().await;
//! }
//! ```

pub mod basic_logging;
#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

use std::sync::OnceLock;

pub use basic_logging::init_basic_console_logging;

#[cfg(feature = "observability")]
pub use metrics_exporter_prometheus::PrometheusHandle;

#[cfg(feature = "observability")]
pub use logging::{init_tracing, logging_middleware, shutdown_tracer};
#[cfg(feature = "observability")]
pub use metrics::{
    init_metrics, metrics_middleware, track_auth_failure, track_payment_intent_created,
    track_role_gate_denied, track_token_issued, track_user_registered,
};

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Whether `OBSERVABILITY_ENABLED` leaves observability on. Enabled unless set to `false` or `0`.
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| parse_enabled(std::env::var("OBSERVABILITY_ENABLED").ok()))
}

fn parse_enabled(value: Option<String>) -> bool {
    value
        .map(|v| !v.eq_ignore_ascii_case("false") && v != "0")
        .unwrap_or(true)
}

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{extract::Request, middleware::Next, response::Response};

    /// Stand-in for the Prometheus handle; renders nothing.
    #[derive(Clone, Debug)]
    pub struct PrometheusHandle;

    impl PrometheusHandle {
        pub fn render(&self) -> String {
            String::new()
        }
    }

    pub async fn logging_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub fn init_tracing() {
        super::init_basic_console_logging();
    }

    pub async fn shutdown_tracer() {}

    pub fn init_metrics() -> Option<PrometheusHandle> {
        None
    }

    pub fn track_token_issued() {}
    pub fn track_auth_failure(_reason: &str) {}
    pub fn track_role_gate_denied() {}
    pub fn track_user_registered() {}
    pub fn track_payment_intent_created() {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
