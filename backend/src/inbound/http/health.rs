//! Orchestration probes.
//!
//! The catalogue serves from in-memory stores, so there is nothing external
//! to wait on: readiness flips once the listener socket is bound, and a
//! liveness answer is itself the proof of life.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

/// Readiness flag shared between the bootstrap and the probe handlers.
#[derive(Default)]
pub struct HealthState {
    ready: AtomicBool,
}

impl HealthState {
    /// A state that does not yet accept traffic.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the readiness flag; called once the listener is bound.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Whether traffic can be routed here yet.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

// Probe answers must never be cached by intermediaries.
fn probe(ok: bool) -> HttpResponse {
    let mut response = if ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Readiness probe: 503 until the server socket is bound, 200 afterwards.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Accepting traffic"),
        (status = 503, description = "Still starting up")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    probe(state.is_ready())
}

/// Liveness probe: answering at all is the signal.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Process is alive")
    )
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    probe(true)
}
