//! Request metrics middleware.
//!
//! Labels are taken before the rest of the pipeline runs. The `RequestTimer`
//! guard records on drop, so the observation and the counter increment happen
//! exactly once whether the inner service returns, panics, or the whole request
//! future is dropped mid-flight.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;
use crate::obs::{EchoMetrics, RequestLabels};

impl RequestLabels {
    pub fn from_request<B>(req: &axum::http::Request<B>) -> Self {
        Self::new(req.method().as_str(), req.uri().path())
    }
}

/// Scope guard for one request's metrics.
pub struct RequestTimer {
    metrics: Arc<EchoMetrics>,
    labels: RequestLabels,
    start: Instant,
}

impl RequestTimer {
    pub fn start(metrics: Arc<EchoMetrics>, labels: RequestLabels) -> Self {
        Self {
            metrics,
            labels,
            start: Instant::now(),
        }
    }

    pub fn labels(&self) -> &RequestLabels {
        &self.labels
    }
}

impl Drop for RequestTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        self.metrics.record_request(&self.labels, elapsed);
        tracing::debug!(
            method = %self.labels.method,
            endpoint = %self.labels.endpoint,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "request observed"
        );
    }
}

pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let _timer = RequestTimer::start(state.metrics(), RequestLabels::from_request(&req));
    next.run(req).await
}
