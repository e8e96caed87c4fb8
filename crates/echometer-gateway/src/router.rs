//! Axum router wiring.
//!
//! The echo responder is the fallback for every path and sits behind the
//! metrics middleware. The exposition route is added after the layer so
//! scrapes are not counted.

use axum::{middleware, routing::any, Router};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    let echo = Router::new()
        .fallback(transport::echo::echo)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            transport::middleware::track_requests,
        ));

    let metrics = &state.cfg().metrics;
    let app = if metrics.inline() {
        echo.route(&metrics.path, any(ops::metrics))
    } else {
        echo
    };
    app.with_state(state)
}

/// Exposition-only router for a dedicated `metrics.listen` address.
pub fn build_metrics_router(state: AppState) -> Router {
    Router::new()
        .route(&state.cfg().metrics.path, any(ops::metrics))
        .with_state(state)
}
