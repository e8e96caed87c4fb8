//! In-process request metrics.
//!
//! The registry is a plain value owned by `AppState`; the middleware writes to
//! it and the `/metrics` handler renders it in Prometheus text format.

pub mod metrics;

pub use metrics::{EchoMetrics, RequestLabels};
