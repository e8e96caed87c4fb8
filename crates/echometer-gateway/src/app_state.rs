//! Shared application state for the echo gateway.
//!
//! Holds the validated config and the process-wide metrics registry. The
//! registry is injected so tests (and a second listener) can share one instance.

use std::sync::Arc;

use echometer_core::EscapeMode;

use crate::config::EchoConfig;
use crate::obs::EchoMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<EchoMetrics>,
}

struct AppStateInner {
    cfg: EchoConfig,
}

impl AppState {
    pub fn new(cfg: EchoConfig) -> Self {
        Self::with_metrics(cfg, Arc::new(EchoMetrics::new()))
    }

    pub fn with_metrics(cfg: EchoConfig, metrics: Arc<EchoMetrics>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg }),
            metrics,
        }
    }

    pub fn cfg(&self) -> &EchoConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> Arc<EchoMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn escape_mode(&self) -> EscapeMode {
        self.inner.cfg.echo.escape_mode()
    }

    pub fn max_body_bytes(&self) -> usize {
        self.inner.cfg.server.max_body_bytes
    }
}
