//! echometer gateway library entry.
//!
//! Wires config, the metrics registry, the metrics middleware and the echo
//! responder into an axum router. Consumed by the binary (`main.rs`) and by
//! integration tests.
//!
//! Panics, `unwrap`, and `expect` are compile-denied outside tests; failures
//! surface as `EchoError`/`ApiError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
pub mod transport;
