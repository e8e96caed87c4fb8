//! echometer core: transport-agnostic request snapshot, echo page rendering,
//! and the error surface shared by the gateway.
//!
//! Nothing here depends on an HTTP stack or async runtime, so the rendering
//! rules can be exercised directly from tests and reused by other front ends.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `EchoError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod page;
pub mod snapshot;

/// Shared result type.
pub use error::{Result, EchoError};
pub use page::{render_page, EscapeMode};
pub use snapshot::RequestSnapshot;
