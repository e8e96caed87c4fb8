//! Top-level facade crate for echometer.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use echometer_core::*;
}

pub mod gateway {
    pub use echometer_gateway::*;
}
