//! HTTP transport.
//!
//! Every non-ops request passes through `middleware::track_requests` and ends in
//! `echo::echo`.

pub mod echo;
pub mod middleware;
