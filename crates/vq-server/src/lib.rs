//! Virtue Quotient site server.
//!
//! Wires the `vq-core` assessment service into a running Axum server. Serves
//! the marketing pages at `/` and the VQ Snapshot JSON API at `/v1/*`.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;
pub mod worker;
