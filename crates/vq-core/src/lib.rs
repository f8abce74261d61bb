//! Core library for the Virtue Quotient site.
//!
//! Contains the VQ Snapshot question catalog, the scoring engine and band
//! table, the assessment flow state machine, the in-memory session store,
//! and lead delivery. This crate knows nothing about HTTP; `vq-server`
//! renders pages and exposes the flow over JSON.

pub mod answers;
pub mod contact;
pub mod engine;
pub mod error;
pub mod flow;
pub mod lead;
pub mod question;
pub mod service;
pub mod session;
