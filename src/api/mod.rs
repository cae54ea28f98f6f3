//! HTTP API layer for the transcription gateway.
//!
//! Provides login, logout and session verification endpoints.

pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;
