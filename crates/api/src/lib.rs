//! Food Aggregator API
//!
//! Axum routes and middleware exposing the sequential and race lookups over HTTP.

pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
