//! Shared fixtures for integration tests
//!
//! Real axum servers stand in for upstream suppliers, and the aggregator
//! itself is served on an ephemeral port.

pub mod payloads;
pub mod test_server;

#[allow(unused_imports)]
pub use suppliers::MockSupplierServer;
#[allow(unused_imports)]
pub use test_server::TestServer;
