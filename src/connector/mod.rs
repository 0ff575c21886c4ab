//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Answer services (HTTP via reqwest, canned mock for offline use)
//! - CLI wiring (container, router, controllers)

pub mod adapter;
pub mod api;

pub use adapter::*;
