//! # Domain Layer
//!
//! Query results, answer payloads, endpoint configuration and the chat
//! transcript. This layer is independent of the HTTP client and the terminal.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
