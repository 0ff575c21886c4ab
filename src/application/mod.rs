//! # Application Layer
//!
//! The answer-service seam and the use cases the chat box drives through it.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
