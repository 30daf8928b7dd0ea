//! Utilities
//!
//! Shared helpers: error types, path resolution, and time arithmetic.

pub mod error;
pub mod paths;
pub mod time;

pub use error::{AppError, AppResult};
