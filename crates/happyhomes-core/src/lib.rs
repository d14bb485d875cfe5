//! # Happy Homes Core
//!
//! Core types shared by every Happy Homes crate.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use happyhomes_core::AppError;
//!
//! let error = AppError::forbidden("forbidden access");
//! ```

pub mod errors;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse, INTERNAL_ERROR_MESSAGE};
