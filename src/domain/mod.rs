//! Domain layer for simulation parameters
//!
//! This module contains the parameter document model and its error types.

pub mod errors;
pub mod models;

// Re-export error types for convenient access
pub use errors::{ParamsError, ParamsResult};
