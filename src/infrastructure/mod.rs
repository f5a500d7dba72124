//! Infrastructure layer module
//!
//! This module contains the adapters to the outside world:
//! - Parameter file loading
//! - Runtime settings management
//! - Logging infrastructure

pub mod config;
pub mod logging;
pub mod params;
