//! Parameter file loading
//!
//! Reads a JSON document from disk and wraps its top-level object in an
//! [`AttributeMap`](crate::domain::models::AttributeMap).

pub mod loader;

pub use loader::{ParamsLoader, DEFAULT_PARAMS_PATH};
