//! Simparams - Simulation Parameter Reporter
//!
//! Simparams loads a JSON parameter file, exposes its top-level keys through
//! an attribute-style mapping and prints the six simulation parameters.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): parameter document model and errors
//! - **Infrastructure Layer** (`infrastructure`): file loading, settings, logging
//! - **CLI Layer** (`cli`): command-line interface and report output
//!
//! # Example
//!
//! ```no_run
//! use simparams::ParamsLoader;
//!
//! fn main() -> anyhow::Result<()> {
//!     let params = ParamsLoader::load("params.json")?;
//!     println!("seed = {}", params.seed()?);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{AttributeMap, SimulationParams, REPORT_FIELDS};
pub use domain::{ParamsError, ParamsResult};
pub use infrastructure::config::{ConfigError, ConfigLoader, Settings};
pub use infrastructure::params::{ParamsLoader, DEFAULT_PARAMS_PATH};
