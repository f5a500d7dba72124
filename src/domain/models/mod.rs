pub mod attribute_map;
pub mod params;

pub use attribute_map::{display_value, AttributeMap, REPORT_FIELDS};
pub use params::SimulationParams;
