use serde::Serialize;
use serde_json::Value;

use super::attribute_map::AttributeMap;
use crate::domain::errors::{json_type_name, ParamsError, ParamsResult};

/// Typed view of the six simulation parameters.
///
/// Built with checked conversions; used when the report runs in strict mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationParams {
    /// Network topology name, e.g. `WS` or `BA`.
    pub network_type: String,
    /// Lattice width.
    pub system_size_x: u32,
    /// Lattice height.
    pub system_size_y: u32,
    /// Independent runs.
    pub number_of_trials: u32,
    /// Generations per run.
    pub number_of_generations: u64,
    /// Random seed.
    pub seed: u64,
}

impl TryFrom<&AttributeMap> for SimulationParams {
    type Error = ParamsError;

    fn try_from(params: &AttributeMap) -> ParamsResult<Self> {
        Ok(Self {
            network_type: as_string("network_type", params.network_type()?)?,
            system_size_x: as_u32("system_size_x", params.system_size_x()?)?,
            system_size_y: as_u32("system_size_y", params.system_size_y()?)?,
            number_of_trials: as_u32("number_of_trials", params.number_of_trials()?)?,
            number_of_generations: as_u64(
                "number_of_generations",
                params.number_of_generations()?,
            )?,
            seed: as_u64("seed", params.seed()?)?,
        })
    }
}

fn invalid(key: &str, expected: &'static str, value: &Value) -> ParamsError {
    let found = match value {
        Value::Number(n) => n.to_string(),
        other => json_type_name(other).to_string(),
    };
    ParamsError::InvalidValue {
        key: key.to_string(),
        expected,
        found,
    }
}

fn as_string(key: &str, value: &Value) -> ParamsResult<String> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| invalid(key, "a string", value))
}

fn as_u64(key: &str, value: &Value) -> ParamsResult<u64> {
    value
        .as_u64()
        .ok_or_else(|| invalid(key, "a non-negative integer", value))
}

fn as_u32(key: &str, value: &Value) -> ParamsResult<u32> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| invalid(key, "a non-negative 32-bit integer", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> AttributeMap {
        match value {
            Value::Object(m) => AttributeMap::new(m),
            _ => unreachable!(),
        }
    }

    fn happy() -> Value {
        json!({
            "network_type": "WS",
            "system_size_x": 10,
            "system_size_y": 20,
            "number_of_trials": 5,
            "number_of_generations": 100,
            "seed": 42
        })
    }

    #[test]
    fn test_converts_valid_params() {
        let params = SimulationParams::try_from(&map(happy())).unwrap();
        assert_eq!(
            params,
            SimulationParams {
                network_type: "WS".to_string(),
                system_size_x: 10,
                system_size_y: 20,
                number_of_trials: 5,
                number_of_generations: 100,
                seed: 42,
            }
        );
    }

    #[test]
    fn test_rejects_string_for_integer() {
        let mut value = happy();
        value["system_size_x"] = json!("ten");
        match SimulationParams::try_from(&map(value)) {
            Err(ParamsError::InvalidValue { key, found, .. }) => {
                assert_eq!(key, "system_size_x");
                assert_eq!(found, "string");
            }
            other => panic!("Expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_negative_seed() {
        let mut value = happy();
        value["seed"] = json!(-1);
        match SimulationParams::try_from(&map(value)) {
            Err(ParamsError::InvalidValue { key, found, .. }) => {
                assert_eq!(key, "seed");
                assert_eq!(found, "-1");
            }
            other => panic!("Expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_fractional_and_oversized() {
        let mut value = happy();
        value["number_of_trials"] = json!(2.5);
        assert!(matches!(
            SimulationParams::try_from(&map(value)),
            Err(ParamsError::InvalidValue { .. })
        ));

        let mut value = happy();
        value["system_size_y"] = json!(u64::from(u32::MAX) + 1);
        assert!(matches!(
            SimulationParams::try_from(&map(value)),
            Err(ParamsError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_missing_field_reported_first() {
        let result = SimulationParams::try_from(&map(json!({"network_type": "BA"})));
        match result {
            Err(ParamsError::MissingKey(key)) => assert_eq!(key, "system_size_x"),
            other => panic!("Expected MissingKey, got {other:?}"),
        }
    }
}
