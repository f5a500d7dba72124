use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::domain::errors::{json_type_name, ParamsError, ParamsResult};
use crate::domain::models::AttributeMap;

/// Parameter file read when no path is given.
pub const DEFAULT_PARAMS_PATH: &str = "params.json";

/// Loads a JSON parameter document into an [`AttributeMap`].
pub struct ParamsLoader;

impl ParamsLoader {
    /// Load the parameter file at `path`.
    ///
    /// The file handle is dropped before this returns, whether parsing
    /// succeeds or not.
    pub fn load(path: impl AsRef<Path>) -> ParamsResult<AttributeMap> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Opening parameter file");

        let file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ParamsError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => ParamsError::Unreadable {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let params = Self::from_reader(BufReader::new(file), path)?;
        info!(path = %path.display(), keys = params.len(), "Loaded parameter file");
        Ok(params)
    }

    /// Parse an in-memory document with the same rules as [`ParamsLoader::load`].
    pub fn parse_str(text: &str) -> ParamsResult<AttributeMap> {
        Self::from_reader(text.as_bytes(), Path::new("<memory>"))
    }

    fn from_reader(reader: impl Read, path: &Path) -> ParamsResult<AttributeMap> {
        let document: Value =
            serde_json::from_reader(reader).map_err(|source| classify_read_error(path, source))?;

        match document {
            Value::Object(map) => Ok(AttributeMap::new(map)),
            other => Err(ParamsError::TypeMismatch {
                path: path.to_path_buf(),
                found: json_type_name(&other),
            }),
        }
    }
}

// from_reader surfaces I/O failures (e.g. reading a directory) as serde errors
fn classify_read_error(path: &Path, err: serde_json::Error) -> ParamsError {
    if err.is_io() {
        ParamsError::Unreadable {
            path: path.to_path_buf(),
            source: io::Error::from(err),
        }
    } else {
        ParamsError::JsonParse {
            path: path.to_path_buf(),
            source: err,
        }
    }
}
