use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{JsonError, Result};

/// Deserialize a document into `T`, reporting the JSON path of the field that failed.
pub(crate) fn from_value_with_path<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_path_to_error::deserialize::<_, T>(value).map_err(|err| {
        let path = err.path().to_string();
        JsonError::Decode { path, message: err.into_inner().to_string() }
    })
}

/// Parse raw JSON text straight into `T` with the same path-aware errors.
///
/// Syntax errors stay [`JsonError::Parse`]; only shape errors become `Decode`.
pub fn from_slice_with_path<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_slice(bytes);
    match serde_path_to_error::deserialize::<_, T>(&mut *de) {
        Ok(v) => {
            de.end().map_err(JsonError::parse)?;
            Ok(v)
        }
        Err(err) => {
            let path = err.path().to_string();
            let inner = err.into_inner();
            if inner.is_syntax() || inner.is_eof() {
                Err(JsonError::parse(inner))
            } else {
                Err(JsonError::Decode { path, message: inner.to_string() })
            }
        }
    }
}
