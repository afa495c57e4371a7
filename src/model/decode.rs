use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::model::error::DecodeError;
use crate::model::types::{TleRecord, VisualPassesResponse};

/// N2YO answers failed requests (bad key, unknown satellite, quota) with
/// `{"error": "..."}` and a success status.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
}

pub fn decode_tle(raw: &[u8]) -> Result<TleRecord, DecodeError> {
    decode(raw)
}

pub fn decode_visual_passes(raw: &[u8]) -> Result<VisualPassesResponse, DecodeError> {
    let response: VisualPassesResponse = decode(raw)?;
    if response.count_mismatch() {
        log::warn!(
            "Satellite {} reports {:?} passes but {} were returned",
            response.info.id,
            response.info.pass_count,
            response.passes.len()
        );
    }
    Ok(response)
}

fn decode<T: DeserializeOwned>(raw: &[u8]) -> Result<T, DecodeError> {
    let value: serde_json::Value = serde_json::from_slice(raw)?;

    // Derived struct impls also accept sequences, every record is an object
    if !value.is_object() {
        return Err(DecodeError::NotAnObject(json_kind(&value)));
    }

    if let Ok(ErrorEnvelope { error: Some(message) }) = ErrorEnvelope::deserialize(&value) {
        return Err(DecodeError::Api(message));
    }

    Ok(T::deserialize(value)?)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
