//! Locating the review rhythm section inside a profile payload

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::{RawRhythmInput, Result, RhythmError};

/// Profile field holding the review rhythm section
const RHYTHM_FIELD: &str = "review_rhythm";

/// `{"data": {...}}` as returned by the review-rhythm endpoint
#[derive(Debug, Deserialize)]
struct RhythmSection {
    #[serde(default)]
    data: Option<Value>,
}

/// Subset of the full-profile document this crate cares about
#[derive(Debug, Deserialize)]
struct ProfileDocument {
    #[serde(default)]
    review_rhythm: Option<Value>,
    #[serde(default)]
    errors: Value,
}

/// Pull the sparse rhythm data out of a payload.
///
/// Accepts either the component response (`{"data": {...}}`) or the full
/// profile (`{"review_rhythm": {"data": {...}}, "errors": {...}}`). A null
/// payload, a missing/null/non-object `data` key or an empty object all mean
/// "no data". Day values are not checked here; the binner skips bad ones.
pub fn extract_rhythm(payload: &Value) -> Result<RawRhythmInput> {
    let object = match payload {
        Value::Null => return Err(RhythmError::MissingData),
        Value::Object(map) => map,
        other => {
            return Err(RhythmError::Parse(format!(
                "expected JSON object, got {}",
                json_kind(other)
            )))
        }
    };

    let section = if object.contains_key(RHYTHM_FIELD) || !object.contains_key("data") {
        let doc: ProfileDocument = serde_json::from_value(payload.clone())?;
        match doc.review_rhythm {
            Some(section @ Value::Object(_)) => serde_json::from_value::<RhythmSection>(section)?,
            Some(Value::Null) | None => {
                return Err(match doc.errors.get(RHYTHM_FIELD) {
                    Some(Value::String(reason)) => RhythmError::Unavailable(reason.clone()),
                    Some(Value::Null) | None => RhythmError::MissingData,
                    Some(other) => RhythmError::Unavailable(other.to_string()),
                })
            }
            Some(other) => {
                warn!("{} is {}, not an object", RHYTHM_FIELD, json_kind(&other));
                return Err(RhythmError::MissingData);
            }
        }
    } else {
        serde_json::from_value::<RhythmSection>(payload.clone())?
    };

    match section.data {
        Some(Value::Object(data)) if !data.is_empty() => Ok(data.into_iter().collect()),
        Some(Value::Object(_)) | Some(Value::Null) | None => Err(RhythmError::MissingData),
        Some(other) => {
            warn!("rhythm data is {}, not an object", json_kind(&other));
            Err(RhythmError::MissingData)
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
