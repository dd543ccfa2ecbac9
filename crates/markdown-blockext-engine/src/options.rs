//! Merging an options-block payload over a block type's defaults.
//!
//! The payload's top-level fields replace the default fields of the same
//! name. Object-valued fields (attribute maps) are replaced wholesale, except
//! that the `class` attribute accumulates: the payload's class is appended to
//! the default one.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::error::{DocumentError, MalformedReason};
use crate::parsing::payload::PayloadSpan;

pub const CLASS_ATTRIBUTE: &str = "class";

/// Builds the effective options for a block from `defaults` and a claimed payload.
pub fn merge_payload<T>(defaults: &T, payload: &PayloadSpan) -> Result<T, DocumentError>
where
    T: Serialize + DeserializeOwned,
{
    let invalid = |reason: String| payload.malformed(MalformedReason::InvalidData(reason));

    let Value::Object(mut merged) =
        serde_json::to_value(defaults).map_err(|e| invalid(e.to_string()))?
    else {
        return Err(invalid("options type is not an object".to_string()));
    };

    let overlay: Value = serde_json::from_str(&payload.raw).map_err(|e| invalid(e.to_string()))?;
    let Value::Object(overlay) = overlay else {
        return Err(invalid(format!(
            "expected an object, found {}",
            json_kind(&overlay)
        )));
    };

    for (key, value) in overlay {
        merge_field(&mut merged, key, value);
    }

    serde_json::from_value(Value::Object(merged)).map_err(|e| invalid(e.to_string()))
}

fn merge_field(target: &mut Map<String, Value>, key: String, value: Value) {
    let value = match (target.get(&key), value) {
        (Some(Value::Object(existing)), Value::Object(replacement)) => {
            Value::Object(merge_attributes(existing, replacement))
        }
        (_, value) => value,
    };
    target.insert(key, value);
}

fn merge_attributes(
    existing: &Map<String, Value>,
    mut replacement: Map<String, Value>,
) -> Map<String, Value> {
    let Some(Value::String(base)) = existing.get(CLASS_ATTRIBUTE) else {
        return replacement;
    };
    let class = match replacement.get(CLASS_ATTRIBUTE) {
        Some(Value::String(extra)) if base.is_empty() => extra.clone(),
        Some(Value::String(extra)) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.clone(),
    };
    replacement.insert(CLASS_ATTRIBUTE.to_string(), Value::String(class));
    replacement
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
