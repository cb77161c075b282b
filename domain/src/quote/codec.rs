//! JSON import/export of quote lists
//!
//! The interchange format is a UTF-8 JSON array of
//! `{ "text", "author"?, "category" }` objects. Export is pretty-printed with
//! two-space indentation and a fixed key order so identical input always
//! yields identical bytes.

use super::entities::QuoteRecord;
use crate::core::error::CodecError;
use serde_json::Value;

/// Default file name offered for exports
pub const EXPORT_FILE_NAME: &str = "quotes.json";

/// Serialize the full ordered quote list.
pub fn export(quotes: &[QuoteRecord]) -> Result<String, CodecError> {
    serde_json::to_string_pretty(quotes).map_err(|e| CodecError::Encode(e.to_string()))
}

/// Parse an exported quote list.
///
/// Any array is accepted, including an empty one. A non-array top-level
/// value, or an element that is not a valid quote, is a format error.
pub fn import(text: &str) -> Result<Vec<QuoteRecord>, CodecError> {
    let value: Value = serde_json::from_str(text).map_err(|e| CodecError::Parse(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(CodecError::Format(format!(
            "expected a JSON array of quotes, found {}",
            json_kind(&value)
        )));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|e| CodecError::Format(format!("entry {}: {}", index, e)))
        })
        .collect()
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
