use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::StoreError;

/// A stored document: a JSON object.
pub type Document = Map<String, Value>;

/// Field holding the store-assigned identifier of every document.
pub const ID_FIELD: &str = "_id";

/// Generates a fresh document identifier.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Serializes `value` into a document. Fails unless it serializes to a JSON object.
pub fn to_document<T: Serialize + ?Sized>(value: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::InvalidDocument(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

/// Copies every top-level field of `set` into `target`, except `_id`.
///
/// Returns whether any stored value actually changed.
pub fn merge_fields(target: &mut Document, set: &Document) -> bool {
    let mut changed = false;
    for (key, value) in set {
        if key == ID_FIELD {
            continue;
        }
        if target.get(key) != Some(value) {
            target.insert(key.clone(), value.clone());
            changed = true;
        }
    }
    changed
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
