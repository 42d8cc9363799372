use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::FieldPath;

/// Error type for typed access to extra fields.
#[derive(Debug, thiserror::Error)]
pub enum ExtraError {
    #[error("Missing extra field: {0}")]
    MissingPath(FieldPath),

    #[error("Type mismatch at extra field '{path}': expected {expected}, got {actual}")]
    TypeMismatch {
        path: FieldPath,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Type-specific configuration attached to a form item.
///
/// Stored as a nested JSON object and addressed with dot-separated paths, so
/// `placeholder.maxLength` reads `{"placeholder": {"maxLength": 50}}`.
/// Keys a consumer does not know about are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extra {
    values: Map<String, Value>,
}

impl Extra {
    /// Create an empty extra map.
    pub fn new() -> Self {
        Self { values: Map::new() }
    }

    /// Builder-style insert.
    pub fn with(mut self, path: impl Into<FieldPath>, value: impl Into<Value>) -> Self {
        self.insert(path, value);
        self
    }

    /// Insert a value at the given path, creating intermediate objects.
    ///
    /// A non-object value sitting on an intermediate segment is replaced.
    pub fn insert(&mut self, path: impl Into<FieldPath>, value: impl Into<Value>) {
        let path = path.into();
        let segments: Vec<&str> = path.segments().collect();
        let Some((last, parents)) = segments.split_last() else {
            return;
        };

        let mut map = &mut self.values;
        for segment in parents {
            let entry = map
                .entry(*segment)
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            map = match entry {
                Value::Object(inner) => inner,
                _ => return,
            };
        }
        map.insert((*last).to_string(), value.into());
    }

    /// Get the value at the given path.
    pub fn get(&self, path: &FieldPath) -> Option<&Value> {
        let mut segments = path.segments();
        let mut current = self.values.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    // === Convenience accessors ===

    /// Get a string value at the given path.
    pub fn get_str(&self, path: &FieldPath) -> Result<&str, ExtraError> {
        match self.get(path) {
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(ExtraError::TypeMismatch {
                path: path.clone(),
                expected: "string",
                actual: type_name(other),
            }),
            None => Err(ExtraError::MissingPath(path.clone())),
        }
    }

    /// Get an integer value at the given path.
    pub fn get_int(&self, path: &FieldPath) -> Result<i64, ExtraError> {
        match self.get(path) {
            Some(Value::Number(n)) if n.is_i64() || n.is_u64() => {
                n.as_i64().ok_or_else(|| ExtraError::TypeMismatch {
                    path: path.clone(),
                    expected: "integer",
                    actual: "out-of-range number",
                })
            }
            Some(other) => Err(ExtraError::TypeMismatch {
                path: path.clone(),
                expected: "integer",
                actual: type_name(other),
            }),
            None => Err(ExtraError::MissingPath(path.clone())),
        }
    }
}

impl From<Map<String, Value>> for Extra {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_and_get_nested() {
        let mut extra = Extra::new();
        extra.insert("placeholder.maxLength", 30);
        extra.insert("optionsText", "A\nB");

        assert_eq!(
            extra.get_int(&FieldPath::new("placeholder.maxLength")).unwrap(),
            30
        );
        assert_eq!(extra.get_str(&FieldPath::new("optionsText")).unwrap(), "A\nB");
        assert_eq!(
            serde_json::to_value(&extra).unwrap(),
            json!({ "placeholder": { "maxLength": 30 }, "optionsText": "A\nB" })
        );
    }

    #[test]
    fn insert_replaces_scalar_parent() {
        let mut extra = Extra::new().with("placeholder", "Type here");
        extra.insert("placeholder.maxLength", 10);
        assert_eq!(
            extra.get(&FieldPath::new("placeholder")),
            Some(&json!({ "maxLength": 10 }))
        );
    }

    #[test]
    fn type_mismatch_error() {
        let extra = Extra::new().with("placeholder.maxLength", "fifty");
        let result = extra.get_int(&FieldPath::new("placeholder.maxLength"));
        assert!(matches!(
            result,
            Err(ExtraError::TypeMismatch {
                expected: "integer",
                actual: "string",
                ..
            })
        ));
    }

    #[test]
    fn missing_path_error() {
        let extra = Extra::new();
        assert!(matches!(
            extra.get_str(&FieldPath::new("optionsText")),
            Err(ExtraError::MissingPath(_))
        ));
        assert!(extra.get_int(&FieldPath::new("a.b")).is_err());
    }

    #[test]
    fn unknown_keys_survive_round_trip() {
        let raw = json!({ "optionsText": "x", "color": { "hue": 120 } });
        let extra: Extra = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&extra).unwrap(), raw);
    }
}
