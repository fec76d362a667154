//! Optional-field accessor over a parsed JSON tree
//!
//! Every lookup into an uploaded collection goes through [`Field`]. A lookup
//! that hits a missing key or a value of the wrong shape yields an absent
//! field instead of an error, and absent fields read back as empty text or
//! an empty element list.

use serde_json::Value;

/// A possibly-absent position inside a JSON tree
#[derive(Debug, Clone, Copy)]
pub struct Field<'a>(Option<&'a Value>);

impl<'a> Field<'a> {
    pub fn root(value: &'a Value) -> Self {
        Self(Some(value))
    }

    /// Look up `key` on an object; anything else resolves to absent
    pub fn get(self, key: &str) -> Field<'a> {
        Field(self.0.and_then(Value::as_object).and_then(|map| map.get(key)))
    }

    pub fn is_present(self) -> bool {
        self.0.is_some()
    }

    pub fn value(self) -> Option<&'a Value> {
        self.0
    }

    /// Text coercion.
    ///
    /// Strings are returned as-is, numbers and booleans in their JSON text
    /// form, `null` as `"null"`. Containers and absent fields read as `""`.
    pub fn text(self) -> String {
        match self.0 {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(Value::Null) => "null".to_string(),
            Some(Value::Array(_)) | Some(Value::Object(_)) | None => String::new(),
        }
    }

    /// Array coercion: elements in document order, nothing for non-arrays
    pub fn elements(self) -> impl Iterator<Item = Field<'a>> {
        self.0
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .map(Field::root)
    }
}
