use serde_json::Value;

use crate::models::ContactFields;

use super::parser::FieldMap;

/// Coerce an arbitrary field mapping into the fixed contact schema.
///
/// Recognized keys are `fullName`/`name`, `email`, `phone`, `program` and
/// `message`. Everything else is ignored and missing keys become empty
/// strings. A non-empty `fullName` takes precedence over `name`.
pub fn extract(raw: &FieldMap) -> ContactFields {
    let name = text(raw, "fullName")
        .or_else(|| text(raw, "name"))
        .unwrap_or_default();

    ContactFields {
        name,
        email: text(raw, "email").unwrap_or_default(),
        phone: text(raw, "phone").unwrap_or_default(),
        program: text(raw, "program").unwrap_or_default(),
        message: text(raw, "message").unwrap_or_default(),
    }
}

/// The field as text. Falsy values (`null`, `false`, zero, `""`) read as
/// missing, matching how the browser forms coalesce them.
fn text(raw: &FieldMap, key: &str) -> Option<String> {
    match raw.get(key)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Field names that a form may send but the sheet never sees.
pub fn ignored_keys(raw: &FieldMap) -> Vec<&str> {
    raw.keys()
        .map(String::as_str)
        .filter(|k| !matches!(*k, "fullName" | "name" | "email" | "phone" | "program" | "message"))
        .collect()
}
