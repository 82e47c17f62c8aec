use itertools::Itertools;
use serde_json::{Map, Value};

/// Build the resource path suffix that identifies `record` for a Put.
///
/// Each field named in `key_spec` contributes one segment, joined with `/`.
/// Strings are used as-is, booleans as `True`/`False`, whole floats without
/// their fraction (`1.0` gives `1`), other scalars as their JSON text, and
/// missing or null fields as an empty segment. Empty segments before the first non-empty
/// one are dropped, so `",id"` over `{"id": "7"}` yields `"7"` rather than `"/7"`.
pub fn key_path(record: &Map<String, Value>, key_spec: &str) -> String {
    key_spec
        .split(',')
        .map(|field| segment(record.get(field.trim())))
        .skip_while(String::is_empty)
        .join("/")
}

fn segment(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Bool(true)) => "True".to_string(),
        Some(Value::Bool(false)) => "False".to_string(),
        Some(Value::Number(number)) => match number.as_f64() {
            Some(float)
                if !number.is_i64() && !number.is_u64() && float.fract() == 0.0 && float.abs() < 1e15 =>
            {
                format!("{}", float as i64)
            }
            _ => number.to_string(),
        },
        Some(other) => other.to_string(),
    }
}
