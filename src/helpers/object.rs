//! Dot-path access and key filtering over JSON values

use serde_json::{Map, Value};

/// Read a nested value using dot notation
///
/// Object keys and array indices are both addressed by segment
/// (`"user.posts.0.title"`). Returns `default` when `object` is null or any
/// segment is missing.
///
/// # Example
///
/// ```rust
/// use support_kit::helpers::get;
/// use serde_json::json;
///
/// let data = json!({"user": {"tags": ["rust", "dev"]}});
/// assert_eq!(get(&data, "user.tags.1", None), Some(&json!("dev")));
///
/// let fallback = json!("none");
/// assert_eq!(get(&data, "user.email", Some(&fallback)), Some(&fallback));
/// ```
pub fn get<'a>(object: &'a Value, key: &str, default: Option<&'a Value>) -> Option<&'a Value> {
    if object.is_null() {
        return default;
    }

    let mut current = object;
    for segment in key.split('.') {
        match child(current, segment) {
            Some(next) => current = next,
            None => return default,
        }
    }

    Some(current)
}

fn child<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Closure that extracts the value at `path`, or `Value::Null` when missing
///
/// Used as the key function for path-based grouping.
pub fn value_retriever(path: impl Into<String>) -> impl Fn(&Value) -> Value {
    let path = path.into();
    move |source: &Value| get(source, &path, None).cloned().unwrap_or(Value::Null)
}

/// Copy of `object` without the listed keys
///
/// Non-object values are returned unchanged.
pub fn except(object: &Value, keys: &[&str]) -> Value {
    filter_keys(object, |key| !keys.contains(&key))
}

/// Copy of `object` keeping only the listed keys
///
/// Non-object values are returned unchanged.
pub fn only(object: &Value, keys: &[&str]) -> Value {
    filter_keys(object, |key| keys.contains(&key))
}

fn filter_keys<F>(object: &Value, keep: F) -> Value
where
    F: Fn(&str) -> bool,
{
    match object {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(key, _)| keep(key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect::<Map<String, Value>>(),
        ),
        other => other.clone(),
    }
}
