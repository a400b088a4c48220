//! Dotted-path lookup into resume data.

use std::borrow::Cow;

use serde_json::Value;

const LENGTH: &str = "length";

/// Returns `false` for `null`, `false`, zero and the empty string.
///
/// Empty arrays and empty objects are truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Looks up a single key on a value.
///
/// Objects are indexed by member name and arrays by canonical decimal index
/// (`"1"` but not `"01"`). `length` on an array or string is its element
/// count (UTF-16 units for strings), computed on the fly. Any other
/// combination yields `None`.
pub fn lookup_key<'a>(value: &'a Value, key: &str) -> Option<Cow<'a, Value>> {
    match value {
        Value::Object(map) => map.get(key).map(Cow::Borrowed),
        Value::Array(items) if key == LENGTH => Some(Cow::Owned(Value::from(items.len()))),
        Value::Array(items) => key
            .parse::<usize>()
            .ok()
            .filter(|index| index.to_string() == key)
            .and_then(|index| items.get(index))
            .map(Cow::Borrowed),
        Value::String(s) if key == LENGTH => {
            Some(Cow::Owned(Value::from(s.encode_utf16().count())))
        }
        _ => None,
    }
}

/// Resolves a dot separated `path` against `data`.
///
/// Returns `None` when `data` is falsy, when an intermediate value is falsy,
/// or when a key is missing. A `null` leaf is a defined value.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use vitae::resolver::resolve;
///
/// let data = json!({"user": {"name": "Ada"}, "projects": [1, 2]});
/// assert_eq!(resolve(&data, "user.name").as_deref(), Some(&json!("Ada")));
/// assert_eq!(resolve(&data, "projects.length").as_deref(), Some(&json!(2)));
/// assert_eq!(resolve(&data, "user.email"), None);
/// ```
pub fn resolve<'a>(data: &'a Value, path: &str) -> Option<Cow<'a, Value>> {
    if !is_truthy(data) {
        return None;
    }
    path.split('.').try_fold(Cow::Borrowed(data), |current, key| match current {
        Cow::Borrowed(value) if is_truthy(value) => lookup_key(value, key),
        // Computed values are numbers, which have no properties.
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy_intermediate_stops_walk() {
        let data = json!({"a": 0, "b": "", "c": false});
        assert_eq!(resolve(&data, "a.x"), None);
        assert_eq!(resolve(&data, "b.length"), None);
        assert_eq!(resolve(&data, "c.x"), None);
    }

    #[test]
    fn test_array_index() {
        let data = json!({"list": ["zero", "one"]});
        assert_eq!(resolve(&data, "list.1").as_deref(), Some(&json!("one")));
        assert_eq!(resolve(&data, "list.01"), None);
        assert_eq!(resolve(&data, "list.5"), None);
    }

    #[test]
    fn test_length_of_arrays_and_strings() {
        let data = json!({"projects": [{}, {}, {}], "name": "Zoë", "user": {"length": "tall"}});
        assert_eq!(resolve(&data, "projects.length").as_deref(), Some(&json!(3)));
        assert_eq!(resolve(&data, "name.length").as_deref(), Some(&json!(3)));
        assert_eq!(resolve(&data, "user.length").as_deref(), Some(&json!("tall")));
        assert_eq!(resolve(&data, "projects.length.x"), None);
    }
}
