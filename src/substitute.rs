//! Scalar placeholder substitution.
//!
//! A placeholder is `{{path}}` where `path` is any run of characters other
//! than `}`. Placeholders whose path does not resolve are left untouched so
//! that partially filled templates degrade instead of failing.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value;

use crate::resolver::resolve;
use crate::stringify::to_display_string;

/// Matches a single `{{path}}` token.
pub(crate) static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("placeholder pattern is valid"));

/// Replaces every resolvable `{{path}}` in `template` with its value from `data`.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use vitae::substitute::substitute;
///
/// let data = json!({"fullName": "Ada Lovelace"});
/// assert_eq!(substitute("<h1>{{fullName}}</h1>", &data), "<h1>Ada Lovelace</h1>");
/// assert_eq!(substitute("<p>{{email}}</p>", &data), "<p>{{email}}</p>");
/// ```
pub fn substitute(template: &str, data: &Value) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match resolve(data, &caps[1]) {
            Some(value) => to_display_string(&value),
            None => caps[0].to_string(),
        })
        .into_owned()
}
