//! Block iteration: `{{#key}}BODY{{/key}}`.
//!
//! A block is expanded once per element of the array found at `key`. Blocks
//! are matched in a single non-recursive pass: the body runs to the first
//! `{{/key}}` after the opening tag, so a block nested inside another block's
//! body is not expanded on its own. An opening tag without a matching close
//! is left in the output as literal text.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value;

use crate::resolver::{lookup_key, resolve};
use crate::stringify::to_display_string;
use crate::substitute::PLACEHOLDER;

static BLOCK_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{#([^}]+)\}\}").expect("block pattern is valid"));

/// Token standing for the current element inside a block body.
pub const CURRENT_ITEM: &str = "{{.}}";

/// Expands every well-formed block in `template` against `data`.
///
/// Keys that are absent or do not resolve to an array collapse the whole
/// block, markers included, to the empty string.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use vitae::blocks::expand_blocks;
///
/// let data = json!({"responsibilities": ["Led team", "Shipped v2"]});
/// let html = "<ul>{{#responsibilities}}<li>{{.}}</li>{{/responsibilities}}</ul>";
/// assert_eq!(
///     expand_blocks(html, &data),
///     "<ul><li>Led team</li><li>Shipped v2</li></ul>"
/// );
/// ```
pub fn expand_blocks(template: &str, data: &Value) -> String {
    let mut output = String::with_capacity(template.len());
    let mut copied = 0;
    let mut search = 0;

    while let Some(caps) = BLOCK_OPEN.captures_at(template, search) {
        let open = caps.get_match();
        let key = &caps[1];
        let close_tag = format!("{{{{/{key}}}}}");

        match template[open.end()..].find(&close_tag) {
            Some(offset) => {
                let body_end = open.end() + offset;
                output.push_str(&template[copied..open.start()]);
                output.push_str(&expand_block(key, &template[open.end()..body_end], data));
                copied = body_end + close_tag.len();
                search = copied;
            }
            // Unbalanced opening tag: retry just past its first brace.
            None => search = open.start() + 1,
        }
    }

    output.push_str(&template[copied..]);
    output
}

fn expand_block(key: &str, body: &str, data: &Value) -> String {
    match resolve(data, key).as_deref() {
        Some(Value::Array(items)) => items.iter().map(|item| render_item(body, item)).collect(),
        _ => String::new(),
    }
}

/// Renders one block body for a single array element.
///
/// Primitive elements only fill `{{.}}`. For objects (and nested arrays) each
/// `{{field}}` is looked up directly on the element, without dotted paths,
/// and `{{.}}` stands for the element itself.
fn render_item(body: &str, item: &Value) -> String {
    match item {
        Value::Object(_) | Value::Array(_) => PLACEHOLDER
            .replace_all(body, |caps: &Captures| {
                let field = &caps[1];
                if field == "." {
                    return to_display_string(item);
                }
                match lookup_key(item, field) {
                    Some(value) => to_display_string(&value),
                    None => caps[0].to_string(),
                }
            })
            .into_owned(),
        primitive => body.replace(CURRENT_ITEM, &to_display_string(primitive)),
    }
}
