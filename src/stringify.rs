//! String forms of data values as they appear in rendered output.

use serde_json::{Number, Value};

/// Placeholder text for object values inserted into output.
pub const OBJECT_DISPLAY: &str = "[object Object]";

/// Formats a number the way JavaScript's `Number#toString` does.
///
/// Uses the shortest digits that round-trip, plain notation for decimal
/// exponents in `-7..21` and `1e+21` style exponent notation outside it.
pub fn number_display(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let len = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let point = exponent + 1;

    let body = if len <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat(-point as usize))
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{sign}{}", exponent.abs())
        } else {
            format!("{first}.{rest}e{sign}{}", exponent.abs())
        }
    };

    if n < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

/// JSON numbers go through `f64`, so integers past 2^53 round like they
/// would in a browser.
fn json_number_display(n: &Number) -> String {
    n.as_f64().map(number_display).unwrap_or_else(|| n.to_string())
}

/// Converts a value into the text inserted in place of a placeholder.
///
/// Arrays join their elements with `,` and render `null` elements as empty,
/// so a list of skills comes out as `Rust,Go,SQL`.
pub fn to_display_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => json_number_display(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_display_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => OBJECT_DISPLAY.to_string(),
    }
}
