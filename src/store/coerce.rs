//! Loose JSON value coercions used by the store and the API.
//!
//! Numbers are held in their shortest integral form when they have one, and
//! values are rendered to text the way a JavaScript template string would.

use serde_json::{Number, Value};

// Largest integer an f64 holds exactly.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Rewrite an integral float (`1e2`, `100.0`, `-0.0`) as an integer.
pub fn normalize_number(n: &Number) -> Number {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_EXACT_INT => {
            if f >= 0.0 {
                Number::from(f as u64)
            } else {
                Number::from(f as i64)
            }
        }
        _ => n.clone(),
    }
}

/// Apply [`normalize_number`] to every number inside `value`.
pub fn normalize_numbers(value: &Value) -> Value {
    match value {
        Value::Number(n) => Value::Number(normalize_number(n)),
        Value::Array(items) => Value::Array(items.iter().map(normalize_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), normalize_numbers(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Text form of a value: strings verbatim, arrays comma-joined, objects as
/// `[object Object]`.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => normalize_number(n).to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integral_floats_become_integers() {
        let hundred: Value = serde_json::from_str("1e2").unwrap();
        assert_eq!(normalize_numbers(&hundred), json!(100));
        assert_eq!(normalize_numbers(&json!(100.0)), json!(100));
        assert_eq!(normalize_numbers(&json!(-3.0)), json!(-3));
        assert_eq!(normalize_numbers(&json!(-0.0)), json!(0));
        assert_eq!(normalize_numbers(&json!(2.5)), json!(2.5));
        assert_eq!(normalize_numbers(&json!({ "a": [1.0] })), json!({ "a": [1] }));
    }

    #[test]
    fn test_text_form() {
        assert_eq!(to_text(&json!("ada")), "ada");
        assert_eq!(to_text(&json!(100.0)), "100");
        assert_eq!(to_text(&json!(1.5)), "1.5");
        assert_eq!(to_text(&json!(true)), "true");
        assert_eq!(to_text(&json!(["a", "b"])), "a,b");
        assert_eq!(to_text(&json!([1, null, "x"])), "1,,x");
        assert_eq!(to_text(&json!({ "k": 1 })), "[object Object]");
    }
}
