//! Required-field checks.
//!
//! A field counts as present only when it is truthy: `null`, `false`, `0`,
//! and `""` are all treated the same as a missing key.

use serde_json::Value;

use crate::api::error::{ApiError, CAR_FIELDS_REQUIRED};
use crate::store::coerce::{normalize_numbers, to_text};
use crate::store::{Car, CarId};

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The field `name` of a JSON object body, if truthy. Non-object bodies have no fields.
pub fn truthy_field<'a>(body: &'a Value, name: &str) -> Option<&'a Value> {
    body.get(name).filter(|v| is_truthy(v))
}

/// Text used when echoing a value back in a greeting.
pub fn display_value(value: &Value) -> String {
    to_text(value)
}

/// Every value given for `key` in a decoded query string, in order.
pub fn query_values<'a>(params: &'a [(String, String)], key: &str) -> Vec<&'a str> {
    params
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .collect()
}

/// A query parameter as a JSON value: one occurrence is a string, a
/// repeated key is an array of strings.
pub fn query_param(params: &[(String, String)], key: &str) -> Option<Value> {
    match query_values(params, key).as_slice() {
        [] => None,
        [single] => Some(Value::from(*single)),
        many => Some(Value::from(many.to_vec())),
    }
}

/// A non-empty string parameter, or `None`.
pub fn non_empty(param: Option<&str>) -> Option<&str> {
    param.filter(|s| !s.is_empty())
}

/// Build a car from a create request body.
///
/// `id`, `type`, `model`, and `cost` must all be truthy; their JSON type is
/// not checked. `make` is optional and kept as sent. Integral floats are
/// stored as integers.
pub fn car_from_body(body: &Value) -> Result<Car, ApiError> {
    let required = |name: &str| {
        truthy_field(body, name).ok_or(ApiError::MissingField(CAR_FIELDS_REQUIRED))
    };

    let id = required("id")?;
    let kind = required("type")?;
    let model = required("model")?;
    let cost = required("cost")?;

    Ok(Car {
        id: CarId::from_value(id),
        make: body.get("make").map(normalize_numbers),
        kind: normalize_numbers(kind),
        model: normalize_numbers(model),
        cost: normalize_numbers(cost),
    })
}
