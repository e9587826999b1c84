//! The `Car` record and its identifier.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::coerce::{normalize_number, normalize_numbers, to_text};

/// Identifier of a car. Seed records use numbers, clients may post strings or
/// any other JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CarId {
    Number(Number),
    Text(String),
    Other(Value),
}

impl CarId {
    pub fn number(id: u64) -> Self {
        CarId::Number(Number::from(id))
    }

    pub fn text(id: impl Into<String>) -> Self {
        CarId::Text(id.into())
    }

    /// Id taken from a request body. Integral floats are stored as integers.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => CarId::Number(normalize_number(n)),
            Value::String(s) => CarId::Text(s.clone()),
            other => CarId::Other(normalize_numbers(other)),
        }
    }

    /// True when this id renders to the same text as `raw`.
    ///
    /// Ids of every kind are compared through their string form, so
    /// `CarId::Number(3)` matches the path segment `"3"`.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            CarId::Text(s) => s == raw,
            other => other.to_string() == raw,
        }
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarId::Number(n) => write!(f, "{}", normalize_number(n)),
            CarId::Text(s) => f.write_str(s),
            CarId::Other(v) => f.write_str(&to_text(v)),
        }
    }
}

/// A car record as stored and as rendered in JSON responses.
///
/// Apart from `id`, fields hold whatever truthy JSON the client sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<Value>,

    #[serde(rename = "type")]
    pub kind: Value,

    pub model: Value,

    pub cost: Value,
}

impl Car {
    pub fn new(id: CarId, make: Option<&str>, kind: &str, model: &str, cost: u64) -> Self {
        Self {
            id,
            make: make.map(Value::from),
            kind: Value::from(kind),
            model: Value::from(model),
            cost: Value::from(cost),
        }
    }

    /// Exact, case-sensitive make comparison. Only string makes can match.
    pub fn has_make(&self, make: &str) -> bool {
        self.make.as_ref().and_then(Value::as_str) == Some(make)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_string_comparison() {
        assert!(CarId::number(3).matches("3"));
        assert!(!CarId::number(3).matches("03"));
        assert!(CarId::text("abc").matches("abc"));
        assert!(!CarId::text("abc").matches("ABC"));
        assert!(CarId::Other(json!(true)).matches("true"));
        assert!(CarId::Other(json!([1, 2])).matches("1,2"));
    }

    #[test]
    fn test_integral_float_ids_render_as_integers() {
        let id = CarId::from_value(&serde_json::from_str("1e2").unwrap());
        assert_eq!(id, CarId::number(100));
        assert!(id.matches("100"));
        assert!(!id.matches("100.0"));
        assert_eq!(serde_json::to_value(&id).unwrap(), json!(100));

        let id = CarId::from_value(&json!(1.5));
        assert!(id.matches("1.5"));
    }

    #[test]
    fn test_serialization_shape() {
        let car = Car::new(CarId::number(7), None, "sedan", "model-s", 80);
        let value = serde_json::to_value(&car).unwrap();
        assert_eq!(
            value,
            json!({ "id": 7, "type": "sedan", "model": "model-s", "cost": 80 })
        );
        assert!(value.get("make").is_none());

        let car = Car::new(CarId::text("x1"), Some("tesla"), "sedan", "model-s", 80);
        let value = serde_json::to_value(&car).unwrap();
        assert_eq!(value["id"], json!("x1"));
        assert_eq!(value["make"], json!("tesla"));
    }

    #[test]
    fn test_make_is_case_sensitive() {
        let car = Car::new(CarId::number(1), Some("toyota"), "suv", "rav4", 30);
        assert!(car.has_make("toyota"));
        assert!(!car.has_make("Toyota"));
        assert!(!Car::new(CarId::number(2), None, "suv", "x", 1).has_make(""));

        let mut numeric = Car::new(CarId::number(3), None, "suv", "x", 1);
        numeric.make = Some(json!(5));
        assert!(!numeric.has_make("5"));
    }
}
