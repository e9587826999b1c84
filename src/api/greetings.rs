//! Greeting endpoints: the name comes from the path, the query string, or a
//! JSON body.

use axum::extract::{Path, Query};

use crate::api::error::{ApiError, NAME_REQUIRED};
use crate::api::extract::JsonBody;
use crate::api::validation::{display_value, is_truthy, non_empty, query_param, truthy_field};

pub const WELCOME: &str = "Welcome to the Cloud!";

pub fn greeting(name: &str) -> String {
    format!("Welcome to the Cloud, {}!", name)
}

/// GET /
pub async fn welcome() -> &'static str {
    WELCOME
}

/// GET /persons/{name}
pub async fn greet_from_path(Path(name): Path<String>) -> Result<String, ApiError> {
    non_empty(Some(name.as_str()))
        .map(greeting)
        .ok_or(ApiError::MissingField(NAME_REQUIRED))
}

/// GET /persons/?name=
///
/// A repeated `name` key greets the comma-joined values.
pub async fn greet_from_query(
    Query(params): Query<Vec<(String, String)>>,
) -> Result<String, ApiError> {
    query_param(&params, "name")
        .filter(is_truthy)
        .map(|name| greeting(&display_value(&name)))
        .ok_or(ApiError::MissingField(NAME_REQUIRED))
}

/// POST /persons with `{"name": ...}`
pub async fn greet_from_body(JsonBody(body): JsonBody) -> Result<String, ApiError> {
    truthy_field(&body, "name")
        .map(|name| greeting(&display_value(name)))
        .ok_or(ApiError::MissingField(NAME_REQUIRED))
}
