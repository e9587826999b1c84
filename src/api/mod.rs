//! HTTP API: route table and handlers.
//!
//! # Routes
//! ```text
//! GET  /                  → welcome text
//! GET  /persons/{name}    → greeting from path
//! GET  /persons[/]?name=  → greeting from query
//! POST /persons[/]        → greeting from JSON body
//! GET  /cars[/]?make=     → list, optionally filtered by make
//! GET  /cars/{id}         → one car, 404 if absent
//! POST /cars[/]           → append a car, 201
//! ```
//!
//! Both the bare and trailing-slash forms of the collection paths are routed.

pub mod cars;
pub mod error;
pub mod extract;
pub mod greetings;
pub mod validation;

use axum::{routing::get, Router};

use crate::http::server::AppState;

pub use error::ApiError;

/// Route table, without middleware. State is supplied by the caller.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(greetings::welcome))
        .route(
            "/persons",
            get(greetings::greet_from_query).post(greetings::greet_from_body),
        )
        .route(
            "/persons/",
            get(greetings::greet_from_query).post(greetings::greet_from_body),
        )
        .route("/persons/{name}", get(greetings::greet_from_path))
        .route("/cars", get(cars::list_cars).post(cars::create_car))
        .route("/cars/", get(cars::list_cars).post(cars::create_car))
        .route("/cars/{id}", get(cars::get_car))
}
