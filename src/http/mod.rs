//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, per-request span)
//!     → api (route table, handlers)
//!     → Send to client (x-request-id echoed)
//! ```

pub mod request;
pub mod server;

pub use request::{MakeRequestUuidV4, RequestSpan, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
