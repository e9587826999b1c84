//! Record store subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     seed.rs (fixed seed list)
//!     → CarStore::seeded()
//!     → shared via Arc in AppState
//!
//! Per request:
//!     handlers → list / filter_by_make / find_by_id (read lock, linear scan)
//!     create handler → append (write lock, sole mutator)
//! ```
//!
//! # Design Decisions
//! - Ordered Vec, no index: lookups and filters are linear scans
//! - Append-only; no update or delete
//! - Id uniqueness is not enforced on insert

pub mod car;
pub mod coerce;
pub mod memory;
pub mod seed;

pub use car::{Car, CarId};
pub use memory::CarStore;
