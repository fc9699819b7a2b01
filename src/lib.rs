//! Albums - a small HTTP service serving a read-only album catalog
//!
//! - `GET /albums` returns the catalog as a JSON array in insertion order
//! - Unmatched routes answer 404, handler faults answer 500
//! - The catalog is built once at startup and shared without locking

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

pub use error::{Error, Result};
