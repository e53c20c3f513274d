//! Async access to the persisted records
//!
//! Each store owns a handle to the connection pool and runs the blocking
//! sqlite work on the pool's worker thread through `interact`.

mod error;
pub use error::*;

mod user;
pub use user::*;

mod exercise;
pub use exercise::*;
