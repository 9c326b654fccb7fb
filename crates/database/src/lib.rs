//! # Course Report Database Crate
//!
//! This crate is the application's interface to the MySQL courses
//! database. It encapsulates session establishment and the one
//! aggregation query the report is built from, hiding the SQL and driver
//! details from the rest of the workspace.
//!
//! ## Public API
//!
//! - `connect`: opens the run's single database session from `DbSettings`.
//! - `server_version` / `close`: the session's confirmation probe and
//!   clean shutdown.
//! - `CourseRepository`: runs the enrollment aggregation and hands back
//!   `report::CourseRecord`s.
//! - `DbError`: the specific error types that can be returned from this
//!   crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{close, connect, server_version};
pub use error::DbError;
pub use repository::{CourseRepository, CourseRow};
pub use sqlx::mysql::MySqlConnection;
