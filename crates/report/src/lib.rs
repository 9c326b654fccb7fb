//! # Course Report Crate
//!
//! Owns the report artifact of a run: shaping aggregated rows into a
//! `ReportDocument`, persisting it as pretty-printed JSON, and rendering
//! the console summary table. This crate knows nothing about the database;
//! it receives fully aggregated records and emits the two output surfaces.
//!
//! ## Public API
//!
//! - `CourseRecord` / `ReportDocument`: the report data model. `build`
//!   captures the generation timestamp and enforces display order.
//! - `write_report`: serializes the document to a timestamped JSON file.
//! - `print_summary`: renders the banner, summary lines, and course table.
//! - `ReportError`: the specific error types that can be returned from
//!   this crate.

// Declare the modules that constitute this crate.
pub mod document;
pub mod error;
pub mod render;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use document::{CourseRecord, ReportDocument};
pub use error::ReportError;
pub use render::print_summary;
pub use store::write_report;
