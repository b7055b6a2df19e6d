//! Data engine for the Apex sales intelligence dashboard.
//!
//! Two halves, one process, no concurrency:
//!   - a deterministic generator that builds a synthetic e-commerce
//!     transactions table and persists it as a flat CSV file, and
//!   - a filter/aggregation pipeline that turns the loaded table plus a
//!     sidebar selection into the grouped aggregates the five dashboard
//!     views chart.
//!
//! The UI layer is an external collaborator: it hands in a
//! `filter::FilterSelection` and consumes tables back. Nothing here
//! renders anything.

pub mod aggregate;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod generator;
pub mod record;
pub mod rng;
pub mod schema;
pub mod store;
pub mod types;
