//! datareport - Summary-statistics PDF reports for tabular data
//!
//! Loads a CSV file into a typed [`Table`], digests it into a fixed-shape
//! [`Summary`], and renders the summary as a paginated PDF document.

pub mod analyze;
pub mod config;
pub mod model;
pub mod parser;
pub mod report;

pub use analyze::Summary;
pub use config::Config;
pub use model::Table;
