//! Descriptive statistics and charts over the Cricket World Cup centuries
//! dataset, rendered as a single HTML page.

pub mod clean;
pub mod config;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod plots;
pub mod records;
pub mod report;
pub mod views;

pub use config::{ReportConfig, TableStyle};
pub use error::ReportError;
pub use pipeline::{build_report, run};
