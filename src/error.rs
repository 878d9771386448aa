use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("cannot open dataset {path:?}: {source}")]
    OpenDataset {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read dataset header: {0}")]
    Header(#[from] csv::Error),
    #[error("dataset is missing required column {0:?}")]
    MissingColumn(String),
    #[error("cannot read config {path:?}: {source}")]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path:?}: {source}")]
    ParseConfig {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("cannot write report {path:?}: {source}")]
    WriteReport {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Polars(#[from] PolarsError),
}
