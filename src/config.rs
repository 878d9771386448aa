use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

pub static DEFAULT_INPUT: &str = "Cleaned-All-Cricket-World-Cup-Centuries.csv";
pub static DEFAULT_OUTPUT: &str = "cwc-centuries-report.html";

/// How the Team x Opposition and boundary tables are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    /// Centered tables with inline cell styling.
    #[default]
    Styled,
    /// Generic tables styled only by the page stylesheet.
    Plain,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub performance_venue: String,
    pub relationship_venue: String,
    pub century_threshold: i64,
    pub top_scorers: usize,
    pub top_boundary_hitters: usize,
    pub table_style: TableStyle,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            performance_venue: "Old Trafford Cricket Ground, Manchester".to_string(),
            relationship_venue: "The Oval, London".to_string(),
            century_threshold: 100,
            top_scorers: 5,
            top_boundary_hitters: 10,
            table_style: TableStyle::Styled,
        }
    }
}

impl ReportConfig {
    /// Load a report configuration from a JSON file. Missing keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ReportError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ReportConfig =
            serde_json::from_str(&content).map_err(|source| ReportError::ParseConfig {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("Loaded config from {:?}: {:#?}", path, config);
        Ok(config)
    }

    /// Command line flags win over the file.
    pub fn with_overrides(
        mut self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        table_style: Option<TableStyle>,
    ) -> Self {
        if let Some(input) = input {
            self.input = input;
        }
        if let Some(output) = output {
            self.output = output;
        }
        if let Some(table_style) = table_style {
            self.table_style = table_style;
        }
        self
    }
}
