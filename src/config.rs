//! Run configuration and output-path resolution

use std::ffi::OsStr;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::report::REPORT_EXTENSION;

/// Configuration for a single report run
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the input file
    pub input_file: PathBuf,
    /// Directory the report is written to; the desktop when unset
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Create a new Config for an input file
    pub fn new(input_file: PathBuf) -> Self {
        Self {
            input_file,
            output_dir: None,
        }
    }

    /// Override the output directory
    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = Some(dir);
        self
    }

    /// Resolve the report path: `<dir>/<input-stem>_analysis_report.pdf`
    pub fn output_path(&self) -> Result<PathBuf> {
        let dir = match &self.output_dir {
            Some(dir) => dir.clone(),
            None => dirs::desktop_dir().context("Could not locate the desktop directory")?,
        };

        let stem = self
            .input_file
            .file_stem()
            .unwrap_or_else(|| OsStr::new("data"));
        let file_name = format!(
            "{}_analysis_report.{}",
            stem.to_string_lossy(),
            REPORT_EXTENSION
        );

        Ok(dir.join(file_name))
    }
}
