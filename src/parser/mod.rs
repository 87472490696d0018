//! Parser layer for reading tabular data files

mod csv;

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use thiserror::Error;

use crate::model::Table;

pub use self::csv::CsvParser;

/// Classified loader failure: the path is missing, or the file is there but
/// is not readable tabular data.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found. Please check the path: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Error reading file {}: {message}", .path.display())]
    Unparsable { path: PathBuf, message: String },
}

/// Trait for parsing tabular data files
pub trait Parser {
    /// Parse a file and return a Table
    fn parse(&self, path: &Path) -> Result<Table>;

    /// Check if this parser can handle the given file extension
    fn supports_extension(&self, ext: &str) -> bool;
}

/// Factory for creating parsers based on file extension
pub struct ParserFactory {
    parsers: Vec<Box<dyn Parser>>,
}

impl Default for ParserFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserFactory {
    /// Create a new parser factory with all supported parsers
    pub fn new() -> Self {
        Self {
            parsers: vec![Box::new(CsvParser)],
        }
    }

    /// Get a parser for the given file path
    pub fn get_parser(&self, path: &Path) -> Result<&dyn Parser> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        for parser in &self.parsers {
            if parser.supports_extension(&ext) {
                return Ok(parser.as_ref());
            }
        }

        bail!(
            "Unsupported file format: {}",
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
        )
    }

    /// Parse a file using the appropriate parser
    pub fn parse(&self, path: &Path) -> Result<Table> {
        let parser = self.get_parser(path)?;
        parser.parse(path)
    }
}

/// Load a table from disk, classifying the failure mode.
pub fn load_table(path: &Path) -> Result<Table, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let factory = ParserFactory::new();
    let table = factory
        .parse(path)
        .map_err(|source| LoadError::Unparsable {
            path: path.to_path_buf(),
            message: format!("{source:#}"),
        })?;

    log::debug!(
        "loaded {} ({} rows, {} columns)",
        path.display(),
        table.row_count(),
        table.column_count()
    );
    Ok(table)
}
