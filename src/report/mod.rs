//! Report rendering: Summary → paginated PDF document on disk

mod document;
mod metrics;
mod pdf;
mod section;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::analyze::Summary;

pub use document::{paginate, Block, BlockKind, Page, ReportDocument, REPORT_TITLE};
pub use pdf::PdfRenderer;
pub use section::{build_sections, Content, Section};

/// File extension of the rendered document format
pub const REPORT_EXTENSION: &str = "pdf";

/// Renderer failure: the document could not be serialized, or the target
/// path could not be written.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Error rendering report: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Error writing report to {}: {source}", .path.display())]
    Unwritable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Render the summary into a paginated PDF at `output_path` and return the
/// path. The document is serialized fully in memory before a single write,
/// so a failure leaves no partial file behind.
pub fn generate_report(summary: &Summary, output_path: &Path) -> Result<PathBuf, RenderError> {
    let sections = build_sections(summary);
    let document = paginate(&sections);
    let bytes = PdfRenderer::render(&document)?;

    log::debug!(
        "rendered {} page(s), {} bytes",
        document.page_count(),
        bytes.len()
    );

    fs::write(output_path, bytes).map_err(|source| RenderError::Unwritable {
        path: output_path.to_path_buf(),
        source,
    })?;

    Ok(output_path.to_path_buf())
}
