//! Printable export of an itinerary.

pub mod document;
pub mod layout;
pub mod metrics;
pub mod pdf;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    error::{PlannerError, Result},
    types::Itinerary,
};

pub use document::layout_itinerary;
pub use layout::{Document, Page, TextRun};

/// A rendered document ready to be saved.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

impl ExportArtifact {
    /// Save the document into `dir`, returning the full path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        if dir.exists() && !dir.is_dir() {
            return Err(PlannerError::Export(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
        std::fs::create_dir_all(dir)?;

        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;
        info!(target: "evasion::export", path = %path.display(), pages = self.page_count, "document saved");
        Ok(path)
    }
}

/// Lay out and serialize `itinerary` as a PDF.
pub fn export_itinerary(itinerary: &Itinerary) -> Result<ExportArtifact> {
    let document = layout_itinerary(itinerary);
    let bytes = pdf::write_pdf(&document)?;

    Ok(ExportArtifact {
        file_name: export_file_name(&itinerary.destination),
        page_count: document.page_count(),
        bytes,
    })
}

/// `Evasion_<destination>.pdf`, with every character other than an ASCII
/// letter or digit replaced by `_`.
pub fn export_file_name(destination: &str) -> String {
    let sanitized: String = destination
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("Evasion_{sanitized}.pdf")
}
