//! PDF sheet exporter adapter.
//!
//! Publishes the rendered document under a fixed file name. The write is
//! staged through a temporary file in the destination directory and moved
//! into place in one step, so the published path never holds a partial
//! document, even when the write fails midway.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use herosheet_domain::Character;

use crate::error::ExportError;
use crate::pdf::render_sheet;
use crate::port::SheetExportPort;

/// Fixed name of the published document.
pub const SHEET_FILE_NAME: &str = "CharacterSheet.pdf";

/// Production sheet exporter writing into a configurable directory.
#[derive(Debug, Clone)]
pub struct PdfSheetExporter {
    output_dir: PathBuf,
}

impl PdfSheetExporter {
    /// Create an exporter publishing into the OS temporary directory.
    pub fn new() -> Self {
        Self {
            output_dir: std::env::temp_dir(),
        }
    }

    /// Create an exporter publishing into the given directory.
    pub fn with_output_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: dir.into(),
        }
    }

    /// The deterministic location the sheet is published to.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(SHEET_FILE_NAME)
    }
}

impl Default for PdfSheetExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetExportPort for PdfSheetExporter {
    fn export(&self, character: &Character) -> Result<PathBuf, ExportError> {
        let bytes = render_sheet(character);
        let path = self.output_path();
        publish_atomic(&path, &bytes)?;
        tracing::debug!("Exported character sheet: {}", path.display());
        Ok(path)
    }
}

/// Stage in the destination directory, then persist in one rename.
fn publish_atomic(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(bytes)?;
    staged
        .persist(path)
        .map_err(|err| ExportError::Write(err.error))?;
    Ok(())
}
