//! Outbound port for sheet export.
//!
//! This port abstracts document production, enabling:
//! - Gate testing without touching the filesystem (mock export)
//! - Clean hexagonal architecture (no I/O in the domain layer)

use std::path::PathBuf;

use herosheet_domain::Character;

use crate::error::ExportError;

/// Sheet export abstraction consumed by the form controller layer.
///
/// Implementations render the character into a one-page document and publish
/// it. They do NOT re-check the point budget; gating the call is the
/// caller's responsibility.
///
/// # Implementations
///
/// - `PdfSheetExporter` (production, renders a PDF and publishes atomically)
/// - `MockSheetExportPort` via mockall (testing)
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait SheetExportPort {
    /// Render the character's sheet and publish it, returning the published
    /// location. Repeated calls with equal input publish byte-equal
    /// documents; nothing is cached between calls.
    fn export(&self, character: &Character) -> Result<PathBuf, ExportError>;
}
