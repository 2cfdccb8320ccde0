pub mod error;
pub mod exporter;
pub mod pdf;
pub mod port;

pub use error::ExportError;
pub use exporter::{PdfSheetExporter, SHEET_FILE_NAME};
pub use pdf::{render_sheet, sheet_lines};
pub use port::SheetExportPort;

#[cfg(any(test, feature = "testing"))]
pub use port::MockSheetExportPort;
