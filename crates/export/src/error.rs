//! Error types for sheet export
//!
//! Failures are terminal for the single requested export only; the in-memory
//! character is untouched and the operation can be retried by the caller.

use thiserror::Error;

/// Errors raised while producing or publishing a sheet document
#[derive(Debug, Error)]
pub enum ExportError {
    /// The document encoder could not produce a byte representation.
    ///
    /// The bundled PDF renderer is total over valid inputs; this variant
    /// exists for `SheetExportPort` implementations whose encoders can fail.
    #[error("Failed to encode sheet document: {0}")]
    Encoding(String),

    /// The rendered document could not be committed to storage.
    /// No partial file is left visible at the published path.
    #[error("Failed to write sheet document")]
    Write(#[from] std::io::Error),
}

impl ExportError {
    /// Create an encoding error.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_error() {
        let err = ExportError::encoding("glyph table exhausted");
        assert!(matches!(err, ExportError::Encoding(_)));
        assert_eq!(
            err.to_string(),
            "Failed to encode sheet document: glyph table exhausted"
        );
    }

    #[test]
    fn test_write_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: ExportError = io.into();
        assert!(matches!(err, ExportError::Write(_)));
    }
}
