//! Error types for the docpdf library.
//!
//! A single fatal error type: every failure aborts the conversion. There is
//! no per-stage recovery. A document either converts fully or the first
//! error is returned to the caller (and, in the binaries, printed before
//! exiting with status 1).
//!
//! Messages are written for the person at the terminal: they name the path
//! involved and, where there is an obvious next step, suggest it.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the docpdf library.
#[derive(Debug, Error)]
pub enum DocPdfError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    ///
    /// Checked before any processing; when this is returned no output file
    /// has been created or modified.
    #[error("Input document not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists but could not be read (for example, not valid UTF-8).
    #[error("Failed to read '{path}': {source}")]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Rendering errors ──────────────────────────────────────────────────
    /// The PDF engine rejected the document.
    ///
    /// `detail` is the engine's own message, passed through verbatim.
    #[error("PDF error: {detail}")]
    RenderFailed { detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write an output file (`.html` or `.pdf`).
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let e = DocPdfError::FileNotFound {
            path: PathBuf::from("/docs/guide.md"),
        };
        let msg = e.to_string();
        assert!(msg.contains("/docs/guide.md"), "got: {msg}");
        assert!(msg.contains("not found"), "got: {msg}");
    }

    #[test]
    fn render_failed_display_keeps_engine_detail() {
        let e = DocPdfError::RenderFailed {
            detail: "no <body> element".into(),
        };
        let msg = e.to_string();
        assert!(msg.starts_with("PDF error:"), "got: {msg}");
        assert!(msg.contains("no <body> element"));
    }

    #[test]
    fn output_write_failed_display() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let e = DocPdfError::OutputWriteFailed {
            path: PathBuf::from("/docs/guide.pdf"),
            source: io,
        };
        let msg = e.to_string();
        assert!(msg.contains("/docs/guide.pdf"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn invalid_config_display() {
        let e = DocPdfError::InvalidConfig("Title must not be blank".into());
        assert!(e.to_string().contains("Title must not be blank"));
    }
}
