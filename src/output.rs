//! Result types returned by the conversion entry points.
//!
//! [`ConversionOutcome`] records where the outputs landed plus a small
//! [`RenderStats`] block, so binaries and tests can report without
//! re-statting files. Both serialise for the binaries' `--json` mode.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything produced by one successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutcome {
    /// Path of the written `.pdf`, sibling of the input document.
    pub pdf_path: PathBuf,

    /// Path of the written `.html` inspection artifact.
    ///
    /// `None` for HTML inputs and when `write_html` is off.
    pub html_path: Option<PathBuf>,

    /// Size and timing accounting for the run.
    pub stats: RenderStats,
}

/// Byte counts and timing for one conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderStats {
    /// Size of the source document text in bytes.
    pub input_bytes: usize,

    /// Size of the written `.html` artifact, when one was written.
    pub html_bytes: Option<usize>,

    /// Size of the written `.pdf` in bytes.
    pub pdf_bytes: usize,

    /// Wall-clock time for the whole conversion in milliseconds.
    pub duration_ms: u64,

    /// Number of warnings the PDF engine reported while rendering.
    ///
    /// Warnings do not fail the conversion; they are logged at debug level
    /// and counted here so callers can notice a degraded render.
    pub renderer_warnings: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_serialises_for_json_mode() {
        let outcome = ConversionOutcome {
            pdf_path: PathBuf::from("guide.pdf"),
            html_path: Some(PathBuf::from("guide.html")),
            stats: RenderStats {
                input_bytes: 120,
                html_bytes: Some(2048),
                pdf_bytes: 9000,
                duration_ms: 42,
                renderer_warnings: 0,
            },
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"pdf_path\""));
        assert!(json.contains("guide.html"));
    }
}
