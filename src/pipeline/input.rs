//! Input resolution: verify the document path and read its text.
//!
//! The existence check runs before anything else so a missing input aborts
//! the run with nothing created or modified on disk. Read failures are
//! split into permission problems (actionable: fix the mode) and everything
//! else (surfaced with the underlying I/O error, which covers the
//! not-actually-UTF-8 case).

use crate::error::DocPdfError;
use std::path::Path;
use tracing::debug;

/// Read the input document as UTF-8 text.
///
/// Errors with [`DocPdfError::FileNotFound`] before touching the file when
/// the path does not exist, [`DocPdfError::PermissionDenied`] when it
/// cannot be opened for reading, and [`DocPdfError::DocumentRead`] for any
/// other read failure.
pub fn read_document(path: &Path) -> Result<String, DocPdfError> {
    if !path.exists() {
        return Err(DocPdfError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    match std::fs::read_to_string(path) {
        Ok(text) => {
            debug!("Read {} bytes from {}", text.len(), path.display());
            Ok(text)
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            Err(DocPdfError::PermissionDenied {
                path: path.to_path_buf(),
            })
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            // Lost a race with a concurrent delete; report it as missing.
            Err(DocPdfError::FileNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => Err(DocPdfError::DocumentRead {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_file_is_file_not_found() {
        let err = read_document(Path::new("/definitely/not/a/real/doc.md")).unwrap_err();
        match err {
            DocPdfError::FileNotFound { path } => {
                assert_eq!(path, PathBuf::from("/definitely/not/a/real/doc.md"));
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn reads_utf8_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        std::fs::write(&path, "# Héllo\n").unwrap();

        let text = read_document(&path).unwrap();
        assert_eq!(text, "# Héllo\n");
    }

    #[test]
    fn non_utf8_is_document_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        std::fs::write(&path, [0xC0u8, 0xAF, 0x20]).unwrap();

        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, DocPdfError::DocumentRead { .. }), "got {err:?}");
    }
}
