//! PDF rendering: drive the HTML engine and serialise the result.
//!
//! The engine consumes the full HTML document text (post-compat) and
//! produces pages internally; there is no incremental API and no file
//! handle involved until the caller writes the returned bytes. Engine
//! warnings are non-fatal: they are logged here and counted in the stats
//! so a degraded render is visible without failing the run.

use crate::config::PaperSize;
use crate::error::DocPdfError;
use printpdf::{
    Base64OrRaw, GeneratePdfOptions, PdfDocument, PdfParseErrorSeverity, PdfSaveOptions,
    PdfWarnMsg,
};
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, warn};

/// Render an HTML document to PDF bytes.
///
/// Returns the serialised PDF together with the number of warnings the
/// engine reported. A hard engine failure maps to
/// [`DocPdfError::RenderFailed`] with the engine's message preserved.
pub fn render_pdf(html: &str, paper: PaperSize) -> Result<(Vec<u8>, usize), DocPdfError> {
    let started = Instant::now();

    let (width, height) = paper.dimensions_mm();
    let options = GeneratePdfOptions {
        page_width: Some(width),
        page_height: Some(height),
        ..GeneratePdfOptions::default()
    };

    // Documents are self-contained text; with no image or font maps the
    // engine lays out with its embedded fallback fonts.
    let images: BTreeMap<String, Base64OrRaw> = BTreeMap::new();
    let fonts: BTreeMap<String, Base64OrRaw> = BTreeMap::new();

    let mut warnings: Vec<PdfWarnMsg> = Vec::new();
    let doc = PdfDocument::from_html(html, &images, &fonts, &options, &mut warnings)
        .map_err(|detail| DocPdfError::RenderFailed { detail })?;

    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    log_engine_warnings(&warnings);

    debug!(
        "Rendered {} bytes of PDF in {}ms ({} engine warnings)",
        bytes.len(),
        started.elapsed().as_millis(),
        warnings.len()
    );

    Ok((bytes, warnings.len()))
}

fn log_engine_warnings(warnings: &[PdfWarnMsg]) {
    for w in warnings {
        match w.severity {
            PdfParseErrorSeverity::Error => {
                warn!("engine: page {} op {}: {}", w.page, w.op_id, w.msg);
            }
            _ => {
                debug!("engine: page {} op {}: {}", w.page, w.op_id, w.msg);
            }
        }
    }
}
