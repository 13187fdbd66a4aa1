//! Conversion entry points.
//!
//! Two file-based functions cover the CLI use cases: Markdown sources go
//! through [`convert_markdown_file`], already-authored HTML goes through
//! [`convert_html_file`]. Both write their outputs next to the input file.
//! The in-memory pair ([`markdown_to_document`], [`html_to_pdf`]) exposes
//! the same pipeline without touching the filesystem, for callers that
//! serve documents from a database or a request body.

use crate::config::RenderConfig;
use crate::error::DocPdfError;
use crate::output::{ConversionOutcome, RenderStats};
use crate::pipeline::{compat, input, markdown, render, template};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Convert a Markdown file to a PDF written next to the source.
///
/// The intermediate HTML document is also written next to the source
/// (same stem, `.html` extension) unless `config.write_html` is off. It
/// is written before rendering starts, so it is available for inspection
/// even when the PDF engine rejects the document.
///
/// # Errors
/// Returns `Err(DocPdfError)` when the input is missing or unreadable,
/// when the PDF engine fails, or when an output file cannot be written.
pub fn convert_markdown_file(
    path: impl AsRef<Path>,
    config: &RenderConfig,
) -> Result<ConversionOutcome, DocPdfError> {
    let total_start = Instant::now();
    let path = path.as_ref();
    info!("Converting Markdown: {}", path.display());

    // ── Step 1: Read input ───────────────────────────────────────────────
    let source = input::read_document(path)?;

    // ── Step 2: Derive title ─────────────────────────────────────────────
    let title = derive_title(config, &source, Some(path));
    debug!("Document title: {}", title);

    // ── Step 3: Markdown → HTML fragment ─────────────────────────────────
    let fragment = markdown::to_html_fragment(&source, config.heading_anchors);

    // ── Step 4: Wrap in the page template ────────────────────────────────
    let document = template::wrap_document(&fragment, &title, config.theme);

    // ── Step 5: Write the HTML artifact ──────────────────────────────────
    // Written before the compat pass so the artifact keeps the authored
    // markup (`<pre>`, `<code>`, table sections) rather than the rewritten
    // form the engine sees.
    let html_path = if config.write_html {
        let html_path = path.with_extension("html");
        write_output(&html_path, document.as_bytes())?;
        info!("Wrote HTML artifact: {}", html_path.display());
        Some(html_path)
    } else {
        None
    };

    // ── Step 6: Compat pass for the engine ───────────────────────────────
    let prepared = compat::prepare_for_renderer(&document);

    // ── Step 7: Render PDF ───────────────────────────────────────────────
    let (pdf_bytes, renderer_warnings) = render::render_pdf(&prepared, config.paper)?;

    // ── Step 8: Write the PDF ────────────────────────────────────────────
    let pdf_path = path.with_extension("pdf");
    write_output(&pdf_path, &pdf_bytes)?;

    let stats = RenderStats {
        input_bytes: source.len(),
        html_bytes: html_path.as_ref().map(|_| document.len()),
        pdf_bytes: pdf_bytes.len(),
        duration_ms: total_start.elapsed().as_millis() as u64,
        renderer_warnings,
    };
    info!(
        "Conversion complete: {} ({} bytes, {}ms)",
        pdf_path.display(),
        stats.pdf_bytes,
        stats.duration_ms
    );

    Ok(ConversionOutcome {
        pdf_path,
        html_path,
        stats,
    })
}

/// Convert an HTML file to a PDF written next to the source.
///
/// The document passes through the renderer compat rules first, so pages
/// authored against the shared stylesheet (web font links, palette
/// variables) render correctly. No HTML artifact is written; the input
/// file already is one.
///
/// # Errors
/// Returns `Err(DocPdfError)` when the input is missing or unreadable,
/// when the PDF engine fails, or when the PDF cannot be written.
pub fn convert_html_file(
    path: impl AsRef<Path>,
    config: &RenderConfig,
) -> Result<ConversionOutcome, DocPdfError> {
    let total_start = Instant::now();
    let path = path.as_ref();
    info!("Converting HTML: {}", path.display());

    // ── Step 1: Read input ───────────────────────────────────────────────
    let source = input::read_document(path)?;

    // ── Step 2: Compat pass for the engine ───────────────────────────────
    let prepared = compat::prepare_for_renderer(&source);

    // ── Step 3: Render PDF ───────────────────────────────────────────────
    let (pdf_bytes, renderer_warnings) = render::render_pdf(&prepared, config.paper)?;

    // ── Step 4: Write the PDF ────────────────────────────────────────────
    let pdf_path = path.with_extension("pdf");
    write_output(&pdf_path, &pdf_bytes)?;

    let stats = RenderStats {
        input_bytes: source.len(),
        html_bytes: None,
        pdf_bytes: pdf_bytes.len(),
        duration_ms: total_start.elapsed().as_millis() as u64,
        renderer_warnings,
    };
    info!(
        "Conversion complete: {} ({} bytes, {}ms)",
        pdf_path.display(),
        stats.pdf_bytes,
        stats.duration_ms
    );

    Ok(ConversionOutcome {
        pdf_path,
        html_path: None,
        stats,
    })
}

/// Convert Markdown text to a complete HTML document string.
///
/// This is the document as written to the `.html` artifact: the parsed
/// fragment wrapped in the page template with the configured theme's
/// stylesheet, before any renderer compat rewriting.
///
/// # Example
/// ```rust
/// use docpdf::{markdown_to_document, RenderConfig};
///
/// let config = RenderConfig::default();
/// let html = markdown_to_document("# Release Notes\n\nShip it.", &config);
/// assert!(html.contains("<h1>Release Notes</h1>"));
/// ```
pub fn markdown_to_document(markdown_text: &str, config: &RenderConfig) -> String {
    let title = derive_title(config, markdown_text, None);
    let fragment = markdown::to_html_fragment(markdown_text, config.heading_anchors);
    template::wrap_document(&fragment, &title, config.theme)
}

/// Render an HTML document string to PDF bytes in memory.
///
/// Applies the same renderer compat rules as [`convert_html_file`] but
/// performs no filesystem I/O.
///
/// # Errors
/// Returns `Err(DocPdfError::RenderFailed)` when the PDF engine rejects
/// the document.
pub fn html_to_pdf(html: &str, config: &RenderConfig) -> Result<Vec<u8>, DocPdfError> {
    let prepared = compat::prepare_for_renderer(html);
    let (bytes, _warnings) = render::render_pdf(&prepared, config.paper)?;
    Ok(bytes)
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// Pick the document title, from most-specific to least-specific.
///
/// 1. `config.title` set by the caller.
/// 2. The first heading in the Markdown source, any level.
/// 3. The input file's stem, when converting a file.
/// 4. `"Document"`.
fn derive_title(config: &RenderConfig, markdown_text: &str, path: Option<&Path>) -> String {
    if let Some(ref title) = config.title {
        return title.clone();
    }
    if let Some(heading) = markdown::first_heading(markdown_text) {
        return heading;
    }
    path.and_then(Path::file_stem)
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Document".to_string())
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<(), DocPdfError> {
    std::fs::write(path, bytes).map_err(|source| DocPdfError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    })
}
