//! # docpdf
//!
//! Convert Markdown and HTML documents to PDF, offline.
//!
//! ## Why this crate?
//!
//! Release notes, API contracts, and onboarding guides are authored in
//! Markdown or HTML but get distributed as PDF. Browser-based converters
//! need a headless Chromium and a network; this crate renders entirely
//! in-process. Markdown is parsed to HTML, wrapped in a self-contained
//! page template with an embedded stylesheet, and handed to a pure-Rust
//! PDF engine. The wrapped HTML is also written next to the source so
//! the styled document can be checked in a browser.
//!
//! The embedded engine supports a deliberately small slice of HTML and
//! CSS, so documents pass through a compat stage first: web font links
//! are dropped, stylesheet variables become literal colors, and a few
//! elements the engine would discard are rewritten into styled ones it
//! keeps (see [`pipeline::compat`]).
//!
//! ## Pipeline Overview
//!
//! ```text
//! Markdown                              HTML
//!  │                                     │
//!  ├─ 1. Input     read source file      ├─ 1. Input   read source file
//!  ├─ 2. Markdown  parse to an HTML      │
//!  │               fragment (tables,     │
//!  │               fenced code)          │
//!  ├─ 3. Template  wrap + stylesheet     │
//!  ├─ 4. Artifact  write .html           │
//!  ├─ 5. Compat    rewrite for the       ├─ 2. Compat
//!  │               PDF engine            │
//!  └─ 6. Render    write .pdf            └─ 3. Render; write .pdf
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docpdf::{convert_markdown_file, RenderConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RenderConfig::default();
//!     let outcome = convert_markdown_file("release_notes.md", &config)?;
//!     println!("PDF created: {}", outcome.pdf_path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `md2pdf` and `html2pdf` binaries (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! docpdf = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod theme;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{PaperSize, RenderConfig, RenderConfigBuilder, Theme};
pub use convert::{convert_html_file, convert_markdown_file, html_to_pdf, markdown_to_document};
pub use error::DocPdfError;
pub use output::{ConversionOutcome, RenderStats};
