//! Configuration types for document-to-PDF conversion.
//!
//! All conversion behaviour is controlled through [`RenderConfig`], built
//! via its [`RenderConfigBuilder`]. Keeping every knob in one struct makes
//! it trivial to share a config between the two binaries, serialise it for
//! logging, and diff two runs to understand why their outputs differ.
//!
//! # Design choice: builder over constructor
//! The struct is small today, but every option added to a positional
//! constructor breaks existing callers. The builder lets callers set only
//! what they care about and rely on documented defaults for the rest.

use crate::error::DocPdfError;
use serde::{Deserialize, Serialize};

/// Configuration for one document conversion.
///
/// Built via [`RenderConfig::builder()`] or using
/// [`RenderConfig::default()`].
///
/// # Example
/// ```rust
/// use docpdf::{PaperSize, RenderConfig, Theme};
///
/// let config = RenderConfig::builder()
///     .title("API Contracts")
///     .theme(Theme::Compact)
///     .paper(PaperSize::A4)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Document title for the wrapper's `<title>` element. Default: None.
    ///
    /// The title also becomes the PDF's metadata title, which is what PDF
    /// viewers show in their window bar. `None` derives one at conversion
    /// time: the first `#` heading's text for Markdown inputs, else the
    /// input file stem.
    pub title: Option<String>,

    /// Embedded stylesheet to wrap Markdown output in. Default: [`Theme::Report`].
    pub theme: Theme,

    /// Page geometry handed to the PDF engine. Default: [`PaperSize::A4`].
    pub paper: PaperSize,

    /// Write the wrapped HTML document next to the input. Default: true.
    ///
    /// The `.html` sibling is an inspection artifact: it is the exact text
    /// handed to the styling/compat stages, viewable in a browser when the
    /// PDF looks wrong. It is written before rendering so it survives a
    /// renderer failure. Markdown pipeline only; HTML inputs already are
    /// their own inspection artifact.
    pub write_html: bool,

    /// Inject slugified `id` attributes into `h1`–`h6`. Default: false.
    ///
    /// Off by default so simple documents produce plain `<h1>Title</h1>`
    /// markup. Turn on when the document contains intra-document links
    /// (`[…](#some-heading)`); duplicate headings get `-1`, `-2`, …
    /// suffixes so every id stays unique.
    pub heading_anchors: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: None,
            theme: Theme::Report,
            paper: PaperSize::A4,
            write_html: true,
            heading_anchors: false,
        }
    }
}

impl RenderConfig {
    /// Create a new builder for `RenderConfig`.
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`RenderConfig`].
#[derive(Debug)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.config.theme = theme;
        self
    }

    pub fn paper(mut self, paper: PaperSize) -> Self {
        self.config.paper = paper;
        self
    }

    pub fn write_html(mut self, v: bool) -> Self {
        self.config.write_html = v;
        self
    }

    pub fn heading_anchors(mut self, v: bool) -> Self {
        self.config.heading_anchors = v;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<RenderConfig, DocPdfError> {
        if let Some(ref t) = self.config.title {
            if t.trim().is_empty() {
                return Err(DocPdfError::InvalidConfig(
                    "Title must not be blank".into(),
                ));
            }
        }
        Ok(self.config)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// Which embedded stylesheet wraps Markdown output.
///
/// Two themes exist because documentation splits into two densities: prose
/// that people read front to back, and reference material that people scan.
/// Both use the same palette; `Compact` drops font sizes a step and
/// tightens vertical spacing so wide tables survive the page width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Readable long-form default: 11 pt body, generous spacing. (default)
    #[default]
    Report,
    /// Dense variant for contract tables and step-by-step guides: 10 pt
    /// body, 9 pt tables and code.
    Compact,
}

impl Theme {
    /// The embedded `<style>` block for this theme.
    pub fn stylesheet(&self) -> &'static str {
        match self {
            Theme::Report => crate::theme::REPORT_STYLESHEET,
            Theme::Compact => crate::theme::COMPACT_STYLESHEET,
        }
    }
}

/// Output page geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    /// ISO A4, 210 × 297 mm. (default)
    #[default]
    A4,
    /// US Letter, 215.9 × 279.4 mm.
    Letter,
}

impl PaperSize {
    /// Page dimensions in millimetres, `(width, height)`.
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::Letter => (215.9, 279.4),
        }
    }
}
