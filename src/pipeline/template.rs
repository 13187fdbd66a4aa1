//! The fixed HTML document shell around converted fragments.
//!
//! One wrapper shape for every document: doctype, `lang="en"`, UTF-8 meta,
//! a `<title>`, the theme's embedded stylesheet, and the fragment as the
//! body. The PDF engine reads `<title>` into the document metadata, so the
//! title a viewer shows comes from here. The wrapper is a pure function of
//! its inputs; converting the same document twice yields byte-identical
//! HTML.

use crate::config::Theme;

/// Wrap an HTML fragment in the full document shell.
pub fn wrap_document(fragment: &str, title: &str, theme: Theme) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <title>{}</title>\n\
         {}\n\
         </head>\n\
         <body>\n\
         {}\n\
         </body>\n\
         </html>\n",
        escape_text(title),
        theme.stylesheet(),
        fragment.trim_end(),
    )
}

/// Escape text for embedding in HTML element content.
///
/// `&` must be first or the other escapes get double-escaped.
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_has_document_shell() {
        let doc = wrap_document("<p>hi</p>", "Test Doc", Theme::Report);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<html lang=\"en\">"));
        assert!(doc.contains("<meta charset=\"UTF-8\">"));
        assert!(doc.contains("<title>Test Doc</title>"));
        assert!(doc.contains("<style>"));
        assert!(doc.contains("<body>\n<p>hi</p>\n</body>"));
        assert!(doc.trim_end().ends_with("</html>"));
    }

    #[test]
    fn theme_selects_stylesheet() {
        let report = wrap_document("<p>x</p>", "T", Theme::Report);
        let compact = wrap_document("<p>x</p>", "T", Theme::Compact);
        assert!(report.contains("font-size: 11pt"));
        assert!(compact.contains("font-size: 10pt"));
        assert_ne!(report, compact);
    }

    #[test]
    fn title_is_escaped() {
        let doc = wrap_document("<p>x</p>", "Fees & <Charges>", Theme::Report);
        assert!(doc.contains("<title>Fees &amp; &lt;Charges&gt;</title>"));
        assert!(!doc.contains("<title>Fees & <Charges>"));
    }

    #[test]
    fn wrapping_is_deterministic() {
        let a = wrap_document("<h1>Once</h1>", "Same", Theme::Compact);
        let b = wrap_document("<h1>Once</h1>", "Same", Theme::Compact);
        assert_eq!(a, b);
    }
}
