//! Embedded stylesheets for the HTML document wrapper.
//!
//! Centralising the CSS here serves two purposes:
//!
//! 1. **Single source of truth**: the palette and type scale live in one
//!    place, shared by every document the toolkit produces.
//!
//! 2. **Testability**: the authoring constraints below are enforced by
//!    unit tests instead of being rediscovered one broken PDF at a time.
//!
//! # Authoring constraints
//!
//! The PDF engine inlines `<style>` rules with a minimal matcher: one
//! selector per rule, element / `.class` / `#id` forms only. Selector
//! lists (`th, td { … }`), descendant selectors, at-rules, and `var()`
//! never match there, so this CSS uses none of them. Rules that look
//! redundant (`pre` and `.codeblock`, `code` and `.code`) are the browser
//! and renderer halves of the same style. `body` rules only affect
//! browsers; every content element carries its own font and color.

/// Default stylesheet: readable long-form documents.
///
/// 11 pt body, 22/16/13 pt headings, full-width bordered tables. The
/// `.codeblock` / `.code` / `.quote` classes style the renderer-safe
/// rewrites of `pre` / `code` / `blockquote`.
pub const REPORT_STYLESHEET: &str = "\
<style>
body { font-family: Arial, Helvetica, sans-serif; font-size: 11pt; line-height: 1.5; color: #333; margin: 2em; }
p { font-family: Arial, Helvetica, sans-serif; font-size: 11pt; color: #333; margin: 0.6em 0; }
li { font-family: Arial, Helvetica, sans-serif; font-size: 11pt; color: #333; margin: 0.3em 0; }
h1 { color: #1a365d; font-size: 22pt; border-bottom: 2px solid #3182ce; padding-bottom: 0.3em; margin-top: 1.5em; }
h2 { color: #2c5282; font-size: 16pt; margin-top: 1.2em; }
h3 { color: #2d3748; font-size: 13pt; margin-top: 1em; }
pre { background: #f7fafc; border: 1px solid #e2e8f0; padding: 0.8em; font-family: Consolas, monospace; font-size: 9pt; white-space: pre-wrap; }
code { background: #f7fafc; border: 1px solid #e2e8f0; padding: 0.2em 0.4em; font-family: Consolas, monospace; font-size: 9pt; }
.codeblock { background: #f7fafc; border: 1px solid #e2e8f0; padding: 0.8em; margin: 0.8em 0; font-family: Consolas, monospace; font-size: 9pt; }
.code { font-family: Consolas, monospace; font-size: 9pt; }
.quote { border-left: 4px solid #3182ce; margin: 1em 0; padding-left: 1em; color: #4a5568; }
ul { margin: 0.5em 0; padding-left: 1.5em; }
ol { margin: 0.5em 0; padding-left: 1.5em; }
hr { border: none; border-top: 1px solid #cbd5e0; margin: 1.5em 0; }
strong { color: #1a365d; }
blockquote { border-left: 4px solid #3182ce; margin: 1em 0; padding-left: 1em; color: #4a5568; }
a { color: #3182ce; text-decoration: none; }
table { border-collapse: collapse; width: 100%; margin: 1em 0; }
th { background: #edf2f7; border: 1px solid #e2e8f0; padding: 0.5em; text-align: left; font-weight: bold; font-size: 10pt; color: #333; }
td { border: 1px solid #e2e8f0; padding: 0.5em; text-align: left; font-size: 10pt; color: #333; }
</style>";

/// Dense stylesheet: contract tables and step-by-step guides.
///
/// Everything one step smaller and tighter than [`REPORT_STYLESHEET`] so
/// wide tables fit the page; headings carry `page-break-after: avoid`
/// hints for browsers that honour print CSS.
pub const COMPACT_STYLESHEET: &str = "\
<style>
body { font-family: Arial, Helvetica, sans-serif; font-size: 10pt; line-height: 1.45; color: #333; margin: 1.5em; }
p { font-family: Arial, Helvetica, sans-serif; font-size: 10pt; color: #333; margin: 0.5em 0; }
li { font-family: Arial, Helvetica, sans-serif; font-size: 10pt; color: #333; margin: 0.2em 0; }
h1 { color: #1a365d; font-size: 20pt; border-bottom: 2px solid #3182ce; padding-bottom: 0.3em; margin-top: 1em; page-break-after: avoid; }
h2 { color: #2c5282; font-size: 14pt; margin-top: 1em; page-break-after: avoid; }
h3 { color: #2d3748; font-size: 12pt; margin-top: 0.8em; page-break-after: avoid; }
pre { background: #f7fafc; border: 1px solid #e2e8f0; padding: 0.6em; font-family: Consolas, monospace; font-size: 8pt; white-space: pre-wrap; }
code { background: #f7fafc; border: 1px solid #e2e8f0; padding: 0.2em; font-family: Consolas, monospace; font-size: 8pt; }
.codeblock { background: #f7fafc; border: 1px solid #e2e8f0; padding: 0.6em; margin: 0.6em 0; font-family: Consolas, monospace; font-size: 8pt; }
.code { font-family: Consolas, monospace; font-size: 8pt; }
.quote { border-left: 4px solid #3182ce; margin: 0.8em 0; padding-left: 1em; color: #4a5568; }
ul { margin: 0.4em 0; padding-left: 1.5em; }
ol { margin: 0.4em 0; padding-left: 1.5em; }
hr { border: none; border-top: 1px solid #cbd5e0; margin: 1em 0; }
strong { color: #1a365d; }
blockquote { border-left: 4px solid #3182ce; margin: 0.8em 0; padding-left: 1em; color: #4a5568; }
a { color: #3182ce; text-decoration: none; }
table { border-collapse: collapse; width: 100%; margin: 0.8em 0; page-break-inside: avoid; }
th { background: #edf2f7; border: 1px solid #e2e8f0; padding: 0.4em; text-align: left; font-weight: bold; font-size: 9pt; color: #333; }
td { border: 1px solid #e2e8f0; padding: 0.4em; text-align: left; font-size: 9pt; color: #333; }
</style>";

#[cfg(test)]
mod tests {
    use super::*;

    /// Guard the one-selector-per-rule discipline: a selector list sneaks
    /// past browsers silently but never matches in the PDF engine.
    #[test]
    fn no_selector_lists() {
        for sheet in [REPORT_STYLESHEET, COMPACT_STYLESHEET] {
            for line in sheet.lines() {
                if let Some(brace) = line.find('{') {
                    let selector = &line[..brace];
                    assert!(
                        !selector.contains(','),
                        "selector list found: {selector:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn sheets_are_style_elements() {
        for sheet in [REPORT_STYLESHEET, COMPACT_STYLESHEET] {
            assert!(sheet.starts_with("<style>"));
            assert!(sheet.ends_with("</style>"));
        }
    }

    #[test]
    fn renderer_classes_are_styled() {
        for sheet in [REPORT_STYLESHEET, COMPACT_STYLESHEET] {
            for class in [".codeblock", ".code", ".quote"] {
                assert!(sheet.contains(class), "missing rule for {class}");
            }
        }
    }
}
