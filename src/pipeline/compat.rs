//! Renderer compatibility: literal substitutions applied to HTML before it
//! reaches the PDF engine.
//!
//! ## Why is this pass necessary?
//!
//! The documents this toolkit consumes are written for browsers, and the
//! PDF engine supports a narrower slice of the web platform:
//!
//! - No network access, so `<link>`s to hosted web fonts resolve to
//!   nothing and slow some HTML tooling down with retries
//! - No CSS custom properties: `:root { --color-bg: … }` declarations and
//!   `var(--color-bg)` references pass through as unparseable values
//! - Web-font stacks (`'Source Sans 3'`, `'Source Code Pro'`) name fonts
//!   the embedded fallbacks cannot provide
//! - A handful of elements (`pre`, `code`, `blockquote`, the
//!   `thead`/`tbody`/`tfoot` table sections) are outside its renderable
//!   set, and it drops unsupported elements *together with their children*
//!
//! This module applies cheap, deterministic regex/string rules that route
//! the markup around those gaps without touching content. Each rule is a
//! pure function and independently testable. The `.html` inspection
//! artifact is written before this pass runs, so browsers still see the
//! original markup.
//!
//! ## Rule Order
//!
//! Font links go first so later rules never see their attributes; `:root`
//! blocks before variable resolution so removed declarations cannot leave
//! orphan values; tag rewriting last, once the text is otherwise final.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Apply all renderer-compatibility rules to an HTML document.
///
/// Runs 5 deterministic passes in a defined order. Each pass is a pure
/// function (`&str → String`) with no shared state, and the whole pipeline
/// is idempotent: running it on its own output changes nothing.
///
/// Rules (applied in order):
/// 1. Strip `<link>` elements referencing hosted font services
/// 2. Remove `:root { … }` declaration blocks
/// 3. Replace recognized `var(--color-*)` tokens with literal colors
/// 4. Swap web-font family stacks for renderer-safe ones
/// 5. Rewrite unsupported elements to styled equivalents the engine keeps
pub fn prepare_for_renderer(input: &str) -> String {
    let s = strip_web_font_links(input);
    let s = strip_root_blocks(&s);
    let s = resolve_css_variables(&s);
    let s = swap_font_stacks(&s);
    rewrite_unsupported_tags(&s)
}

// ── Rule 1: Strip hosted-font links ──────────────────────────────────────────

static RE_FONT_LINK_GOOGLEAPIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<link[^>]*fonts\.googleapis\.com[^>]*>").unwrap());
static RE_FONT_LINK_GSTATIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<link[^>]*fonts\.gstatic\.com[^>]*>").unwrap());

fn strip_web_font_links(input: &str) -> String {
    let s = RE_FONT_LINK_GOOGLEAPIS.replace_all(input, "");
    RE_FONT_LINK_GSTATIC.replace_all(&s, "").to_string()
}

// ── Rule 2: Remove :root declaration blocks ──────────────────────────────────

static RE_ROOT_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r":root\s*\{[^}]*\}").unwrap());

fn strip_root_blocks(input: &str) -> String {
    RE_ROOT_BLOCK.replace_all(input, "").to_string()
}

// ── Rule 3: Resolve CSS custom-property references ───────────────────────────

/// The custom-property palette the source documents use, with the literal
/// value each token resolves to.
const CSS_VARIABLE_COLORS: [(&str, &str); 12] = [
    ("var(--color-bg)", "#f8fafc"),
    ("var(--color-surface)", "#ffffff"),
    ("var(--color-text)", "#1e293b"),
    ("var(--color-text-muted)", "#64748b"),
    ("var(--color-primary)", "#0f766e"),
    ("var(--color-primary-light)", "#ccfbf1"),
    ("var(--color-accent)", "#0369a1"),
    ("var(--color-border)", "#e2e8f0"),
    ("var(--color-code-bg)", "#f1f5f9"),
    ("var(--color-success)", "#059669"),
    ("var(--color-warning)", "#d97706"),
    ("var(--color-error)", "#dc2626"),
];

fn resolve_css_variables(input: &str) -> String {
    let mut s = input.to_string();
    for (token, literal) in CSS_VARIABLE_COLORS {
        s = s.replace(token, literal);
    }

    // Tokens outside the palette are left in place; the engine ignores the
    // declaration and falls back to its defaults for that property.
    let leftover = s.matches("var(--").count();
    if leftover > 0 {
        debug!("{leftover} unrecognised var() tokens left in place");
    }

    s
}

// ── Rule 4: Swap web-font stacks ─────────────────────────────────────────────

const FONT_STACK_SWAPS: [(&str, &str); 2] = [
    ("'Source Sans 3', -apple-system", "Arial, Helvetica, sans-serif"),
    ("'Source Code Pro', 'Consolas'", "Consolas, monospace"),
];

fn swap_font_stacks(input: &str) -> String {
    let mut s = input.to_string();
    for (from, to) in FONT_STACK_SWAPS {
        s = s.replace(from, to);
    }
    s
}

// ── Rule 5: Rewrite unsupported elements ─────────────────────────────────────
//
// The engine's renderable set is div, p, h1–h6, span, img, a, ul, ol, li,
// table, tr, td, th, hr, br, strong, em, b, i. Anything else is dropped
// with its children, which would silently delete code blocks and quotes.
// Rewrites preserve nesting: `<pre><code>…</code></pre>` becomes
// `<div class="codeblock"><span class="code">…</span></div>`, and the
// embedded stylesheets carry rules for the three classes.

static RE_PRE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<pre\b[^>]*>").unwrap());
static RE_CODE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<code\b[^>]*>").unwrap());
static RE_BLOCKQUOTE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<blockquote\b[^>]*>").unwrap());
static RE_TABLE_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?(?:thead|tbody|tfoot)\b[^>]*>").unwrap());

fn rewrite_unsupported_tags(input: &str) -> String {
    let s = RE_PRE_OPEN.replace_all(input, "<div class=\"codeblock\">");
    let s = s.replace("</pre>", "</div>");
    let s = RE_CODE_OPEN.replace_all(&s, "<span class=\"code\">");
    let s = s.replace("</code>", "</span>");
    let s = RE_BLOCKQUOTE_OPEN.replace_all(&s, "<div class=\"quote\">");
    let s = s.replace("</blockquote>", "</div>");
    RE_TABLE_SECTION.replace_all(&s, "").to_string()
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_googleapis_links() {
        let input = r#"<head><link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Source+Sans+3"><title>x</title></head>"#;
        let result = strip_web_font_links(input);
        assert!(!result.contains("fonts.googleapis.com"));
        assert!(result.contains("<title>x</title>"));
    }

    #[test]
    fn strips_gstatic_preconnect() {
        let input = r#"<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>"#;
        assert_eq!(strip_web_font_links(input), "");
    }

    #[test]
    fn keeps_unrelated_links() {
        let input = r#"<link rel="icon" href="favicon.ico">"#;
        assert_eq!(strip_web_font_links(input), input);
    }

    #[test]
    fn removes_root_block() {
        let input = "<style>\n:root {\n  --color-bg: #f8fafc;\n  --color-text: #1e293b;\n}\nbody { margin: 0; }\n</style>";
        let result = strip_root_blocks(input);
        assert!(!result.contains(":root"));
        assert!(!result.contains("--color-bg:"));
        assert!(result.contains("body { margin: 0; }"));
    }

    #[test]
    fn resolves_known_variables() {
        let input = "body { background: var(--color-bg); color: var(--color-text); }";
        let result = resolve_css_variables(input);
        assert_eq!(result, "body { background: #f8fafc; color: #1e293b; }");
    }

    #[test]
    fn resolves_every_palette_token() {
        let mut input = String::new();
        for (token, _) in CSS_VARIABLE_COLORS {
            input.push_str(token);
            input.push(' ');
        }
        let result = resolve_css_variables(&input);
        assert!(!result.contains("var(--"), "got: {result}");
        assert!(result.contains("#0f766e"));
        assert!(result.contains("#dc2626"));
    }

    #[test]
    fn leaves_unknown_variables() {
        let input = "h1 { color: var(--brand-ink); }";
        assert_eq!(resolve_css_variables(input), input);
    }

    #[test]
    fn swaps_both_font_stacks() {
        let input = "body { font-family: 'Source Sans 3', -apple-system; }\npre { font-family: 'Source Code Pro', 'Consolas'; }";
        let result = swap_font_stacks(input);
        assert!(result.contains("Arial, Helvetica, sans-serif"));
        assert!(result.contains("Consolas, monospace"));
        assert!(!result.contains("Source Sans 3"));
        assert!(!result.contains("Source Code Pro"));
    }

    #[test]
    fn rewrites_fenced_code_markup() {
        let input = "<pre><code class=\"language-rust\">fn main() {}\n</code></pre>";
        let result = rewrite_unsupported_tags(input);
        assert_eq!(
            result,
            "<div class=\"codeblock\"><span class=\"code\">fn main() {}\n</span></div>"
        );
    }

    #[test]
    fn rewrites_inline_code() {
        let input = "<p>run <code>cargo test</code> first</p>";
        let result = rewrite_unsupported_tags(input);
        assert_eq!(
            result,
            "<p>run <span class=\"code\">cargo test</span> first</p>"
        );
    }

    #[test]
    fn rewrites_blockquote() {
        let input = "<blockquote>\n<p>note</p>\n</blockquote>";
        let result = rewrite_unsupported_tags(input);
        assert_eq!(result, "<div class=\"quote\">\n<p>note</p>\n</div>");
    }

    #[test]
    fn unwraps_table_sections_keeping_rows() {
        let input =
            "<table><thead><tr><th>A</th></tr></thead><tbody><tr><td>1</td></tr></tbody></table>";
        let result = rewrite_unsupported_tags(input);
        assert_eq!(result, "<table><tr><th>A</th></tr><tr><td>1</td></tr></table>");
    }

    #[test]
    fn full_pass_on_realistic_document() {
        let input = r#"<!DOCTYPE html>
<html><head>
<link href="https://fonts.googleapis.com/css2?family=Source+Sans+3" rel="stylesheet">
<style>
:root { --color-bg: #f8fafc; }
body { background: var(--color-bg); font-family: 'Source Sans 3', -apple-system; }
</style>
</head><body>
<blockquote><p>quoted</p></blockquote>
<pre><code>let x = 1;</code></pre>
<table><thead><tr><th>H</th></tr></thead><tbody><tr><td>v</td></tr></tbody></table>
</body></html>"#;

        let result = prepare_for_renderer(input);

        assert!(!result.contains("fonts.googleapis.com"));
        assert!(!result.contains(":root"));
        assert!(!result.contains("var(--color-bg)"));
        assert!(result.contains("background: #f8fafc"));
        assert!(result.contains("Arial, Helvetica, sans-serif"));
        assert!(!result.contains("<pre>"));
        assert!(!result.contains("<thead>"));
        assert!(result.contains("class=\"codeblock\""));
        assert!(result.contains("<tr><th>H</th></tr>"));
        assert!(result.contains("quoted"));
        assert!(result.contains("let x = 1;"));
    }

    #[test]
    fn pass_is_idempotent() {
        let input = "<pre><code>x</code></pre><p>var(--color-bg)</p>";
        let once = prepare_for_renderer(input);
        let twice = prepare_for_renderer(&once);
        assert_eq!(once, twice);
    }
}
