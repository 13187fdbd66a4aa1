//! Markdown to HTML fragment conversion.
//!
//! Thin front end over pulldown-cmark. Fenced code blocks are core
//! CommonMark there; the only extension switched on is GFM tables, which
//! the documentation this toolkit exists for uses heavily.
//!
//! Heading anchors are an opt-in event-stream rewrite rather than a parser
//! option: pulldown-cmark only emits `id` attributes it parsed from the
//! source, so `{#custom-id}` style attributes stay out of scope and ids are
//! derived from the heading text itself (slugified, deduplicated with
//! `-1`, `-2`, … suffixes).

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::collections::{HashMap, HashSet};

fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options
}

/// Convert Markdown text to an HTML fragment.
///
/// The fragment has no surrounding `<html>`/`<body>`; wrapping is the
/// template stage's job. With `heading_anchors` set, every `h1`–`h6` gets
/// a slugified `id` attribute derived from its text.
pub fn to_html_fragment(markdown: &str, heading_anchors: bool) -> String {
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    if heading_anchors {
        let events: Vec<Event<'_>> = Parser::new_ext(markdown, parser_options()).collect();
        html::push_html(&mut out, inject_heading_ids(events).into_iter());
    } else {
        html::push_html(&mut out, Parser::new_ext(markdown, parser_options()));
    }
    out
}

/// Text of the first heading in the document, any level.
///
/// Used to derive a `<title>` when the caller did not supply one.
pub fn first_heading(markdown: &str) -> Option<String> {
    let mut in_heading = false;
    let mut text = String::new();

    for event in Parser::new_ext(markdown, parser_options()) {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                in_heading = true;
                text.clear();
            }
            Event::End(TagEnd::Heading(_)) if in_heading => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
                in_heading = false;
            }
            Event::Text(t) | Event::Code(t) if in_heading => text.push_str(&t),
            _ => {}
        }
    }

    None
}

/// Give every anchor-less heading a slugified, document-unique `id`.
fn inject_heading_ids(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut counters: HashMap<String, usize> = HashMap::new();
    let mut issued: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(events.len());

    let mut i = 0;
    while i < events.len() {
        if let Event::Start(Tag::Heading {
            level,
            id: None,
            classes,
            attrs,
        }) = &events[i]
        {
            // Collect the heading's text up to its end tag; the inner
            // events themselves are pushed unchanged by later iterations.
            let mut text = String::new();
            let mut j = i + 1;
            while j < events.len() {
                match &events[j] {
                    Event::End(TagEnd::Heading(_)) => break,
                    Event::Text(t) | Event::Code(t) => text.push_str(t),
                    _ => {}
                }
                j += 1;
            }

            let id = unique_slug(&text, &mut counters, &mut issued);
            out.push(Event::Start(Tag::Heading {
                level: *level,
                id: Some(CowStr::from(id)),
                classes: classes.clone(),
                attrs: attrs.clone(),
            }));
        } else {
            out.push(events[i].clone());
        }
        i += 1;
    }

    out
}

/// Issue a document-unique id for a heading's text.
///
/// Suffix counters run per base slug, and every candidate is checked
/// against the full set of ids already handed out: a literal heading such
/// as `Setup-1` can occupy a suffix before the counter reaches it.
fn unique_slug(
    text: &str,
    counters: &mut HashMap<String, usize>,
    issued: &mut HashSet<String>,
) -> String {
    let base = slug::slugify(text);
    let base = if base.is_empty() {
        "section".to_string()
    } else {
        base
    };

    let count = counters.entry(base.clone()).or_insert(0);
    let mut id = if *count == 0 {
        base.clone()
    } else {
        format!("{base}-{count}")
    };
    *count += 1;
    while !issued.insert(id.clone()) {
        id = format!("{base}-{count}");
        *count += 1;
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_code_block_becomes_pre_code() {
        let md = "```rust\nfn main() {}\n```\n";
        let html = to_html_fragment(md, false);
        assert!(html.contains("<pre><code"), "got: {html}");
        assert!(html.contains("fn main() {}"));
    }

    #[test]
    fn table_becomes_table_element() {
        let md = "| A | B |\n|---|---|\n| 1 | 2 |\n";
        let html = to_html_fragment(md, false);
        assert!(html.contains("<table>"), "got: {html}");
        assert!(html.contains("<th>A</th>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn headings_are_plain_without_anchors() {
        let html = to_html_fragment("# Title\n", false);
        assert!(html.contains("<h1>Title</h1>"), "got: {html}");
    }

    #[test]
    fn anchors_add_slugified_ids() {
        let html = to_html_fragment("## Getting Started\n", true);
        assert!(html.contains("<h2 id=\"getting-started\">"), "got: {html}");
    }

    #[test]
    fn duplicate_headings_get_numbered_ids() {
        let md = "## Setup\n\ntext\n\n## Setup\n";
        let html = to_html_fragment(md, true);
        assert!(html.contains("id=\"setup\""), "got: {html}");
        assert!(html.contains("id=\"setup-1\""), "got: {html}");
    }

    #[test]
    fn literal_suffix_heading_does_not_collide() {
        let md = "## Setup\n\n## Setup-1\n\n## Setup\n";
        let html = to_html_fragment(md, true);
        assert_eq!(html.matches("id=\"setup\"").count(), 1, "got: {html}");
        assert_eq!(html.matches("id=\"setup-1\"").count(), 1, "got: {html}");
        assert_eq!(html.matches("id=\"setup-2\"").count(), 1, "got: {html}");
    }

    #[test]
    fn counter_suffix_taken_by_earlier_heading_is_skipped() {
        let md = "## Setup\n\n## Setup\n\n## Setup-1\n";
        let html = to_html_fragment(md, true);
        assert_eq!(html.matches("id=\"setup-1\"").count(), 1, "got: {html}");
        assert!(html.contains("id=\"setup-1-1\""), "got: {html}");
    }

    #[test]
    fn anchor_slug_handles_accents_and_code() {
        let html = to_html_fragment("# Héllo `run` Wörld\n", true);
        assert!(html.contains("id=\"hello-run-world\""), "got: {html}");
    }

    #[test]
    fn symbol_only_heading_still_gets_an_id() {
        let html = to_html_fragment("# ???\n", true);
        assert!(html.contains("id=\"section\""), "got: {html}");
    }

    #[test]
    fn first_heading_returns_text() {
        let md = "intro paragraph\n\n# Ingestion Module\n\nbody\n";
        assert_eq!(first_heading(md), Some("Ingestion Module".to_string()));
    }

    #[test]
    fn first_heading_any_level() {
        assert_eq!(first_heading("### Deep Dive\n"), Some("Deep Dive".to_string()));
    }

    #[test]
    fn first_heading_none_without_headings() {
        assert_eq!(first_heading("just prose\n"), None);
    }

    #[test]
    fn first_heading_includes_inline_code() {
        assert_eq!(
            first_heading("# Using `cargo` daily\n"),
            Some("Using cargo daily".to_string())
        );
    }
}
