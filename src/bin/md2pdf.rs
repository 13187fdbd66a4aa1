//! CLI binary for docpdf: Markdown in, PDF out.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `RenderConfig` and prints the created file paths.

use anyhow::{Context, Result};
use clap::Parser;
use docpdf::{convert_markdown_file, PaperSize, RenderConfig, Theme};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert a document (writes notes.html and notes.pdf next to it)
  md2pdf notes.md

  # Compact layout on Letter paper
  md2pdf --theme compact --paper letter api_contracts.md

  # Explicit title instead of the first heading
  md2pdf --title "Claims API Contracts" api_contracts.md

  # PDF only, skip the intermediate HTML
  md2pdf --no-html onboarding_guide.md

  # Slugified id attributes on headings (for anchor links)
  md2pdf --anchors handbook.md

  # Machine-readable result
  md2pdf --json notes.md

OUTPUT:
  Files are written next to the input: <stem>.html (unless --no-html)
  and <stem>.pdf. Existing files are overwritten.

ENVIRONMENT VARIABLES:
  MD2PDF_TITLE     Override the document title
  MD2PDF_THEME     Page theme: report, compact
  MD2PDF_PAPER     Paper size: a4, letter
  MD2PDF_NO_HTML   Skip the intermediate HTML artifact
  MD2PDF_ANCHORS   Add slug ids to headings
  MD2PDF_JSON      Print the outcome as JSON
  MD2PDF_VERBOSE   Debug-level logs
  MD2PDF_QUIET     Errors only
"#;

/// Convert a Markdown document to a styled PDF.
#[derive(Parser, Debug)]
#[command(
    name = "md2pdf",
    version,
    about = "Convert a Markdown document to a styled PDF",
    long_about = "Convert a Markdown document to PDF. The source is parsed with tables and \
fenced code enabled, wrapped in a self-contained HTML page carrying the selected theme's \
stylesheet, written next to the source as <stem>.html for inspection, then rendered to \
<stem>.pdf with the embedded PDF engine. No browser or network access is involved.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Markdown file to convert.
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Document title (default: first heading, then the file stem).
    #[arg(long, env = "MD2PDF_TITLE")]
    title: Option<String>,

    /// Page theme.
    #[arg(long, env = "MD2PDF_THEME", value_enum, default_value = "report")]
    theme: ThemeArg,

    /// Paper size.
    #[arg(long, env = "MD2PDF_PAPER", value_enum, default_value = "a4")]
    paper: PaperArg,

    /// Skip writing the intermediate <stem>.html next to the source.
    #[arg(long, env = "MD2PDF_NO_HTML")]
    no_html: bool,

    /// Add slugified id attributes to headings.
    #[arg(long, env = "MD2PDF_ANCHORS")]
    anchors: bool,

    /// Print the outcome (paths + stats) as JSON instead of text.
    #[arg(long, env = "MD2PDF_JSON")]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "MD2PDF_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "MD2PDF_QUIET")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum ThemeArg {
    Report,
    Compact,
}

impl From<ThemeArg> for Theme {
    fn from(v: ThemeArg) -> Self {
        match v {
            ThemeArg::Report => Theme::Report,
            ThemeArg::Compact => Theme::Compact,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum PaperArg {
    A4,
    Letter,
}

impl From<PaperArg> for PaperSize {
    fn from(v: PaperArg) -> Self {
        match v {
            PaperArg::A4 => PaperSize::A4,
            PaperArg::Letter => PaperSize::Letter,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // The created-file lines on stdout are the default feedback; library
    // INFO logs only appear with --verbose. Engine warnings still surface.
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let mut builder = RenderConfig::builder()
        .theme(cli.theme.clone().into())
        .paper(cli.paper.clone().into())
        .write_html(!cli.no_html)
        .heading_anchors(cli.anchors);
    if let Some(ref title) = cli.title {
        builder = builder.title(title);
    }
    let config = builder.build().context("Invalid configuration")?;

    // ── Run conversion ───────────────────────────────────────────────────
    let outcome = convert_markdown_file(&cli.input, &config)?;

    if cli.json {
        let json =
            serde_json::to_string_pretty(&outcome).context("Failed to serialise outcome")?;
        println!("{json}");
        return Ok(());
    }

    if let Some(ref html_path) = outcome.html_path {
        println!("HTML created: {}", bold(&html_path.display().to_string()));
    }
    println!("PDF created: {}", bold(&outcome.pdf_path.display().to_string()));

    if !cli.quiet {
        eprintln!(
            "{} {}",
            green("✔"),
            dim(&format!(
                "{} bytes in {}ms",
                outcome.stats.pdf_bytes, outcome.stats.duration_ms
            ))
        );
        if outcome.stats.renderer_warnings > 0 {
            eprintln!(
                "{} engine reported {} warnings (-v for details)",
                cyan("⚠"),
                outcome.stats.renderer_warnings
            );
        }
    }

    Ok(())
}
