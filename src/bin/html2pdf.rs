//! CLI binary for docpdf: HTML in, PDF out.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `RenderConfig` and prints the created file path.

use anyhow::{Context, Result};
use clap::Parser;
use docpdf::{convert_html_file, PaperSize, RenderConfig};
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
  # Render a page (writes architecture.pdf next to it)
  html2pdf architecture.html

  # Letter paper
  html2pdf --paper letter claims_flowchart.html

  # Machine-readable result
  html2pdf --json architecture.html

COMPAT RULES (applied before rendering):
  - Remove Google Fonts <link> tags (rendering is offline)
  - Drop :root blocks and replace var(--color-*) tokens with literal colors
  - Swap web font stacks for engine-safe families (Arial, Consolas)
  - Rewrite <pre>/<code>/<blockquote> into styled div/span equivalents
  - Unwrap <thead>/<tbody>/<tfoot> so table rows keep their content

ENVIRONMENT VARIABLES:
  HTML2PDF_PAPER    Paper size: a4, letter
  HTML2PDF_JSON     Print the outcome as JSON
  HTML2PDF_VERBOSE  Debug-level logs
  HTML2PDF_QUIET    Errors only
"#;

/// Render an HTML document to PDF.
#[derive(Parser, Debug)]
#[command(
    name = "html2pdf",
    version,
    about = "Render an HTML document to PDF",
    long_about = "Render an HTML document to PDF with the embedded engine. The document is \
adjusted for the engine's HTML and CSS subset first: web font links are removed, stylesheet \
variables become literal colors, and elements the engine would discard are rewritten into \
styled equivalents. The PDF is written next to the source as <stem>.pdf.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// HTML file to render.
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Paper size.
    #[arg(long, env = "HTML2PDF_PAPER", value_enum, default_value = "a4")]
    paper: PaperArg,

    /// Print the outcome (path + stats) as JSON instead of text.
    #[arg(long, env = "HTML2PDF_JSON")]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "HTML2PDF_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "HTML2PDF_QUIET")]
    quiet: bool,
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
    // The created-file line on stdout is the default feedback; library
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
    let config = RenderConfig::builder()
        .paper(cli.paper.clone().into())
        .build()
        .context("Invalid configuration")?;

    // ── Run conversion ───────────────────────────────────────────────────
    let outcome = convert_html_file(&cli.input, &config)?;

    if cli.json {
        let json =
            serde_json::to_string_pretty(&outcome).context("Failed to serialise outcome")?;
        println!("{json}");
        return Ok(());
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
