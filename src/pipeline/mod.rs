//! Pipeline stages for document-to-PDF conversion.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. switch the PDF engine) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ markdown ──▶ template ──▶ compat ──▶ render
//! (path)    (fragment)   (document)   (subst)    (PDF bytes)
//! ```
//!
//! 1. [`input`]    verifies the path and reads the document text
//! 2. [`markdown`] turns Markdown text into an HTML fragment (skipped for
//!    HTML inputs, which enter the pipeline at the compat stage)
//! 3. [`template`] wraps the fragment in the fixed document shell with an
//!    embedded stylesheet; this is what the `.html` artifact contains
//! 4. [`compat`]   applies literal substitutions that route the markup
//!    around PDF-engine feature gaps (web fonts, CSS variables,
//!    unsupported tags)
//! 5. [`render`]   drives the PDF engine and collects its warnings

pub mod compat;
pub mod input;
pub mod markdown;
pub mod render;
pub mod template;
