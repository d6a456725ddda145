//! `mdtoolbox` - Markdown formatting action engine
//!
//! Applies toolbar-style formatting actions (bold, italic, headings,
//! lists, links, code fences, emoji insertion, ...) to a plain-text
//! buffer at the current selection, producing the replacement text and
//! the post-edit caret position.
//!
//! The engine itself ([`apply`]) is a pure function over
//! `(action, buffer, selection)`; [`Document`] wraps it with the live
//! buffer/selection state a rendering host needs, including the
//! two-phase buffer-then-selection handoff.

// Crate-level lint configuration
#![allow(clippy::missing_errors_doc)] // Error conditions documented on the error type
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::module_name_repetitions)] // Allow rules::Rule etc
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod action;
pub mod document;
pub mod engine;
pub mod error;
pub mod event;
pub mod rules;

// Re-export core types at crate root
pub use action::{Action, EMOJI_PREFIX, HeadingLevel};
pub use document::Document;
pub use engine::{Replacement, Selection, Transform, apply, apply_id, caret_after, resolve};
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use rules::{Lookup, Rule, Shape};
