//! Buffer host: live document state with two-phase action application.
//!
//! [`Document`] owns the editable buffer (a rope) and the current
//! selection. Applying an action is split in two phases:
//!
//! 1. [`Document::apply`] splices the replacement into the buffer and
//!    records the computed caret as *pending*. The live selection does
//!    not move yet.
//! 2. [`Document::sync_selection`] promotes the pending caret to the
//!    live selection.
//!
//! The split exists because a rendering surface must redraw with the new
//! buffer before a selection against it can be legally set; the host
//! calls phase two after its redraw completes. Any selection or text
//! change between the phases drops the pending caret.
//!
//! # Examples
//!
//! ```
//! use mdtoolbox::{Action, Document, Selection};
//!
//! let mut doc = Document::with_text("hello world");
//! doc.set_selection(Selection::new(0, 5)).unwrap();
//!
//! let caret = doc.apply(&Action::Bold).unwrap();
//! assert_eq!(doc.text(), "**hello** world");
//! assert_eq!(doc.selection(), Selection::new(0, 5)); // not yet moved
//!
//! assert!(doc.sync_selection());
//! assert_eq!(doc.selection(), Selection::caret(caret));
//! ```

use ropey::Rope;

use crate::action::Action;
use crate::engine::{self, Selection};
use crate::error::Result;
use crate::event::{LogLevel, emit_event, emit_log};

/// Live buffer plus selection state, the host side of the engine contract.
#[derive(Clone, Debug, Default)]
pub struct Document {
    rope: Rope,
    selection: Selection,
    pending_caret: Option<usize>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with initial text, selection at the start.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selection: Selection::default(),
            pending_caret: None,
        }
    }

    /// Full buffer content.
    #[must_use]
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// The underlying rope.
    #[must_use]
    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Buffer length in characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// The live selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Caret recorded by phase one and not yet promoted, if any.
    #[must_use]
    pub fn pending_caret(&self) -> Option<usize> {
        self.pending_caret
    }

    /// Replace the entire text, resetting selection and pending state.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.selection = Selection::default();
        self.pending_caret = None;
    }

    /// Set the live selection.
    ///
    /// Rejects offsets outside the buffer. A selection change between the
    /// two apply phases drops the pending caret, since it was computed
    /// against a selection that no longer holds.
    pub fn set_selection(&mut self, selection: Selection) -> Result<()> {
        selection.validate(self.rope.len_chars())?;
        self.selection = selection;
        self.pending_caret = None;
        Ok(())
    }

    /// Phase one: apply `action` at the current selection.
    ///
    /// Splices the replacement into the buffer and records the post-edit
    /// caret as pending. Returns that caret so the host can scroll to it;
    /// the live selection moves only on [`sync_selection`](Self::sync_selection).
    ///
    /// The live selection is re-validated first: after a shrinking apply
    /// it can be out of range until phase two promotes the pending caret,
    /// and applying again in that window fails with
    /// [`Error::InvalidSelection`](crate::Error::InvalidSelection) instead
    /// of touching the buffer.
    pub fn apply(&mut self, action: &Action) -> Result<usize> {
        self.selection
            .validate(self.rope.len_chars())
            .inspect_err(|err| emit_log(LogLevel::Warn, &err.to_string()))?;

        let Selection { start, end } = self.selection;
        let selected = self.rope.slice(start..end).to_string();
        let prev_char = (start > 0).then(|| self.rope.char(start - 1));

        let replacement = engine::resolve(action, &selected, prev_char);
        self.rope.remove(start..end);
        self.rope.insert(start, &replacement.text);

        let caret = engine::caret_after(start, &replacement);
        self.pending_caret = Some(caret);
        emit_event("action:applied", &action.to_string());
        Ok(caret)
    }

    /// Apply an action given its wire identifier.
    ///
    /// This is the dispatcher boundary: unknown identifiers are rejected
    /// with [`Error::UnknownAction`](crate::Error::UnknownAction) and
    /// logged, and the buffer is left untouched.
    pub fn apply_id(&mut self, id: &str) -> Result<usize> {
        let action = Action::parse(id).inspect_err(|err| {
            emit_log(LogLevel::Warn, &err.to_string());
        })?;
        self.apply(&action)
    }

    /// Phase two: promote the pending caret to the live selection.
    ///
    /// Returns `true` when a pending caret was promoted; `false` when
    /// nothing was pending (the call is then a no-op).
    pub fn sync_selection(&mut self) -> bool {
        match self.pending_caret.take() {
            Some(caret) => {
                self.selection = Selection::caret(caret);
                true
            }
            None => false,
        }
    }
}
