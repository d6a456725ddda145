//! The action-to-replacement transform engine.
//!
//! Pure and stateless: every call is an independent transformation of
//! `(action, buffer, selection)` into a new buffer plus a caret position.
//! All offsets are character offsets, not bytes, so emoji and other
//! multi-byte scalars count as one position each.
//!
//! # Examples
//!
//! ```
//! use mdtoolbox::{Action, Selection, apply};
//!
//! let out = apply(&Action::Bold, "hello world", Selection::new(0, 5)).unwrap();
//! assert_eq!(out.buffer, "**hello** world");
//! assert_eq!(out.caret, 9);
//! ```

use crate::action::Action;
use crate::error::{Error, Result};
use crate::rules::{Lookup, Rule, Shape};

/// A selection range in character offsets. `start == end` is a caret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a selection covering `start..end`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create an empty selection (a caret) at `offset`.
    #[must_use]
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// True when the selection covers no characters.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Check the offsets against a buffer of `len` characters.
    pub fn validate(self, len: usize) -> Result<()> {
        if self.start > self.end || self.end > len {
            return Err(Error::InvalidSelection {
                start: self.start,
                end: self.end,
                len,
            });
        }
        Ok(())
    }
}

/// Resolved replacement for one action at one selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Replacement {
    /// Literal text that substitutes the selected range.
    pub text: String,
    /// Signed caret adjustment from the end of the inserted text.
    pub caret_offset: isize,
}

/// Result of a full-buffer transform.
///
/// The caret is a single position: the engine never leaves a post-edit
/// selection behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transform {
    pub buffer: String,
    pub caret: usize,
}

/// Resolve the replacement for `action` given the selected text and the
/// character immediately before the selection (`None` at buffer start).
///
/// This is the rule-application half of [`apply`]. Hosts that keep the
/// buffer in a rope can call it with a slice and splice in place instead
/// of materializing the whole buffer.
#[must_use]
pub fn resolve(action: &Action, selected: &str, prev_char: Option<char>) -> Replacement {
    let rule = match Rule::lookup(action) {
        Lookup::Verbatim(literal) => {
            return Replacement {
                text: literal.to_string(),
                caret_offset: 0,
            };
        }
        Lookup::Rule(rule) => rule,
    };

    let text = if selected.is_empty() {
        rule.fallback
    } else {
        selected
    };
    let built = match rule.shape {
        Shape::Inline { open, close } => format!("{open}{text}{close}"),
        Shape::Block { prefix, suffix } => format!("{prefix}{text}{suffix}"),
        Shape::Heading { marker } => {
            // Avoid doubling blank lines when inserting mid-line.
            let lead = if prev_char.is_some_and(|ch| ch != '\n') {
                "\n"
            } else {
                ""
            };
            format!("{lead}{marker}{text}\n")
        }
        Shape::Literal(literal) => literal.to_string(),
    };
    let caret_offset = if selected.is_empty() || rule.always_offset {
        rule.empty_offset
    } else {
        0
    };
    Replacement {
        text: built,
        caret_offset,
    }
}

/// Absolute caret position after splicing `replacement` in at character
/// offset `start`.
#[must_use]
pub fn caret_after(start: usize, replacement: &Replacement) -> usize {
    let end = start + replacement.text.chars().count();
    end.saturating_add_signed(replacement.caret_offset)
}

/// Apply `action` to `buffer` at `selection`.
///
/// Returns the new buffer with exactly the selected range replaced, and
/// the post-edit caret. Fails with [`Error::InvalidSelection`] when the
/// offsets do not satisfy `start <= end <= char length`.
pub fn apply(action: &Action, buffer: &str, selection: Selection) -> Result<Transform> {
    selection.validate(buffer.chars().count())?;

    let start_byte = char_to_byte(buffer, selection.start);
    let end_byte = char_to_byte(buffer, selection.end);
    let selected = &buffer[start_byte..end_byte];
    let prev_char = buffer[..start_byte].chars().next_back();

    let replacement = resolve(action, selected, prev_char);

    let mut out = String::with_capacity(buffer.len() + replacement.text.len());
    out.push_str(&buffer[..start_byte]);
    out.push_str(&replacement.text);
    out.push_str(&buffer[end_byte..]);

    Ok(Transform {
        buffer: out,
        caret: caret_after(selection.start, &replacement),
    })
}

/// String-identifier form of [`apply`]: the boundary an action
/// dispatcher calls with a raw wire identifier.
pub fn apply_id(id: &str, buffer: &str, selection: Selection) -> Result<Transform> {
    apply(&Action::parse(id)?, buffer, selection)
}

/// Byte index of the `offset`-th character; `s.len()` when `offset`
/// equals the character count.
fn char_to_byte(s: &str, offset: usize) -> usize {
    s.char_indices().nth(offset).map_or(s.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::HeadingLevel;

    fn run(id: &str, buffer: &str, start: usize, end: usize) -> Transform {
        apply_id(id, buffer, Selection::new(start, end)).expect(id)
    }

    #[test]
    fn test_bold_with_selection() {
        let out = run("bold", "hello world", 0, 5);
        assert_eq!(out.buffer, "**hello** world");
        assert_eq!(out.caret, 9);
    }

    #[test]
    fn test_bold_empty_selection() {
        let out = run("bold", "", 0, 0);
        assert_eq!(out.buffer, "**bold text**");
        assert_eq!(out.caret, 11);
    }

    #[test]
    fn test_italic_fallback() {
        let out = run("italic", "x", 1, 1);
        assert_eq!(out.buffer, "x_italic text_");
        assert_eq!(out.caret, 13);
    }

    #[test]
    fn test_heading_prepends_newline_mid_line() {
        let out = run("h1", "abc", 3, 3);
        assert_eq!(out.buffer, "abc\n# Heading 1\n");
        assert_eq!(out.caret, 3 + 13 - 1);
    }

    #[test]
    fn test_heading_no_newline_after_newline() {
        let out = run("h1", "abc\n", 4, 4);
        assert_eq!(out.buffer, "abc\n# Heading 1\n");
        assert_eq!(out.caret, 4 + 12 - 1);
    }

    #[test]
    fn test_heading_no_newline_at_buffer_start() {
        let out = run("h2", "", 0, 0);
        assert_eq!(out.buffer, "## Heading 2\n");
    }

    #[test]
    fn test_heading_wraps_selection() {
        let out = run("h3", "abc\ntitle", 4, 9);
        assert_eq!(out.buffer, "abc\n### title\n");
        // Non-empty selection keeps the caret at the end of the insert.
        assert_eq!(out.caret, 4 + 10);
    }

    #[test]
    fn test_heading_level_actions() {
        for (level, marker) in [
            (HeadingLevel::H1, "# "),
            (HeadingLevel::H2, "## "),
            (HeadingLevel::H3, "### "),
        ] {
            let out = apply(&Action::Heading(level), "t", Selection::new(0, 1)).unwrap();
            assert_eq!(out.buffer, format!("{marker}t\n"));
        }
    }

    #[test]
    fn test_lists() {
        assert_eq!(run("ul", "", 0, 0).buffer, "\n- List item\n");
        assert_eq!(run("ol", "", 0, 0).buffer, "\n1. List item\n");
        assert_eq!(run("task", "", 0, 0).buffer, "\n- [ ] Task item\n");
        assert_eq!(run("ul", "item", 0, 4).buffer, "\n- item\n");
    }

    #[test]
    fn test_link_caret_override_with_selection() {
        let out = run("link", "see docs", 4, 8);
        assert_eq!(out.buffer, "see [docs](url)");
        assert_eq!(out.caret, 4 + 11 - 1);
    }

    #[test]
    fn test_image_caret_override() {
        let out = run("image", "logo", 0, 4);
        assert_eq!(out.buffer, "![logo](url)");
        assert_eq!(out.caret, 12 - 1);

        let out = run("image", "", 0, 0);
        assert_eq!(out.buffer, "![alt text](url)");
        assert_eq!(out.caret, 16 - 1);
    }

    #[test]
    fn test_code_block() {
        let out = run("code", "", 0, 0);
        assert_eq!(out.buffer, "\n```\ncode\n```\n");
        assert_eq!(out.caret, 14 - 4);

        let out = run("code", "let x = 1;", 0, 10);
        assert_eq!(out.buffer, "\n```\nlet x = 1;\n```\n");
        assert_eq!(out.caret, out.buffer.chars().count());
    }

    #[test]
    fn test_quote() {
        let out = run("quote", "wisdom", 0, 6);
        assert_eq!(out.buffer, "\n> wisdom\n");
    }

    #[test]
    fn test_table_ignores_selection_text() {
        let out = run("table", "abc", 0, 3);
        assert_eq!(
            out.buffer,
            "\n| Header 1 | Header 2 |\n|----------|----------|\n| Cell 1   | Cell 2   |\n"
        );
        assert_eq!(out.caret, out.buffer.chars().count());
    }

    #[test]
    fn test_hr() {
        let out = run("hr", "ab", 1, 1);
        assert_eq!(out.buffer, "a\n---\nb");
        assert_eq!(out.caret, 1 + 5);
    }

    #[test]
    fn test_emoji_insertion_char_offsets() {
        let out = run("emoji:🙂", "hi ", 3, 3);
        assert_eq!(out.buffer, "hi 🙂");
        assert_eq!(out.caret, 4);
    }

    #[test]
    fn test_emoji_replaces_selection() {
        let out = run("emoji:👍", "yes", 0, 3);
        assert_eq!(out.buffer, "👍");
        assert_eq!(out.caret, 1);
    }

    #[test]
    fn test_multibyte_prefix_offsets() {
        // "héllo" selects "llo" by char offsets, not bytes.
        let out = run("bold", "héllo", 2, 5);
        assert_eq!(out.buffer, "hé**llo**");
        assert_eq!(out.caret, 2 + 7);
    }

    #[test]
    fn test_invalid_selection_rejected() {
        let action = Action::Bold;
        let err = apply(&action, "abc", Selection::new(2, 1)).unwrap_err();
        assert!(matches!(err, Error::InvalidSelection { .. }));

        let err = apply(&action, "abc", Selection::new(0, 4)).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidSelection {
                start: 0,
                end: 4,
                len: 3
            }
        );
    }

    #[test]
    fn test_prefix_and_suffix_preserved() {
        let out = run("quote", "pre MID post", 4, 7);
        assert!(out.buffer.starts_with("pre "));
        assert!(out.buffer.ends_with(" post"));
    }

    #[test]
    fn test_resolve_without_buffer() {
        let rep = resolve(&Action::Bold, "x", Some('a'));
        assert_eq!(rep.text, "**x**");
        assert_eq!(rep.caret_offset, 0);

        let rep = resolve(&Action::Heading(HeadingLevel::H1), "", Some('\n'));
        assert_eq!(rep.text, "# Heading 1\n");
        assert_eq!(rep.caret_offset, -1);
    }
}
