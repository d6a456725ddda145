//! Per-action replacement rules.
//!
//! Each catalog action maps to a small [`Rule`] record: the fallback text
//! for empty selections, the [`Shape`] of the replacement, and the caret
//! offset behavior. The `link`/`image` caret override (always `-1`, even
//! for non-empty selections, so the caret lands inside the `(url)`
//! placeholder) is the [`Rule::always_offset`] data field rather than a
//! special case in control flow.

use crate::action::Action;

/// Fixed 3-row table skeleton inserted by the `table` action.
pub const TABLE_SKELETON: &str =
    "\n| Header 1 | Header 2 |\n|----------|----------|\n| Cell 1   | Cell 2   |\n";

/// Literal inserted by the `hr` action.
pub const HORIZONTAL_RULE: &str = "\n---\n";

/// How the replacement string is built from the working text (the
/// selection, or the rule's fallback when the selection is empty).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// `{open}{text}{close}` inline wrap.
    Inline {
        open: &'static str,
        close: &'static str,
    },
    /// `{prefix}{text}{suffix}` block insertion; the prefix carries the
    /// leading newline and the suffix the trailing one.
    Block {
        prefix: &'static str,
        suffix: &'static str,
    },
    /// `{marker}{text}\n`, with a newline prepended only when the
    /// character immediately before the insertion point exists and is not
    /// already a newline. Applies to h1/h2/h3 and to no other action.
    Heading { marker: &'static str },
    /// Fixed literal, no text substitution.
    Literal(&'static str),
}

/// Rule record for one catalog action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    /// Text used in place of an empty selection.
    pub fallback: &'static str,
    pub shape: Shape,
    /// Caret adjustment when the selection was empty.
    pub empty_offset: isize,
    /// Apply `empty_offset` even for non-empty selections (link/image).
    pub always_offset: bool,
}

/// How an action resolves against the rule table.
///
/// Total over the whole action space: every catalog action yields its
/// table row, and the `emoji:` family (which has no row) yields its
/// literal for verbatim insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Catalog action with a table row.
    Rule(Rule),
    /// Verbatim literal insertion, caret offset zero.
    Verbatim(&'a str),
}

impl Rule {
    /// Look up the rule for an action.
    #[must_use]
    pub fn lookup(action: &Action) -> Lookup<'_> {
        Lookup::Rule(match action {
            Action::Emoji(literal) => return Lookup::Verbatim(literal),
            Action::Bold => Self {
                fallback: "bold text",
                shape: Shape::Inline {
                    open: "**",
                    close: "**",
                },
                empty_offset: -2,
                always_offset: false,
            },
            Action::Italic => Self {
                fallback: "italic text",
                shape: Shape::Inline {
                    open: "_",
                    close: "_",
                },
                empty_offset: -1,
                always_offset: false,
            },
            Action::Heading(level) => Self {
                fallback: level.fallback(),
                shape: Shape::Heading {
                    marker: level.marker(),
                },
                empty_offset: -1,
                always_offset: false,
            },
            Action::BulletList => Self {
                fallback: "List item",
                shape: Shape::Block {
                    prefix: "\n- ",
                    suffix: "\n",
                },
                empty_offset: -1,
                always_offset: false,
            },
            Action::NumberedList => Self {
                fallback: "List item",
                shape: Shape::Block {
                    prefix: "\n1. ",
                    suffix: "\n",
                },
                empty_offset: -1,
                always_offset: false,
            },
            Action::TaskList => Self {
                fallback: "Task item",
                shape: Shape::Block {
                    prefix: "\n- [ ] ",
                    suffix: "\n",
                },
                empty_offset: -1,
                always_offset: false,
            },
            Action::Link => Self {
                fallback: "link text",
                shape: Shape::Inline {
                    open: "[",
                    close: "](url)",
                },
                empty_offset: -1,
                always_offset: true,
            },
            Action::Image => Self {
                fallback: "alt text",
                shape: Shape::Inline {
                    open: "![",
                    close: "](url)",
                },
                empty_offset: -1,
                always_offset: true,
            },
            Action::CodeBlock => Self {
                fallback: "code",
                shape: Shape::Block {
                    prefix: "\n```\n",
                    suffix: "\n```\n",
                },
                empty_offset: -4,
                always_offset: false,
            },
            Action::Quote => Self {
                fallback: "quote",
                shape: Shape::Block {
                    prefix: "\n> ",
                    suffix: "\n",
                },
                empty_offset: -1,
                always_offset: false,
            },
            Action::Table => Self {
                fallback: "",
                shape: Shape::Literal(TABLE_SKELETON),
                empty_offset: 0,
                always_offset: false,
            },
            Action::HorizontalRule => Self {
                fallback: "",
                shape: Shape::Literal(HORIZONTAL_RULE),
                empty_offset: 0,
                always_offset: false,
            },
        })
    }
}
