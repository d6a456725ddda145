//! Action identifiers: the wire format between the toolbox and the engine.
//!
//! The catalog is closed and stable. A toolbox affordance (button, emoji
//! picker entry) emits one of these identifiers as a string; [`Action::parse`]
//! is the sole boundary that turns that string into a typed action. Adding
//! an action means adding a variant and a rule table row, never changing
//! the meaning of an existing identifier.

use std::fmt;

use crate::error::{Error, Result};

/// Prefix for the open `emoji:<literal>` identifier family.
pub const EMOJI_PREFIX: &str = "emoji:";

/// Heading level for the `h1`/`h2`/`h3` actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Numeric level (1 to 3).
    #[must_use]
    pub fn level(self) -> usize {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
        }
    }

    /// Markdown marker including the trailing space.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::H1 => "# ",
            Self::H2 => "## ",
            Self::H3 => "### ",
        }
    }

    /// Placeholder text used when the selection is empty.
    #[must_use]
    pub fn fallback(self) -> &'static str {
        match self {
            Self::H1 => "Heading 1",
            Self::H2 => "Heading 2",
            Self::H3 => "Heading 3",
        }
    }
}

/// A formatting action selected by the user.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Bold,
    Italic,
    Heading(HeadingLevel),
    BulletList,
    NumberedList,
    TaskList,
    Link,
    Image,
    CodeBlock,
    Quote,
    Table,
    HorizontalRule,
    /// Verbatim insertion of an arbitrary literal (the emoji picker).
    Emoji(String),
}

impl Action {
    /// The fixed identifier catalog in toolbox order. The `emoji:` family
    /// is open-ended and not listed.
    pub const CATALOG: [&'static str; 14] = [
        "bold", "italic", "h1", "h2", "h3", "ul", "ol", "task", "link", "image", "code", "quote",
        "table", "hr",
    ];

    /// Parse a wire identifier.
    ///
    /// `emoji:<literal>` takes the rest of the identifier verbatim, so any
    /// payload (including an empty one) is accepted. Anything else must be
    /// a catalog identifier or the parse fails with
    /// [`Error::UnknownAction`].
    pub fn parse(id: &str) -> Result<Self> {
        if let Some(literal) = id.strip_prefix(EMOJI_PREFIX) {
            return Ok(Self::Emoji(literal.to_string()));
        }
        Ok(match id {
            "bold" => Self::Bold,
            "italic" => Self::Italic,
            "h1" => Self::Heading(HeadingLevel::H1),
            "h2" => Self::Heading(HeadingLevel::H2),
            "h3" => Self::Heading(HeadingLevel::H3),
            "ul" => Self::BulletList,
            "ol" => Self::NumberedList,
            "task" => Self::TaskList,
            "link" => Self::Link,
            "image" => Self::Image,
            "code" => Self::CodeBlock,
            "quote" => Self::Quote,
            "table" => Self::Table,
            "hr" => Self::HorizontalRule,
            _ => return Err(Error::UnknownAction(id.to_string())),
        })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bold => f.write_str("bold"),
            Self::Italic => f.write_str("italic"),
            Self::Heading(level) => write!(f, "h{}", level.level()),
            Self::BulletList => f.write_str("ul"),
            Self::NumberedList => f.write_str("ol"),
            Self::TaskList => f.write_str("task"),
            Self::Link => f.write_str("link"),
            Self::Image => f.write_str("image"),
            Self::CodeBlock => f.write_str("code"),
            Self::Quote => f.write_str("quote"),
            Self::Table => f.write_str("table"),
            Self::HorizontalRule => f.write_str("hr"),
            Self::Emoji(literal) => write!(f, "{EMOJI_PREFIX}{literal}"),
        }
    }
}
