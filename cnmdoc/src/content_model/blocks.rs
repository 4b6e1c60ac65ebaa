//! Content block variants
//!
//! This module defines the closed set of block kinds that make up a CNM
//! content tree, plus the contents sub-variants scoped to text blocks.

use super::formatted_text::FormattedText;

/// A node in the CNM content tree
///
/// Every block carries a name and an ordered list of string arguments,
/// regardless of its kind. Kind-specific fields, and child blocks for the
/// container kinds, live in [`BlockKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Block identifier as written in the source document (may be empty)
    pub name: String,

    /// Ordered positional arguments
    pub args: Vec<String>,

    /// Kind-specific payload
    pub kind: BlockKind,
}

/// The closed set of block kinds
///
/// Child blocks are stored inside the container kinds only, so a leaf kind
/// cannot carry children by construction. `Unknown` is not a content kind:
/// it preserves a tag this consumer does not recognize (producer/consumer
/// version skew) so the renderer can report it instead of guessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// Generic content grouping
    Content {
        /// Child blocks in document order
        children: Vec<Block>,
    },

    /// Embedded external media
    Embed {
        /// Location of the embedded resource
        url: String,
        /// Human-readable description of the resource
        description: String,
        /// Media type of the resource (e.g. "image/png")
        media_type: String,
    },

    /// Table header row
    Header {
        /// Header cells in column order
        children: Vec<Block>,
    },

    /// An ordered or unordered list
    List {
        /// Whether item order is significant for presentation
        ordered: bool,
        /// List items in document order
        children: Vec<Block>,
    },

    /// Raw text passed through verbatim
    Raw {
        /// Syntax tag for the raw payload (e.g. "c", "sh")
        syntax: String,
        /// Raw text payload
        text: String,
    },

    /// Table data row
    Row {
        /// Row cells in column order
        children: Vec<Block>,
    },

    /// A titled document section
    Section {
        /// Section title
        title: String,
        /// Section contents in document order
        children: Vec<Block>,
    },

    /// A table
    Table {
        /// Header and data rows in document order
        children: Vec<Block>,
    },

    /// Text with a format tag and tagged contents
    Text {
        /// Format tag as emitted by the producer
        format: String,
        /// The populated contents sub-variant
        contents: TextContents,
    },

    /// A kind tag outside the known set
    Unknown {
        /// The unrecognized tag, preserved for diagnostics
        tag: String,
    },
}

/// Contents of a text block
///
/// Exactly one representation exists per text block; the enum makes a
/// second, conflicting representation unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextContents {
    /// Structured inline markup
    Formatted(FormattedText),

    /// Plain paragraphs, in document order
    Plain {
        /// Paragraph strings
        paragraphs: Vec<String>,
    },

    /// A single whitespace-significant text blob
    Preformatted {
        /// The raw text
        text: String,
    },
}

impl Block {
    /// Create a block with the given name, arguments, and kind
    pub fn new(name: impl Into<String>, args: Vec<String>, kind: BlockKind) -> Self {
        Self {
            name: name.into(),
            args,
            kind,
        }
    }

    /// Canonical tag string for this block's kind
    ///
    /// For `Unknown` this is the preserved foreign tag.
    pub fn tag(&self) -> &str {
        match &self.kind {
            BlockKind::Content { .. } => "content",
            BlockKind::Embed { .. } => "embed",
            BlockKind::Header { .. } => "header",
            BlockKind::List { .. } => "list",
            BlockKind::Raw { .. } => "raw",
            BlockKind::Row { .. } => "row",
            BlockKind::Section { .. } => "section",
            BlockKind::Table { .. } => "table",
            BlockKind::Text { .. } => "text",
            BlockKind::Unknown { tag } => tag,
        }
    }

    /// Child blocks, if this block's kind is a container
    ///
    /// # Returns
    /// * `Some(children)` - This kind holds children; the slice may be empty
    /// * `None` - This kind has no container capability at all
    pub fn children(&self) -> Option<&[Block]> {
        match &self.kind {
            BlockKind::Content { children }
            | BlockKind::Header { children }
            | BlockKind::List { children, .. }
            | BlockKind::Row { children }
            | BlockKind::Section { children, .. }
            | BlockKind::Table { children } => Some(children),
            BlockKind::Embed { .. }
            | BlockKind::Raw { .. }
            | BlockKind::Text { .. }
            | BlockKind::Unknown { .. } => None,
        }
    }

    /// Whether this block's kind can hold child blocks
    pub fn is_container(&self) -> bool {
        self.children().is_some()
    }
}

impl TextContents {
    /// Canonical tag for the populated contents variant
    pub fn tag(&self) -> &'static str {
        match self {
            TextContents::Formatted(_) => "formatted",
            TextContents::Plain { .. } => "plain",
            TextContents::Preformatted { .. } => "preformatted",
        }
    }
}
