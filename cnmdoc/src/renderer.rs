//! Rendering traversal over the content tree
//!
//! This module walks a document's content tree in preorder and produces one
//! rendering record per visited block. Dispatch over block kinds is
//! exhaustive: every known kind maps to an explicit rendering rule, and a
//! tag outside the known set aborts the walk with an error naming the tag
//! instead of guessing a rendering.

use crate::content_model::{Block, BlockKind, TextContents};
use thiserror::Error;

/// Maximum nesting depth accepted by the renderer
///
/// Documents nested deeper than this are reported as an error rather than
/// being allowed to exhaust the call stack.
pub const MAX_RENDER_DEPTH: usize = 128;

/// Errors that abort a rendering traversal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A block carried a kind tag outside the known set
    #[error("unknown block tag '{tag}'")]
    UnknownBlockTag {
        /// The unrecognized tag
        tag: String,
    },

    /// A text block carried a format tag outside the known set
    #[error("unknown text format tag '{format}'")]
    UnknownTextFormat {
        /// The unrecognized format tag
        format: String,
    },

    /// A text block's format tag disagrees with its populated contents
    #[error("text format tag '{format}' does not match populated '{contents}' contents")]
    TextFormatMismatch {
        /// The format tag the producer emitted
        format: String,
        /// Tag of the contents variant actually populated
        contents: &'static str,
    },

    /// Block nesting exceeded [`MAX_RENDER_DEPTH`]
    #[error("block nesting exceeds the maximum depth of {limit}")]
    DepthExceeded {
        /// The depth limit in effect
        limit: usize,
    },
}

/// One rendering record per visited block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNode {
    /// Nesting depth of the block (root = 0)
    pub depth: usize,

    /// Canonical kind tag of the block
    pub kind: &'static str,

    /// Block name (may be empty)
    pub name: String,

    /// Positional arguments
    pub args: Vec<String>,

    /// Kind-specific scalar attributes, in a fixed order per kind
    pub attrs: Vec<(&'static str, String)>,

    /// Kind-specific body lines (paragraphs, raw text, inline rendering)
    pub lines: Vec<String>,
}

/// Render a content tree as an ordered sequence of records, in preorder
///
/// Each reachable block is visited exactly once: the block itself first,
/// then each child subtree in order. The traversal is a pure function of the
/// tree; rendering the same tree twice yields identical sequences.
///
/// # Returns
/// * `Ok(records)` - One record per visited block
/// * `Err(RenderError)` - The tree violated the kind schema or the depth
///   limit; no partial record sequence is returned
pub fn render_blocks(root: &Block) -> Result<Vec<RenderedNode>, RenderError> {
    render_blocks_with_limit(root, MAX_RENDER_DEPTH)
}

/// Render a content tree with an explicit depth limit
///
/// `limit` is the number of nesting levels accepted; a root-only tree needs
/// a limit of at least 1.
pub fn render_blocks_with_limit(
    root: &Block,
    limit: usize,
) -> Result<Vec<RenderedNode>, RenderError> {
    let mut records = Vec::new();
    visit(root, 0, limit, &mut records)?;
    log::debug!("rendered {} blocks", records.len());
    Ok(records)
}

/// Visit one block and recurse into its children, if any
fn visit(
    block: &Block,
    depth: usize,
    limit: usize,
    records: &mut Vec<RenderedNode>,
) -> Result<(), RenderError> {
    if depth >= limit {
        return Err(RenderError::DepthExceeded { limit });
    }

    records.push(render_block(block, depth)?);

    // Container capability is independent of the block's kind; an empty
    // child list yields no further records and is not an error.
    if let Some(children) = block.children() {
        for child in children {
            visit(child, depth + 1, limit, records)?;
        }
    }

    Ok(())
}

/// Produce the rendering record for a single block
fn render_block(block: &Block, depth: usize) -> Result<RenderedNode, RenderError> {
    let (kind, attrs, lines) = match &block.kind {
        BlockKind::Content { .. } => ("content", Vec::new(), Vec::new()),

        BlockKind::Embed {
            url,
            description,
            media_type,
        } => (
            "embed",
            vec![
                ("url", url.clone()),
                ("description", description.clone()),
                ("type", media_type.clone()),
            ],
            Vec::new(),
        ),

        BlockKind::Header { .. } => ("header", Vec::new(), Vec::new()),

        BlockKind::List { ordered, .. } => (
            "list",
            vec![("ordered", ordered.to_string())],
            Vec::new(),
        ),

        BlockKind::Raw { syntax, text } => (
            "raw",
            vec![("syntax", syntax.clone())],
            vec![text.clone()],
        ),

        BlockKind::Row { .. } => ("row", Vec::new(), Vec::new()),

        BlockKind::Section { title, .. } => {
            ("section", vec![("title", title.clone())], Vec::new())
        }

        BlockKind::Table { .. } => ("table", Vec::new(), Vec::new()),

        BlockKind::Text { format, contents } => (
            "text",
            vec![("format", format.clone())],
            render_text_contents(format, contents)?,
        ),

        BlockKind::Unknown { tag } => {
            return Err(RenderError::UnknownBlockTag { tag: tag.clone() });
        }
    };

    Ok(RenderedNode {
        depth,
        kind,
        name: block.name.clone(),
        args: block.args.clone(),
        attrs,
        lines,
    })
}

/// Render a text block's contents, checking the format tag on the way
///
/// The contents dispatch is exhaustive over the three known sub-variants.
/// The format tag must both be a known tag and agree with the populated
/// variant; either failure is a schema violation.
fn render_text_contents(
    format: &str,
    contents: &TextContents,
) -> Result<Vec<String>, RenderError> {
    match format {
        "formatted" | "plain" | "preformatted" => {}
        other => {
            return Err(RenderError::UnknownTextFormat {
                format: other.to_string(),
            });
        }
    }

    if format != contents.tag() {
        return Err(RenderError::TextFormatMismatch {
            format: format.to_string(),
            contents: contents.tag(),
        });
    }

    Ok(match contents {
        TextContents::Formatted(formatted) => vec![formatted.to_inline_string()],
        TextContents::Plain { paragraphs } => paragraphs.clone(),
        TextContents::Preformatted { text } => vec![text.clone()],
    })
}
