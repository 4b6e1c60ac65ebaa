//! Document manifests
//!
//! A manifest is a TOML interchange form of an already-parsed CNM document.
//! The CNM textual grammar lives in an external parser; the manifest gives
//! the CLI (and tests) a way to hand the core a fully constructed document.
//!
//! Loading is lenient about unrecognized block kinds - they are preserved as
//! [`BlockKind::Unknown`] so the renderer, which owns the schema boundary,
//! can report them. Malformed text contents fail loading outright: there is
//! no partially constructed document to hand out.

use crate::content_model::{Block, BlockKind, FormattedText, TextContents, TextRun};
use crate::document_model::{Document, Link, Sitemap};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading a document manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    /// IO error reading the manifest file
    #[error("IO error reading {path}: {source}", path = .path.display())]
    Io {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Error parsing TOML
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A text block populated none of the contents fields
    #[error("text block '{name}' populates no contents field")]
    MissingTextContents {
        /// Name of the offending block (may be empty)
        name: String,
    },

    /// A text block populated more than one contents field
    #[error("text block '{name}' populates more than one contents field")]
    AmbiguousTextContents {
        /// Name of the offending block (may be empty)
        name: String,
    },
}

/// Load a document from a manifest file
///
/// # Parameters
/// * `path` - Path to the TOML manifest
///
/// # Returns
/// * `Ok(Document)` - Fully constructed document
/// * `Err(ManifestError)` - Error reading, parsing, or converting the manifest
pub fn load(path: &Path) -> Result<Document, ManifestError> {
    let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_str(&content)
}

/// Load a document from manifest text
pub fn from_str(content: &str) -> Result<Document, ManifestError> {
    let manifest: DocumentManifest = toml::from_str(content)?;
    convert_document(manifest)
}

/// Top-level manifest structure
#[derive(Debug, Deserialize)]
struct DocumentManifest {
    /// Document title
    title: String,

    /// Optional sitemap reference
    sitemap: Option<SitemapManifest>,

    /// Outbound links
    #[serde(default)]
    links: Vec<LinkManifest>,

    /// Root content block
    content: BlockManifest,
}

#[derive(Debug, Deserialize)]
struct SitemapManifest {
    path: String,
    #[serde(default)]
    entries: Vec<SitemapManifest>,
}

#[derive(Debug, Deserialize)]
struct LinkManifest {
    url: String,
    name: String,
    #[serde(default)]
    description: String,
}

/// One block in the manifest
///
/// All kind-specific fields are optional here; conversion picks the fields
/// the declared kind actually uses.
#[derive(Debug, Deserialize)]
struct BlockManifest {
    kind: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    args: Vec<String>,
    #[serde(default)]
    children: Vec<BlockManifest>,

    // embed
    url: Option<String>,
    description: Option<String>,
    media_type: Option<String>,

    // list
    ordered: Option<bool>,

    // raw
    syntax: Option<String>,
    text: Option<String>,

    // section
    title: Option<String>,

    // text
    format: Option<String>,
    paragraphs: Option<Vec<String>>,
    preformatted: Option<String>,
    formatted: Option<Vec<RunManifest>>,
}

#[derive(Debug, Deserialize)]
struct RunManifest {
    text: String,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    code: bool,
    #[serde(default)]
    strikethrough: bool,
    link_url: Option<String>,
}

fn convert_document(manifest: DocumentManifest) -> Result<Document, ManifestError> {
    Ok(Document {
        title: manifest.title,
        sitemap: manifest.sitemap.map(convert_sitemap),
        links: manifest
            .links
            .into_iter()
            .map(|link| Link {
                url: link.url,
                name: link.name,
                description: link.description,
            })
            .collect(),
        content: convert_block(manifest.content)?,
    })
}

fn convert_sitemap(manifest: SitemapManifest) -> Sitemap {
    Sitemap {
        path: manifest.path,
        entries: manifest.entries.into_iter().map(convert_sitemap).collect(),
    }
}

fn convert_block(manifest: BlockManifest) -> Result<Block, ManifestError> {
    let BlockManifest {
        kind,
        name,
        args,
        children,
        url,
        description,
        media_type,
        ordered,
        syntax,
        text,
        title,
        format,
        paragraphs,
        preformatted,
        formatted,
    } = manifest;

    let kind = match kind.as_str() {
        "content" => BlockKind::Content {
            children: convert_children(children)?,
        },
        "embed" => {
            warn_ignored_children("embed", &name, &children);
            BlockKind::Embed {
                url: url.unwrap_or_default(),
                description: description.unwrap_or_default(),
                media_type: media_type.unwrap_or_default(),
            }
        }
        "header" => BlockKind::Header {
            children: convert_children(children)?,
        },
        "list" => BlockKind::List {
            ordered: ordered.unwrap_or(false),
            children: convert_children(children)?,
        },
        "raw" => {
            warn_ignored_children("raw", &name, &children);
            BlockKind::Raw {
                syntax: syntax.unwrap_or_default(),
                text: text.unwrap_or_default(),
            }
        }
        "row" => BlockKind::Row {
            children: convert_children(children)?,
        },
        "section" => BlockKind::Section {
            title: title.unwrap_or_default(),
            children: convert_children(children)?,
        },
        "table" => BlockKind::Table {
            children: convert_children(children)?,
        },
        "text" => {
            warn_ignored_children("text", &name, &children);
            let contents = convert_text_contents(&name, paragraphs, preformatted, formatted)?;
            let format = format.unwrap_or_else(|| contents.tag().to_string());
            BlockKind::Text { format, contents }
        }
        other => {
            log::warn!("preserving unknown block kind '{}'", other);
            BlockKind::Unknown {
                tag: other.to_string(),
            }
        }
    };

    Ok(Block { name, args, kind })
}

fn convert_children(children: Vec<BlockManifest>) -> Result<Vec<Block>, ManifestError> {
    children.into_iter().map(convert_block).collect()
}

fn warn_ignored_children(kind: &str, name: &str, children: &[BlockManifest]) {
    if !children.is_empty() {
        log::warn!(
            "ignoring {} children on leaf {} block '{}'",
            children.len(),
            kind,
            name
        );
    }
}

/// Build the contents sub-variant for a text block
///
/// Exactly one of the three contents fields must be populated.
fn convert_text_contents(
    name: &str,
    paragraphs: Option<Vec<String>>,
    preformatted: Option<String>,
    formatted: Option<Vec<RunManifest>>,
) -> Result<TextContents, ManifestError> {
    let populated = [
        formatted.is_some(),
        paragraphs.is_some(),
        preformatted.is_some(),
    ]
    .iter()
    .filter(|&&present| present)
    .count();

    if populated > 1 {
        return Err(ManifestError::AmbiguousTextContents {
            name: name.to_string(),
        });
    }

    if let Some(runs) = formatted {
        let runs = runs
            .into_iter()
            .map(|run| TextRun {
                text: run.text,
                bold: run.bold,
                italic: run.italic,
                code: run.code,
                strikethrough: run.strikethrough,
                link_url: run.link_url,
            })
            .collect();
        return Ok(TextContents::Formatted(FormattedText::new(runs)));
    }
    if let Some(paragraphs) = paragraphs {
        return Ok(TextContents::Plain { paragraphs });
    }
    if let Some(text) = preformatted {
        return Ok(TextContents::Preformatted { text });
    }

    Err(ManifestError::MissingTextContents {
        name: name.to_string(),
    })
}
