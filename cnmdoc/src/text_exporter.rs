//! Plain-text exporter for CNM documents
//!
//! This module renders a whole document as text: title, sitemap, links,
//! then the content tree one indented line per rendering record. Metadata
//! sections that are absent or empty are omitted entirely rather than
//! rendered as empty placeholders.

use crate::document_model::Document;
use crate::renderer::{self, RenderError, RenderedNode};
use itertools::Itertools;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during text export
#[derive(Error, Debug)]
pub enum TextExportError {
    /// IO error writing the rendered text
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The content tree failed schema checks during traversal
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Render a document as text to the given writer
///
/// # Parameters
/// * `document` - The document to render
/// * `out` - Destination for the rendered text
///
/// # Returns
/// * `Ok(())` - Successfully rendered and written
/// * `Err(TextExportError)` - The content tree failed schema checks, or
///   writing failed
pub fn write_document(document: &Document, out: &mut impl Write) -> Result<(), TextExportError> {
    write_document_with_limit(document, out, renderer::MAX_RENDER_DEPTH)
}

/// Render a document as text with an explicit nesting depth limit
pub fn write_document_with_limit(
    document: &Document,
    out: &mut impl Write,
    limit: usize,
) -> Result<(), TextExportError> {
    let records = renderer::render_blocks_with_limit(&document.content, limit)?;

    let mut output = String::new();
    output.push_str(&format!("Title:\t{}\n", document.title));

    if let Some(ref sitemap) = document.sitemap {
        output.push_str("Sitemap:\n");
        sitemap.write_indent(&mut output, 1);
    }

    if !document.links.is_empty() {
        output.push_str("Links:\n");
        for link in &document.links {
            output.push_str(&format!(
                "\tURL={} Name={} Description={}\n",
                link.url, link.name, link.description
            ));
        }
    }

    for record in &records {
        write_record(&mut output, record);
    }

    out.write_all(output.as_bytes())?;
    Ok(())
}

/// Write a single rendering record as an indented line plus body lines
fn write_record(output: &mut String, record: &RenderedNode) {
    let indent = "  ".repeat(record.depth);

    output.push_str(&indent);
    output.push_str(record.kind);
    output.push_str(&format!(": name={}", record.name));
    if !record.args.is_empty() {
        output.push_str(&format!(" args=[{}]", record.args.iter().join(", ")));
    }
    for (key, value) in &record.attrs {
        output.push_str(&format!(" {}={}", key, value));
    }
    output.push('\n');

    for line in &record.lines {
        output.push_str(&indent);
        output.push_str("  ");
        output.push_str(line);
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content_model::{Block, BlockKind, TextContents};
    use crate::document_model::{Link, Sitemap};

    fn plain_text(paragraphs: &[&str]) -> Block {
        Block::new(
            "",
            Vec::new(),
            BlockKind::Text {
                format: "plain".to_string(),
                contents: TextContents::Plain {
                    paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
                },
            },
        )
    }

    fn render_to_string(document: &Document) -> String {
        let mut out = Vec::new();
        write_document(document, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_metadata_sections_omitted_when_absent() {
        let document = Document::new("Bare", plain_text(&["only content"]));
        let text = render_to_string(&document);

        assert!(text.starts_with("Title:\tBare\n"));
        assert!(!text.contains("Sitemap:"));
        assert!(!text.contains("Links:"));
    }

    #[test]
    fn test_sitemap_and_links_render_in_order() {
        let mut document = Document::new("Full", plain_text(&["body"]));
        let mut sitemap = Sitemap::new("/");
        sitemap.entries.push(Sitemap::new("/a"));
        document.sitemap = Some(sitemap);
        document.links = vec![
            Link {
                url: "https://one.example".to_string(),
                name: "one".to_string(),
                description: "first".to_string(),
            },
            Link {
                url: "https://two.example".to_string(),
                name: "two".to_string(),
                description: String::new(),
            },
        ];

        let text = render_to_string(&document);
        let sitemap_at = text.find("Sitemap:\n\t/\n\t\t/a\n").unwrap();
        let links_at = text
            .find("Links:\n\tURL=https://one.example Name=one Description=first\n")
            .unwrap();
        assert!(sitemap_at < links_at);
        assert!(text.contains("URL=https://two.example Name=two Description=\n"));
    }

    #[test]
    fn test_tree_lines_are_indented_by_depth() {
        let document = Document::new(
            "Tree",
            Block::new(
                "",
                Vec::new(),
                BlockKind::Section {
                    title: "Intro".to_string(),
                    children: vec![plain_text(&["A"])],
                },
            ),
        );

        let text = render_to_string(&document);
        assert!(text.contains("section: name= title=Intro\n"));
        assert!(text.contains("  text: name= format=plain\n"));
        assert!(text.contains("    A\n"));
    }

    #[test]
    fn test_schema_violation_propagates() {
        let document = Document::new(
            "Bad",
            Block::new(
                "",
                Vec::new(),
                BlockKind::Unknown {
                    tag: "widget".to_string(),
                },
            ),
        );

        let mut out = Vec::new();
        let err = write_document(&document, &mut out).unwrap_err();
        assert!(matches!(err, TextExportError::Render(_)));
        // Nothing may be written when the traversal aborts
        assert!(out.is_empty());
    }
}
