//! Document model for fully parsed CNM documents

use crate::content_model::Block;

/// An outbound link carried in document metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Link target
    pub url: String,

    /// Display name
    pub name: String,

    /// Human-readable description (may be empty)
    pub description: String,
}

/// Reference to the site map a document belongs to
///
/// The reference is opaque to the rest of the crate: consumers only ask it
/// to render itself at a given indent depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sitemap {
    /// Path or identifier of this entry
    pub path: String,

    /// Nested entries, in site order
    pub entries: Vec<Sitemap>,
}

impl Sitemap {
    /// Create a sitemap reference with no nested entries
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
        }
    }

    /// Write this entry and its nested entries, one per line, indented by depth
    pub fn write_indent(&self, output: &mut String, depth: usize) {
        let indent = "\t".repeat(depth);
        output.push_str(&indent);
        output.push_str(&self.path);
        output.push('\n');
        for entry in &self.entries {
            entry.write_indent(output, depth + 1);
        }
    }
}

/// A fully parsed CNM document
///
/// Constructed once by an external parser and read-only from then on. The
/// content tree is exclusively owned by the document; there are no
/// back-references and no sharing, so the tree is destroyed with the
/// document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Document title
    pub title: String,

    /// Sitemap reference, when the document belongs to a site
    pub sitemap: Option<Sitemap>,

    /// Outbound links, in document order (possibly empty)
    pub links: Vec<Link>,

    /// Root of the content tree
    pub content: Block,
}

impl Document {
    /// Create a document with no sitemap and no links
    ///
    /// # Parameters
    /// * `title` - Document title
    /// * `content` - Root content block
    ///
    /// # Returns
    /// * `Document` - A document holding the given content tree
    pub fn new(title: impl Into<String>, content: Block) -> Self {
        Self {
            title: title.into(),
            sitemap: None,
            links: Vec::new(),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content_model::BlockKind;

    #[test]
    fn test_sitemap_write_indent_nests_entries() {
        let mut sitemap = Sitemap::new("/");
        let mut docs = Sitemap::new("/docs");
        docs.entries.push(Sitemap::new("/docs/intro"));
        sitemap.entries.push(docs);
        sitemap.entries.push(Sitemap::new("/about"));

        let mut output = String::new();
        sitemap.write_indent(&mut output, 1);
        assert_eq!(output, "\t/\n\t\t/docs\n\t\t\t/docs/intro\n\t\t/about\n");
    }

    #[test]
    fn test_new_document_has_no_metadata_sections() {
        let document = Document::new(
            "Empty",
            Block::new("root", Vec::new(), BlockKind::Content { children: vec![] }),
        );
        assert!(document.sitemap.is_none());
        assert!(document.links.is_empty());
    }
}
