//! Inline formatted text
//!
//! Formatted text is a sequence of runs, each a span of text with consistent
//! formatting. Callers render it through [`FormattedText::write_indent`] or
//! [`FormattedText::to_inline_string`] and never walk the runs themselves.

/// A span of text with consistent formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Bold formatting
    pub bold: bool,

    /// Italic formatting
    pub italic: bool,

    /// Inline code formatting
    pub code: bool,

    /// Strikethrough formatting
    pub strikethrough: bool,

    /// Link URL (if this run is part of a hyperlink)
    pub link_url: Option<String>,
}

impl TextRun {
    /// Create a new plain text run
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
            code: false,
            strikethrough: false,
            link_url: None,
        }
    }

    /// Check if this run has any formatting applied
    pub fn has_formatting(&self) -> bool {
        self.bold || self.italic || self.code || self.strikethrough || self.link_url.is_some()
    }

    /// Render this run with inline formatting markers
    fn to_marked_string(&self) -> String {
        let mut text = self.text.clone();

        // Apply formatting in order: code, bold, italic, strikethrough
        if self.code {
            text = format!("`{}`", text);
        }
        if self.bold {
            text = format!("**{}**", text);
        }
        if self.italic {
            text = format!("*{}*", text);
        }
        if self.strikethrough {
            text = format!("~~{}~~", text);
        }

        if let Some(ref url) = self.link_url {
            text = format!("[{}]({})", text, url);
        }

        text
    }
}

/// Structured inline markup for a text block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedText {
    /// Formatted runs in reading order
    pub runs: Vec<TextRun>,
}

impl FormattedText {
    /// Create formatted text from a sequence of runs
    pub fn new(runs: Vec<TextRun>) -> Self {
        Self { runs }
    }

    /// Render all runs as a single line with inline formatting markers
    pub fn to_inline_string(&self) -> String {
        self.runs.iter().map(TextRun::to_marked_string).collect()
    }

    /// Write the inline rendering at the given indent depth
    pub fn write_indent(&self, output: &mut String, depth: usize) {
        let indent = "\t".repeat(depth);
        output.push_str(&indent);
        output.push_str(&self.to_inline_string());
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_run_has_no_markers() {
        let fmt = FormattedText::new(vec![TextRun::new("hello")]);
        assert_eq!(fmt.to_inline_string(), "hello");
        assert!(!fmt.runs[0].has_formatting());
    }

    #[test]
    fn test_marker_application() {
        let mut bold = TextRun::new("loud");
        bold.bold = true;
        let mut code = TextRun::new("x + y");
        code.code = true;

        let fmt = FormattedText::new(vec![TextRun::new("a "), bold, TextRun::new(" and "), code]);
        assert_eq!(fmt.to_inline_string(), "a **loud** and `x + y`");
    }

    #[test]
    fn test_link_wraps_formatted_text() {
        let mut run = TextRun::new("docs");
        run.italic = true;
        run.link_url = Some("https://example.org".to_string());

        let fmt = FormattedText::new(vec![run]);
        assert_eq!(fmt.to_inline_string(), "[*docs*](https://example.org)");
    }

    #[test]
    fn test_write_indent() {
        let fmt = FormattedText::new(vec![TextRun::new("indented")]);
        let mut output = String::new();
        fmt.write_indent(&mut output, 2);
        assert_eq!(output, "\t\tindented\n");
    }
}
