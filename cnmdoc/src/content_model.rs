//! Content tree model
//!
//! This module defines the structured representation of CNM document
//! content: the closed set of block variants, the container capability,
//! and inline formatted text.

// Submodules
mod blocks;
mod formatted_text;

// Re-export public types
pub use blocks::{Block, BlockKind, TextContents};
pub use formatted_text::{FormattedText, TextRun};
