//! cnmdoc - in-memory model and rendering traversal for CNM documents
//!
//! A CNM document is a tree of typed content blocks plus small metadata
//! (title, sitemap reference, outbound links). This crate defines the block
//! variant model, the document aggregate, and the preorder rendering
//! traversal over the content tree. Parsing the CNM textual grammar is an
//! external concern; documents reach this crate fully constructed, either
//! from such a parser or from the TOML manifest loader.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]
// Allow some pedantic lints that are too strict for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod content_model;
pub mod document_model;
pub mod manifest;
pub mod renderer;
pub mod text_exporter;
