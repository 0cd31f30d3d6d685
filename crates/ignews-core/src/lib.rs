//! Shared domain model for the ig.news site.
//!
//! The web crate keeps the transport concerns: HTTP clients, sessions,
//! routing, rendering. Everything here is plain data and pure
//! functions over it: the CMS document shape, rich-text serialization,
//! and publication-date formatting.

pub mod date;
pub mod document;
pub mod post;

pub use document::{Document, DocumentData, RichTextBlock};
pub use post::{Post, PostSummary};

/// CMS custom type that holds publications.
pub const PUBLICATION_TYPE: &str = "publication";
