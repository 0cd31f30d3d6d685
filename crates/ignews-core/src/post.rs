//! Publication view models.
//!
//! Documents come out of the CMS as block arrays; these types are what
//! the pages actually render. `Post::preview` keeps the historical
//! behavior of cutting the content to its first block before
//! serialization, so non-subscribers get a one-block excerpt.

use crate::date;
use crate::document::{self, Document, RichTextBlock};

/// A loaded publication ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub slug: String,
    pub title: String,
    /// Serialized HTML, escaped at construction.
    pub content: String,
    pub updated_at: String,
}

impl Post {
    /// Preview projection: content cut to the first block.
    pub fn preview(slug: &str, doc: &Document) -> Self {
        let cut = doc.data.content.get(..1).unwrap_or_default();
        Self::build(slug, doc, cut)
    }

    /// Full projection over the whole content array.
    pub fn full(slug: &str, doc: &Document) -> Self {
        Self::build(slug, doc, &doc.data.content)
    }

    fn build(slug: &str, doc: &Document, content: &[RichTextBlock]) -> Self {
        Self {
            slug: slug.to_owned(),
            title: document::as_text(&doc.data.title),
            content: document::as_html(content),
            updated_at: date::display_publication_date(doc.last_publication_date.as_deref()),
        }
    }
}

/// List-page card for a publication.
#[derive(Debug, Clone, PartialEq)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub updated_at: String,
}

impl PostSummary {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            slug: doc.uid.clone().unwrap_or_default(),
            title: document::as_text(&doc.data.title),
            excerpt: document::first_paragraph(&doc.data.content)
                .unwrap_or_default()
                .to_owned(),
            updated_at: date::display_publication_date(doc.last_publication_date.as_deref()),
        }
    }
}
