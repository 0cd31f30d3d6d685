//! Rich-text document model mirroring the headless CMS payload.
//!
//! A document's `title` and `content` fields are arrays of typed text
//! blocks. Serialization works at block granularity: the block `type`
//! carries the structure, `text` carries the words. Span-level
//! formatting inside a block is not modelled.

use serde::Deserialize;

/// One rich-text block as delivered by the CMS.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RichTextBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: String,
    /// Present on `image` blocks.
    #[serde(default)]
    pub url: Option<String>,
}

/// Payload fields of a publication document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocumentData {
    #[serde(default)]
    pub title: Vec<RichTextBlock>,
    #[serde(default)]
    pub content: Vec<RichTextBlock>,
}

/// A CMS document envelope. Only the fields the site reads are kept,
/// everything else in the API response is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub last_publication_date: Option<String>,
    #[serde(default)]
    pub data: DocumentData,
}

/// Plain-text projection of a block array: block texts joined by a
/// single space. The conventional way to read a title field.
pub fn as_text(blocks: &[RichTextBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        if block.text.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&block.text);
    }
    out
}

/// Text of the first paragraph block, the list-page excerpt source.
pub fn first_paragraph(blocks: &[RichTextBlock]) -> Option<&str> {
    blocks
        .iter()
        .find(|block| block.kind == "paragraph")
        .map(|block| block.text.as_str())
}

/// Serializes a block array to HTML.
///
/// Heading levels map to `<h1>`..`<h6>`, paragraphs to `<p>`,
/// preformatted blocks to `<pre>`, and runs of list items are grouped
/// under a single `<ul>` or `<ol>`. Images render only with an
/// http(s) source. Block types without a mapping are skipped. Text is
/// always escaped.
pub fn as_html(blocks: &[RichTextBlock]) -> String {
    let mut out = String::new();
    let mut open_list: Option<&str> = None;

    for block in blocks {
        let wanted_list = match block.kind.as_str() {
            "list-item" => Some("ul"),
            "o-list-item" => Some("ol"),
            _ => None,
        };
        if open_list != wanted_list {
            if let Some(tag) = open_list.take() {
                close_tag(&mut out, tag);
            }
            if let Some(tag) = wanted_list {
                open_tag(&mut out, tag);
                open_list = Some(tag);
            }
        }

        match block.kind.as_str() {
            "heading1" => wrapped(&mut out, "h1", &block.text),
            "heading2" => wrapped(&mut out, "h2", &block.text),
            "heading3" => wrapped(&mut out, "h3", &block.text),
            "heading4" => wrapped(&mut out, "h4", &block.text),
            "heading5" => wrapped(&mut out, "h5", &block.text),
            "heading6" => wrapped(&mut out, "h6", &block.text),
            "paragraph" => wrapped(&mut out, "p", &block.text),
            "preformatted" => wrapped(&mut out, "pre", &block.text),
            "list-item" | "o-list-item" => wrapped(&mut out, "li", &block.text),
            "image" => {
                if let Some(url) = block.url.as_deref()
                    && (url.starts_with("https://") || url.starts_with("http://"))
                {
                    out.push_str("<img src=\"");
                    out.push_str(&escape(url));
                    out.push_str("\" alt=\"");
                    out.push_str(&escape(&block.text));
                    out.push_str("\">");
                }
            }
            _ => {}
        }
    }

    if let Some(tag) = open_list {
        close_tag(&mut out, tag);
    }
    out
}

fn open_tag(out: &mut String, tag: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn wrapped(out: &mut String, tag: &str, text: &str) {
    open_tag(out, tag);
    out.push_str(&escape(text));
    close_tag(out, tag);
}

/// Minimal HTML escaping for text interpolated into serialized markup.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
