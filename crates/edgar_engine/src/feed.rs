use serde::Deserialize;
use thiserror::Error;

/// The fixed feed schema: a root element holding `entry` elements, each
/// carrying one `link` whose `href` attribute is the document URL. Anything
/// else in the document is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Feed {
    #[serde(default, rename = "entry")]
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub link: Link,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Link {
    #[serde(default, rename = "@href")]
    pub href: String,
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("malformed feed: {0}")]
    Parse(#[from] quick_xml::DeError),
}

/// Decode feed bytes into the fixed schema, entries in document order.
///
/// EDGAR declares character encodings the decoder does not support, so a
/// leading XML declaration is stripped before decoding.
pub fn parse_feed(bytes: &[u8]) -> Result<Feed, FeedError> {
    let text = String::from_utf8_lossy(bytes);
    let feed = quick_xml::de::from_str(strip_xml_declaration(&text))?;
    Ok(feed)
}

/// Textual prefix strip: drops everything up to and including the first
/// `?>` occurrence when the content starts with `<?xml`. A declaration with
/// an embedded `?>` in an attribute value truncates wrongly; this matches
/// the long-standing behavior downstream consumers rely on.
fn strip_xml_declaration(text: &str) -> &str {
    if text.starts_with("<?xml") {
        if let Some(idx) = text.find("?>") {
            return &text[idx + 2..];
        }
    }
    text
}
