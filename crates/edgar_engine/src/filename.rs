use sha2::{Digest, Sha256};
use url::Url;

/// Deterministic local file name for a document link.
///
/// A parseable link maps to the last segment of its URL path, which never
/// contains a separator. Anything `Url` rejects (including the empty
/// string, a relative reference without a base) falls back to a hex digest
/// of the raw link text with an `.html` extension.
pub fn document_filename(link: &str) -> String {
    match Url::parse(link) {
        Ok(parsed) => parsed
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default()
            .to_string(),
        Err(_) => fallback_filename(link),
    }
}

fn fallback_filename(link: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(link.as_bytes());
    let digest = hasher.finalize();
    let mut name = String::with_capacity(digest.len() * 2 + 5);
    for byte in digest.iter() {
        use std::fmt::Write;
        let _ = write!(&mut name, "{byte:02x}");
    }
    name.push_str(".html");
    name
}
