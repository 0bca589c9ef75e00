use edgar_engine::document_filename;

#[test]
fn uses_last_path_segment_of_parseable_links() {
    assert_eq!(
        document_filename("https://example.com/a/report.htm"),
        "report.htm"
    );
    assert_eq!(
        document_filename("https://example.com/Archives/edgar/data/0001067983-24-000047-index.htm"),
        "0001067983-24-000047-index.htm"
    );
}

#[test]
fn query_and_fragment_do_not_leak_into_the_name() {
    assert_eq!(
        document_filename("https://example.com/a/report.htm?action=view&x=1#item2"),
        "report.htm"
    );
}

#[test]
fn directory_like_url_yields_empty_name() {
    // A trailing slash leaves an empty final segment. The writer rejects
    // the empty name later, so the entry becomes an ordinary skip.
    assert_eq!(document_filename("https://example.com/a/"), "");
    assert_eq!(document_filename("https://example.com"), "");
}

#[test]
fn unparseable_link_falls_back_to_hash_name() {
    let name = document_filename("::not a url::");
    assert!(name.ends_with(".html"));
    // Full SHA-256 digest, hex-encoded: 64 characters before the extension.
    assert_eq!(name.len(), 64 + ".html".len());
    assert!(name
        .strip_suffix(".html")
        .unwrap()
        .chars()
        .all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn empty_link_falls_back_to_hash_name() {
    // `Url::parse("")` fails (relative reference without a base), so the
    // empty href produced by a bare <link/> element gets the fallback name.
    let name = document_filename("");
    assert!(name.ends_with(".html"));
    assert_eq!(name.len(), 64 + ".html".len());
}

#[test]
fn naming_is_deterministic_and_collision_resistant() {
    assert_eq!(
        document_filename("::not a url::"),
        document_filename("::not a url::")
    );
    assert_ne!(
        document_filename("::not a url::"),
        document_filename("::another bad link::")
    );
    assert_ne!(document_filename(""), document_filename("::not a url::"));
}
