use statik::http::mime::{DEFAULT_CONTENT_TYPE, MIME_TABLE, content_type};

#[test]
fn test_every_table_extension_resolves_to_its_type() {
    for (ext, expected) in MIME_TABLE {
        let filename = format!("./file{}", ext);
        assert_eq!(content_type(&filename), *expected, "for {}", filename);
    }
}

#[test]
fn test_unknown_extension_falls_back_to_text_plain() {
    assert_eq!(content_type("./archive.tar.zst"), DEFAULT_CONTENT_TYPE);
    assert_eq!(content_type("./README"), "text/plain");
}

#[test]
fn test_match_is_substring_not_suffix() {
    // ".gif" occurs inside the name even though the real extension differs
    assert_eq!(content_type("./report.gif.backup"), "image/gif");
}

#[test]
fn test_first_table_entry_wins() {
    // ".mp3" precedes ".txt" in declaration order
    assert_eq!(content_type("./song.mp3.txt"), "audio/mpeg");
}

#[test]
fn test_common_lookups() {
    assert_eq!(content_type("./index.html"), "text/html");
    assert_eq!(content_type("./logo.png"), "image/png");
    assert_eq!(content_type("./data.json"), "application/json");
    assert_eq!(content_type("./favicon.ico"), "image/x-icon");
}
