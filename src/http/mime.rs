//! MIME type resolution based on file extensions.
//!
//! The table is process-wide immutable state: built once at compile time,
//! shared by reference across all requests, never mutated.

/// Fixed ordered table of (extension, content-type) pairs.
///
/// Lookup walks the table in declaration order and takes the first entry
/// whose extension text occurs anywhere in the filename. This is substring
/// containment, not suffix matching: a file named `report.gif.backup`
/// resolves to `image/gif`. That imprecision is intentional and kept.
pub static MIME_TABLE: &[(&str, &str)] = &[
    (".mp3", "audio/mpeg"),
    (".gif", "image/gif"),
    (".jpg", "image/jpeg"),
    (".png", "image/png"),
    (".svg", "image/svg+xml"),
    (".css", "text/css"),
    (".json", "application/json"),
    (".html", "text/html"),
    (".txt", "text/plain"),
    (".xml", "text/xml"),
    (".ico", "image/x-icon"),
];

/// Content type used when no table entry matches.
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Resolves the content type for a filename.
///
/// # Example
///
/// ```
/// # use statik::http::mime::content_type;
/// assert_eq!(content_type("./logo.png"), "image/png");
/// assert_eq!(content_type("./README"), "text/plain");
/// ```
pub fn content_type(filename: &str) -> &'static str {
    MIME_TABLE
        .iter()
        .find(|(ext, _)| filename.contains(ext))
        .map(|(_, ty)| *ty)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}
