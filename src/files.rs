//! Static file access: URI-to-path resolution and file loading.

use bytes::Bytes;

/// Why a URI could not be resolved to a file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The URI carries a query component; dynamic content is not served.
    Dynamic,
    /// The URI contains a `..` segment and could escape the document root.
    Traversal,
}

/// Resolves request URIs against a document root and loads file contents.
///
/// Resolution is deliberately literal: the path is the root with the URI
/// appended verbatim. No percent-decoding and no normalization happen, so
/// the path a client asked for is exactly the path reported back in a 404.
/// The one guard on top of that is the `..` containment check; the rest of
/// the pipeline relies on it.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: String,
}

/// Default document served for the root URI "/".
pub const DEFAULT_DOCUMENT: &str = "index.html";

impl StaticFiles {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    /// Maps a request URI to a filesystem path.
    ///
    /// A `?` anywhere in the URI classifies the request as dynamic and
    /// rejects it. A URI of exactly `/` resolves to the default document.
    /// Any `..` path segment is rejected outright: the mapping is otherwise
    /// verbatim, so this is the only thing keeping a request inside the
    /// document root.
    ///
    /// # Example
    ///
    /// ```
    /// # use statik::files::StaticFiles;
    /// let files = StaticFiles::new(".");
    /// assert_eq!(files.resolve("/").unwrap(), "./index.html");
    /// assert_eq!(files.resolve("/logo.png").unwrap(), "./logo.png");
    /// assert!(files.resolve("/search?q=x").is_err());
    /// ```
    pub fn resolve(&self, uri: &str) -> Result<String, ResolveError> {
        if uri.contains('?') {
            return Err(ResolveError::Dynamic);
        }

        if uri.split('/').any(|segment| segment == "..") {
            return Err(ResolveError::Traversal);
        }

        let mut path = format!("{}{}", self.root, uri);
        if uri == "/" {
            path.push_str(DEFAULT_DOCUMENT);
        }

        Ok(path)
    }

    /// Opens a resolved path and reads its full contents.
    ///
    /// Returns the bytes and their count; the count is what goes into
    /// Content-length, so header and body always agree even if the file is
    /// resized under us. The error case (typically NotFound) is the
    /// caller's 404 condition. The bytes live only as long as one response
    /// and are dropped when it has been written.
    pub async fn load(&self, path: &str) -> std::io::Result<(Bytes, u64)> {
        let contents = tokio::fs::read(path).await?;
        let size = contents.len() as u64;
        Ok((Bytes::from(contents), size))
    }
}
