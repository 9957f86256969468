/// HTTP request methods.
///
/// Only GET is served. Every other method token is carried verbatim so the
/// 501 error body can name it back to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - retrieve a resource
    Get,
    /// Any other method token, kept as received
    Other(String),
}

impl Method {
    /// Parses an HTTP method token. The GET comparison is case-insensitive,
    /// so `get` and `GeT` are served like `GET`.
    ///
    /// # Example
    ///
    /// ```
    /// # use statik::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Method::Get);
    /// assert_eq!(Method::parse("get"), Method::Get);
    /// assert_eq!(Method::parse("POST"), Method::Other("POST".to_string()));
    /// ```
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("GET") {
            Method::Get
        } else {
            Method::Other(s.to_string())
        }
    }

    /// The method token as received on the wire ("GET" for `Get`).
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Other(s) => s.as_str(),
        }
    }
}

/// Represents a parsed HTTP request from a client.
///
/// Holds only the three request-line tokens. Header lines are read off the
/// connection and discarded without interpretation: no Host, no
/// Content-Length, no Connection semantics. One Request is constructed per
/// connection and never persisted.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, or the raw token of anything else)
    pub method: Method,
    /// The request target URI, verbatim (e.g., "/index.html")
    pub uri: String,
    /// HTTP version token (typically "HTTP/1.1")
    pub version: String,
}

impl Request {
    pub fn new(method: Method, uri: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            method,
            uri: uri.into(),
            version: version.into(),
        }
    }
}
