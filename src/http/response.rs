use bytes::Bytes;

/// Server identification string, sent in the `Server` header and in the
/// footer of error pages.
pub const SERVER_NAME: &str = "statik/0.1";

/// HTTP status codes emitted by the server.
///
/// The set is deliberately small; the serving pipeline can only end in one
/// of these outcomes:
/// - `Ok` (200): file found and served
/// - `BadRequest` (400): malformed request line, or a `..` path segment
/// - `NotFound` (404): resolved file does not exist
/// - `NotImplemented` (501): non-GET method, or dynamic content (`?` in URI)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not found
    NotFound,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use statik::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the reason phrase for this status code.
    ///
    /// Note the lowercase `f` in "Not found"; clients key on the numeric
    /// code, not the phrase.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not found",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
///
/// Headers are an ordered list, not a map: the exact header set and its
/// ordering on the wire are part of the server's contract (error responses
/// carry only `Content-type`, success responses carry `Allow`, `Server`,
/// `Content-length` and `Content-type` in that order).
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers, in emission order
    pub headers: Vec<(String, String)>,
    /// Response body as bytes
    pub body: Bytes,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-type", "text/plain")
///     .body(Bytes::from_static(b"hi"))
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Bytes,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    /// Appends a header. Headers are emitted in insertion order and no
    /// header is ever added implicitly (Content-length included).
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the final Response.
    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Builds an error response: a `Content-type: text/html` header and a
    /// minimal HTML page naming the status, a long-form message, the failing
    /// cause token (method, URI or filename) and the server footer.
    pub fn error(status: StatusCode, longmsg: &str, cause: &str) -> Self {
        let body = format!(
            "<html><title>Server Error</title><body bgcolor=\"ffffff\">\n\
             <h1>{code} {reason}</h1>\n\
             <p>{longmsg}: {cause}\n\
             <hr><em>{server}</em>\n",
            code = status.as_u16(),
            reason = status.reason_phrase(),
            longmsg = longmsg,
            cause = cause,
            server = SERVER_NAME,
        );

        ResponseBuilder::new(status)
            .header("Content-type", "text/html")
            .body(body.into_bytes())
            .build()
    }

    /// Builds the success response for a served file: `200 OK` with the
    /// exact header set of the serving contract, then the verbatim file
    /// bytes. `size` is the on-disk file size; the body is transmitted
    /// without any transformation or re-encoding, whatever the declared
    /// charset says.
    pub fn file(content_type: &str, size: u64, body: Bytes) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .header("Allow", "GET")
            .header("Server", SERVER_NAME)
            .header("Content-length", size.to_string())
            .header("Content-type", format!("{};charset=UTF-8", content_type))
            .body(body)
            .build()
    }
}
