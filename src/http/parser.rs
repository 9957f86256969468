use crate::http::request::{Method, Request};

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Request head is not valid UTF-8
    InvalidRequest,
    /// Request line has fewer than three whitespace-separated tokens;
    /// carries the offending line for the error page
    MalformedRequestLine(String),
    /// Header terminator not seen yet, caller should read more bytes
    Incomplete,
}

/// Parses one HTTP request head from `buf`.
///
/// Waits for the full head (terminated by a blank line), then splits the
/// request line into method, URI and version. Header lines are skipped
/// entirely: their content never influences routing, body handling or
/// connection lifetime. A request line with fewer than three tokens is a
/// defined parse failure, answered upstream with 400 rather than being
/// served from garbage tokens.
///
/// Returns the request and the number of consumed bytes so the caller can
/// echo the raw head to the log before draining its buffer.
///
/// Nothing is inspected before the head terminator arrives: a non-GET
/// request line stays `Incomplete` until the client sends the blank line,
/// and only then is answered with 501. With no read timeouts, a client
/// that never finishes its head parks the connection indefinitely.
pub fn parse_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    let head_end = find_head_end(buf).ok_or(ParseError::Incomplete)?;
    let head = std::str::from_utf8(&buf[..head_end]).map_err(|_| ParseError::InvalidRequest)?;

    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default();

    let mut parts = request_line.split_whitespace();
    let (Some(method), Some(uri), Some(version)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(ParseError::MalformedRequestLine(request_line.to_string()));
    };

    // The remaining lines are headers. They are read and discarded.

    let request = Request::new(Method::parse(method), uri, version);
    Ok((request, head_end + 4))
}

fn find_head_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let (parsed, consumed) = parse_request(req).unwrap();

        assert_eq!(parsed.uri, "/");
        assert_eq!(parsed.version, "HTTP/1.1");
        assert_eq!(consumed, req.len());
    }
}
