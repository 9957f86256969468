use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::files::{ResolveError, StaticFiles};
use crate::http::mime;
use crate::http::parser::{ParseError, parse_request};
use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;

pub struct Connection {
    stream: TcpStream,
    buffer: Vec<u8>,
    state: ConnectionState,
    files: StaticFiles,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

enum ReadOutcome {
    Request(Request),
    Malformed(Response),
    Eof,
}

impl Connection {
    pub fn new(stream: TcpStream, files: StaticFiles) -> Self {
        Self {
            stream,
            buffer: Vec::with_capacity(4096),
            state: ConnectionState::Reading,
            files,
        }
    }

    /// Drives the connection through its states: read one request, build
    /// one response, write it, close. There is no keep-alive transition;
    /// a Connection handles exactly one Request before it is destroyed.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        ReadOutcome::Request(req) => {
                            self.state = ConnectionState::Processing(req);
                        }
                        ReadOutcome::Malformed(response) => {
                            let writer = ResponseWriter::new(&response);
                            self.state = ConnectionState::Writing(writer);
                        }
                        ReadOutcome::Eof => {
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    let response = Self::handle_request(&self.files, req).await;

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    // Close only after every response byte is flushed
                    self.stream.shutdown().await.ok();
                    break;
                }
            }
        }

        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<ReadOutcome> {
        loop {
            // Try parsing whatever we already have
            match parse_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.log_request_head(consumed);
                    self.buffer.drain(..consumed);
                    return Ok(ReadOutcome::Request(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data, fall through to read
                }

                Err(ParseError::MalformedRequestLine(line)) => {
                    // Rejected request lines are echoed too
                    tracing::info!("{}", line);
                    let response = Response::error(
                        StatusCode::BadRequest,
                        "Server could not parse this request line",
                        &line,
                    );
                    return Ok(ReadOutcome::Malformed(response));
                }

                Err(ParseError::InvalidRequest) => {
                    tracing::info!("{}", String::from_utf8_lossy(self.first_line()));
                    let response = Response::error(
                        StatusCode::BadRequest,
                        "Server could not parse this request line",
                        "(not text)",
                    );
                    return Ok(ReadOutcome::Malformed(response));
                }
            }

            // Read more data
            let mut temp = [0u8; 1024];
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                // Client closed connection before a full request head
                return Ok(ReadOutcome::Eof);
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }

    /// The raw bytes of the first received line, for echoing heads that
    /// never became a Request.
    fn first_line(&self) -> &[u8] {
        let end = self
            .buffer
            .windows(2)
            .position(|w| w == b"\r\n")
            .unwrap_or(self.buffer.len());
        &self.buffer[..end]
    }

    /// Echoes the request line and every header line to the log.
    fn log_request_head(&self, consumed: usize) {
        if let Ok(head) = std::str::from_utf8(&self.buffer[..consumed]) {
            for line in head.split("\r\n").filter(|l| !l.is_empty()) {
                tracing::info!("{}", line);
            }
        }
    }

    /// Maps one request to its response: method check first, then URI
    /// classification, then the file itself. Every early exit carries the
    /// failing token so the error page can name it.
    async fn handle_request(files: &StaticFiles, req: &Request) -> Response {
        if let Method::Other(name) = &req.method {
            return Response::error(
                StatusCode::NotImplemented,
                "Server does not support this method",
                name,
            );
        }

        let filename = match files.resolve(&req.uri) {
            Ok(filename) => filename,
            Err(ResolveError::Dynamic) => {
                return Response::error(
                    StatusCode::NotImplemented,
                    "Server does not support dynamic content",
                    &req.uri,
                );
            }
            Err(ResolveError::Traversal) => {
                return Response::error(
                    StatusCode::BadRequest,
                    "Server does not serve paths outside its root",
                    &req.uri,
                );
            }
        };

        match files.load(&filename).await {
            Ok((body, size)) => Response::file(mime::content_type(&filename), size, body),
            Err(e) => {
                tracing::warn!("File {} not served: {}", filename, e);
                Response::error(
                    StatusCode::NotFound,
                    "Server couldn't find this file",
                    &filename,
                )
            }
        }
    }
}
