//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.1 side of the server: one GET request
//! per connection, answered and closed.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection handler implementing the request-response state machine
//! - **`parser`**: Parses the incoming request head from a byte buffer
//! - **`request`**: HTTP request representation (method, URI, version)
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: Content-type resolution based on file extensions
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the request head
//!        └──────┬──────┘
//!               │ Request received (or malformed → error response)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Resolve URI, open file, build response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send every byte to the client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Close (no keep-alive, one request per connection)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use statik::files::StaticFiles;
//! use statik::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("0.0.0.0:8080").await?;
//!     let files = StaticFiles::new(".");
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let mut conn = Connection::new(socket, files.clone());
//!         if let Err(e) = conn.run().await {
//!             eprintln!("Connection error: {}", e);
//!         }
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
