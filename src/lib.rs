//! statik - Minimal Static File Server
//!
//! Core library for the HTTP request-handling pipeline: accept a
//! connection, parse one GET request, resolve it to a file, send it back.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
