//! fileserv - Minimal HTTP/1.0 Static File Server
//!
//! Core library: response generation and zero-copy file transfer.

pub mod config;
pub mod http;
pub mod server;
