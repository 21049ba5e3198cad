//! HTTP/1.0 response generation.
//!
//! This layer owns the single-request response path:
//!
//! - **`parser`**: extracts the request path from the buffered request line
//! - **`mime`**: data-driven extension → MIME token catalog
//! - **`response`**: status codes and status-line rendering
//! - **`responder`**: the core decision logic and zero-copy body transfer
//! - **`writer`**: the reliable full-message write primitive
//!
//! The responder is invoked once per connection with an already-resolved
//! filesystem path; connection acceptance and request buffering live in
//! the `server` module.

pub mod mime;
pub mod parser;
pub mod responder;
pub mod response;
pub mod writer;
