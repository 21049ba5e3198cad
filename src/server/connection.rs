use std::io::Read;
use std::net::TcpStream;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::Config;
use crate::http::mime::MimeCatalog;
use crate::http::parser::{self, ParseError};
use crate::http::responder::{self, Outcome};

const REQUEST_MAX_BUFFER_SIZE: usize = 2000;

/// Serves exactly one request on `stream`, then lets the connection drop.
///
/// No keep-alive: the socket is closed when this returns, whatever the
/// outcome. The responder absorbs its own failures, so the only job left
/// here is reading the request line and logging how the response ended.
pub fn serve_connection(mut stream: TcpStream, cfg: &Config, mime: &MimeCatalog) {
    let mut buffer = Vec::with_capacity(1024);

    let request_path = loop {
        match parser::parse_request_path(&buffer) {
            Ok(path) => break path.to_string(),
            Err(ParseError::Incomplete) => {
                // Need more data → fall through to read
            }
            Err(e) => {
                warn!("request parse error: {:?}", e);
                return;
            }
        }

        if buffer.len() >= REQUEST_MAX_BUFFER_SIZE {
            warn!("request line exceeds {} bytes, dropping", REQUEST_MAX_BUFFER_SIZE);
            return;
        }

        let mut temp = [0u8; 1024];
        let n = match stream.read(&mut temp) {
            Ok(0) => return, // client closed before sending a full request line
            Ok(n) => n,
            Err(e) => {
                warn!("read: {}", e);
                return;
            }
        };

        buffer.extend_from_slice(&temp[..n]);
    };

    let file_path = resolve_path(&cfg.web_root, &request_path);
    debug!("request for {} -> {}", request_path, file_path.display());

    match responder::respond(&mut stream, &file_path, mime) {
        Outcome::Completed(status) => {
            debug!("{} {}", status.as_u16(), request_path);
        }
        Outcome::Aborted(reason) => {
            warn!("response aborted for {}: {:?}", request_path, reason);
        }
    }
}

/// Joins the configured web root with the request path.
///
/// The path is used as received; canonicalization and traversal
/// protection are the front layer's responsibility.
pub fn resolve_path(web_root: &str, request_path: &str) -> PathBuf {
    PathBuf::from(format!("{web_root}{request_path}"))
}
