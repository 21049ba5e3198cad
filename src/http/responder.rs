use std::fs::File;
use std::io::{self, Write};
use std::os::fd::AsFd;
use std::path::Path;

use nix::sys::sendfile::sendfile;

use crate::http::mime::MimeCatalog;
use crate::http::response::StatusCode;
use crate::http::writer::write_message;

const NOT_FOUND_RESPONSE: &[u8] = b"HTTP/1.0 404 Not Found\r\n\r\n";

/// Result of one response invocation.
///
/// The responder never propagates an error to its caller through `?`;
/// every failure mode is folded into this tagged outcome so the
/// connection layer can decide teardown without guessing which internal
/// step failed.
#[derive(Debug)]
pub enum Outcome {
    /// The full response, headers and body, reached the socket.
    Completed(StatusCode),
    /// The response was cut short; the client may have a truncated body.
    Aborted(AbortReason),
}

/// Which stage of the response failed.
#[derive(Debug)]
pub enum AbortReason {
    /// A status line or header write failed.
    HeaderWrite(io::Error),
    /// The zero-copy body transfer failed partway through.
    Transfer(nix::errno::Errno),
}

/// Responds to a single request for `file_path` on `stream`.
///
/// Missing paths and paths that are not regular files (directories,
/// devices, sockets) are answered with a bare 404; that is a completed
/// response, not an abort. For a regular file the status line and
/// `Content-Type` header are written, then the body is streamed with
/// `sendfile(2)` so the file bytes never pass through userspace.
///
/// The file size is captured once, before any byte is written, and the
/// transfer loop runs until that many bytes have been sent. A file that
/// grows concurrently is never over-sent. A write or transfer failure
/// at any stage aborts immediately with no further writes.
pub fn respond<S: Write + AsFd>(
    stream: &mut S,
    file_path: &Path,
    mime: &MimeCatalog,
) -> Outcome {
    let file = match File::open(file_path) {
        Ok(file) => file,
        Err(_) => return not_found(stream),
    };

    let metadata = match file.metadata() {
        Ok(metadata) => metadata,
        Err(_) => return not_found(stream),
    };

    if !metadata.is_file() {
        return not_found(stream);
    }

    if let Err(e) = write_message(stream, StatusCode::Ok.status_line().as_bytes()) {
        return Outcome::Aborted(AbortReason::HeaderWrite(e));
    }
    if let Err(e) = write_message(stream, b"Content-Type: ") {
        return Outcome::Aborted(AbortReason::HeaderWrite(e));
    }
    let token = mime.resolve(file_path);
    if let Err(e) = write_message(stream, token.as_bytes()) {
        return Outcome::Aborted(AbortReason::HeaderWrite(e));
    }
    if let Err(e) = write_message(stream, b"\r\n\r\n") {
        return Outcome::Aborted(AbortReason::HeaderWrite(e));
    }

    // Size captured once; never re-read mid-transfer.
    let size = metadata.len() as i64;
    let mut offset: i64 = 0;

    while offset < size {
        let remaining = usize::try_from(size - offset).unwrap_or(usize::MAX);
        // The kernel advances `offset` by the number of bytes it sent.
        if let Err(e) = sendfile(stream.as_fd(), file.as_fd(), Some(&mut offset), remaining) {
            return Outcome::Aborted(AbortReason::Transfer(e));
        }
    }

    Outcome::Completed(StatusCode::Ok)
}

fn not_found<S: Write>(stream: &mut S) -> Outcome {
    match write_message(stream, NOT_FOUND_RESPONSE) {
        Ok(()) => Outcome::Completed(StatusCode::NotFound),
        Err(e) => Outcome::Aborted(AbortReason::HeaderWrite(e)),
    }
}
