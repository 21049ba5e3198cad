use std::io::{self, Write};

use tracing::error;

/// Writes the whole of `message` to `stream`, looping on short writes.
///
/// A write that makes no progress is treated as a closed connection.
/// The error is logged here; the caller decides whether to abort the
/// response.
pub fn write_message<S: Write>(stream: &mut S, message: &[u8]) -> io::Result<()> {
    let mut written = 0;

    while written < message.len() {
        match stream.write(&message[written..]) {
            Ok(0) => {
                let e = io::Error::new(
                    io::ErrorKind::WriteZero,
                    "connection closed while writing",
                );
                error!("write: {}", e);
                return Err(e);
            }
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                error!("write: {}", e);
                return Err(e);
            }
        }
    }

    Ok(())
}
