#[derive(Debug)]
pub enum ParseError {
    InvalidRequest,
    Incomplete,
}

/// Extracts the URL path from a buffered request line.
///
/// Only the first line is inspected; the method token is not dispatched
/// on, because the server has a single fixed response path.
pub fn parse_request_path(buf: &[u8]) -> Result<&str, ParseError> {
    let line_end = find_line_end(buf).ok_or(ParseError::Incomplete)?;

    let line = std::str::from_utf8(&buf[..line_end])
        .map_err(|_| ParseError::InvalidRequest)?;

    let mut parts = line.split_whitespace();
    let _method = parts.next().ok_or(ParseError::InvalidRequest)?;
    let path = parts.next().ok_or(ParseError::InvalidRequest)?;

    Ok(path)
}

fn find_line_end(buf: &[u8]) -> Option<usize> {
    buf.windows(2).position(|w| w == b"\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET /index.html HTTP/1.0\r\nHost: example.com\r\n\r\n";

        let path = parse_request_path(req).unwrap();

        assert_eq!(path, "/index.html");
    }

    #[test]
    fn missing_line_terminator_is_incomplete() {
        let req = b"GET /index.html HTTP/1.0";

        assert!(matches!(
            parse_request_path(req),
            Err(ParseError::Incomplete)
        ));
    }
}
