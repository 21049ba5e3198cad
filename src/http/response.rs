const HTTP_VERSION: &str = "HTTP/1.0";

/// HTTP status codes emitted by the responder.
///
/// The server has a single fixed response path, so only two statuses
/// exist: `Ok` (200) when the requested path is a regular file, and
/// `NotFound` (404) for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use fileserv::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }

    /// Renders the full status line, including the trailing CRLF.
    ///
    /// # Example
    ///
    /// ```
    /// # use fileserv::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.status_line(), "HTTP/1.0 200 OK\r\n");
    /// ```
    pub fn status_line(&self) -> String {
        format!(
            "{} {} {}\r\n",
            HTTP_VERSION,
            self.as_u16(),
            self.reason_phrase()
        )
    }
}
