use std::collections::HashMap;
use std::ffi::OsStr;

/// MIME type used when no catalog entry matches the path's extension.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// The byte separating a filename from its type suffix.
pub const EXTENSION_DELIMITER: u8 = b'.';

/// Lookup table mapping file extensions to MIME tokens.
///
/// The catalog is plain data: resolution is a string lookup with no
/// filesystem access, so it can be unit tested without I/O and extended
/// at runtime with additional entries.
///
/// Extensions are matched against the substring from the **last**
/// [`EXTENSION_DELIMITER`] to the end of the path, case-sensitively.
/// `foo.HTML` therefore falls back to [`FALLBACK_MIME_TYPE`], and
/// `a.b.css` resolves to `text/css`.
#[derive(Debug, Clone)]
pub struct MimeCatalog {
    entries: HashMap<String, String>,
}

impl Default for MimeCatalog {
    /// Builds the catalog with the default entries.
    fn default() -> Self {
        let mut catalog = Self::empty();
        catalog.insert(".html", "text/html");
        catalog.insert(".jpeg", "image/jpeg");
        catalog.insert(".js", "text/javascript");
        catalog.insert(".css", "text/css");
        catalog
    }
}

impl MimeCatalog {
    /// Creates a catalog with no entries; every path resolves to the fallback.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Adds or replaces an entry. The extension must include its leading `.`.
    pub fn insert(&mut self, extension: impl Into<String>, token: impl Into<String>) {
        self.entries.insert(extension.into(), token.into());
    }

    /// Resolves the MIME token for `path`.
    ///
    /// Only the bytes from the last `.` to the end of the path are
    /// compared, so a `.` elsewhere in the path is ignored. A path with
    /// no `.` at all resolves to [`FALLBACK_MIME_TYPE`]. Comparison is
    /// byte-wise: a suffix that is not valid UTF-8 cannot match any
    /// catalog entry and falls back.
    pub fn resolve(&self, path: impl AsRef<OsStr>) -> &str {
        let bytes = path.as_ref().as_encoded_bytes();
        match bytes.iter().rposition(|&b| b == EXTENSION_DELIMITER) {
            Some(idx) => match std::str::from_utf8(&bytes[idx..]) {
                Ok(extension) => self
                    .entries
                    .get(extension)
                    .map(String::as_str)
                    .unwrap_or(FALLBACK_MIME_TYPE),
                Err(_) => FALLBACK_MIME_TYPE,
            },
            None => FALLBACK_MIME_TYPE,
        }
    }
}
