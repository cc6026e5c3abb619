//! MIME type lookup for data-URI construction.
//!
//! The built-in table covers the extensions a page would plausibly inline
//! or reference; deployments with exotic types supply overrides through
//! configuration. An unknown extension is a non-fatal condition: the
//! inliner proceeds with an empty MIME type.

use rustc_hash::FxHashMap;

/// Read-only extension → MIME type lookup, consumed by the inliner.
pub trait MimeTypeProvider: Send + Sync {
    /// MIME type for a lowercase file extension, if known.
    fn mime_type(&self, extension: &str) -> Option<&str>;
}

/// Guess MIME type from a lowercase file extension string.
pub fn from_extension(ext: &str) -> Option<&'static str> {
    Some(match ext {
        // Web / Text
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" | "mjs" | "cjs" => "text/javascript",
        "json" => "application/json",
        "xml" => "application/xml",
        "txt" => "text/plain",

        // Images
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "ico" => "image/x-icon",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",

        // Audio / Video
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" | "oga" => "audio/ogg",
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",

        // Fonts
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",
        "eot" => "application/vnd.ms-fontobject",

        // Documents / Binary
        "pdf" => "application/pdf",
        "wasm" => "application/wasm",

        _ => return None,
    })
}

/// MIME table: built-in extension map plus configured overrides.
///
/// Overrides win over the built-in table, so a deployment can both add
/// unknown extensions and correct built-in answers.
#[derive(Debug, Clone, Default)]
pub struct MimeTable {
    overrides: FxHashMap<String, String>,
}

impl MimeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: FxHashMap<String, String>) -> Self {
        Self { overrides }
    }
}

impl MimeTypeProvider for MimeTable {
    fn mime_type(&self, extension: &str) -> Option<&str> {
        self.overrides
            .get(extension)
            .map(String::as_str)
            .or_else(|| from_extension(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(from_extension("png"), Some("image/png"));
        assert_eq!(from_extension("svg"), Some("image/svg+xml"));
        assert_eq!(from_extension("woff2"), Some("font/woff2"));
        assert_eq!(from_extension("xyz"), None);
    }

    #[test]
    fn test_mime_table_overrides_win() {
        let mut overrides = FxHashMap::default();
        overrides.insert("png".to_string(), "image/apng".to_string());
        overrides.insert("cur".to_string(), "image/x-icon".to_string());
        let table = MimeTable::with_overrides(overrides);

        assert_eq!(table.mime_type("png"), Some("image/apng"));
        assert_eq!(table.mime_type("cur"), Some("image/x-icon"));
        assert_eq!(table.mime_type("gif"), Some("image/gif"));
        assert_eq!(table.mime_type("xyz"), None);
    }
}
