//! Base64 data-URI construction for inline embedding.
//!
//! The whole resource is read into memory before encoding; inlining is
//! reserved for small resources by policy of the caller, not enforced
//! here.

use base64::{Engine as _, engine::general_purpose};
use std::io::Read;

use crate::error::ResolveError;
use crate::log;
use crate::mime::MimeTypeProvider;
use crate::path;
use crate::reader::ResourceReader;

/// Build a `data:<mime>;base64,<bytes>` URI for a resource.
///
/// An extension missing from the MIME table is a warning, not a failure:
/// the URI is built with an empty MIME type and browsers sniff the
/// content.
pub fn data_uri(
    resource_path: &str,
    reader: &dyn ResourceReader,
    mime: &dyn MimeTypeProvider,
) -> Result<String, ResolveError> {
    let mime_type = match path::extension_of(resource_path)
        .and_then(|ext| mime.mime_type(&ext).map(str::to_string))
    {
        Some(m) => m,
        None => {
            log!("inline"; "no MIME type known for '{resource_path}', embedding without one");
            String::new()
        }
    };

    let mut stream = reader.open(resource_path)?;
    let mut bytes = Vec::new();
    stream
        .read_to_end(&mut bytes)
        .map_err(|e| ResolveError::Io(resource_path.to_string(), e))?;

    let encoded = general_purpose::STANDARD.encode(&bytes);
    Ok(format!("data:{mime_type};base64,{encoded}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mime::MimeTable;
    use crate::reader::FsReader;
    use std::fs;
    use tempfile::TempDir;

    fn reader_with(name: &str, content: &[u8]) -> (TempDir, FsReader) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(name), content).unwrap();
        let reader = FsReader::new(dir.path());
        (dir, reader)
    }

    #[test]
    fn test_data_uri_known_extension() {
        let (_dir, reader) = reader_with("dot.gif", b"GIF89a");
        let uri = data_uri("/dot.gif", &reader, &MimeTable::new()).unwrap();

        assert!(uri.starts_with("data:image/gif;base64,"));
        // "GIF89a" in standard base64
        assert!(uri.ends_with("R0lGODlh"));
    }

    #[test]
    fn test_data_uri_unknown_extension_is_best_effort() {
        let (_dir, reader) = reader_with("blob.xyz", b"\x00\x01");
        let uri = data_uri("/blob.xyz", &reader, &MimeTable::new()).unwrap();

        assert!(uri.starts_with("data:;base64,"));
    }

    #[test]
    fn test_data_uri_missing_resource() {
        let dir = TempDir::new().unwrap();
        let reader = FsReader::new(dir.path());

        let err = data_uri("/gone.png", &reader, &MimeTable::new()).unwrap_err();
        assert!(matches!(err, ResolveError::NotFound(_)));
    }
}
