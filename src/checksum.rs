//! Content checksums and cache-busted URL construction.
//!
//! Streams a resource's bytes through blake3 and renders the digest into a
//! fixed-format version token embedded in the filename
//! (`logo.png` → `logo-v1af2b3c4.png`). Identical content always yields the
//! identical URL; any content change yields a different one.

use std::io::{self, BufReader, Read};

use crate::error::ResolveError;
use crate::reader::ResourceReader;

/// Length of the hex version token embedded into URLs.
const VERSION_TOKEN_LEN: usize = 8;

/// A 256-bit content hash (blake3 output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Create a new ContentHash from raw bytes.
    #[inline]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(self) -> String {
        hex::encode(self.0)
    }

    /// Render the short token embedded into versioned URLs.
    pub fn version_token(self) -> String {
        self.to_hex()[..VERSION_TOKEN_LEN].to_string()
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Display first 16 chars of hex for brevity
        write!(f, "{}", &self.to_hex()[..16])
    }
}

/// Hash a byte stream to completion.
///
/// The stream is read exactly once, in 64 KiB chunks; any read failure
/// (other than `Interrupted`) aborts the hash.
pub fn hash_reader(mut reader: impl Read) -> io::Result<ContentHash> {
    let mut hasher = blake3::Hasher::new();
    let mut buffer = [0u8; 64 * 1024];

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => {
                hasher.update(&buffer[..n]);
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(ContentHash::new(*hasher.finalize().as_bytes()))
}

/// Hash an in-memory byte slice.
#[inline]
pub fn hash_bytes(data: &[u8]) -> ContentHash {
    ContentHash::new(*blake3::hash(data).as_bytes())
}

/// Insert a version token into a web path as a filename infix.
///
/// `/images/logo.png` becomes `/images/logo-v<token>.png`; a path without
/// an extension gets the token appended to its last segment.
pub fn versioned_path(path: &str, token: &str) -> String {
    let (dir, name) = match path.rfind('/') {
        Some(i) => path.split_at(i + 1),
        None => ("", path),
    };
    match name.rfind('.') {
        Some(i) if i > 0 => format!("{dir}{}-v{token}{}", &name[..i], &name[i..]),
        _ => format!("{dir}{name}-v{token}"),
    }
}

/// Compute the cache-busted URL for a resource.
///
/// Opens the resource through `reader`, hashes the full stream and embeds
/// the version token into the path. Safe to call concurrently for any mix
/// of paths; all computations for the same content converge on the same
/// URL.
pub fn cache_busted_url(path: &str, reader: &dyn ResourceReader) -> Result<String, ResolveError> {
    let stream = reader.open(path)?;
    let hash = hash_reader(BufReader::with_capacity(64 * 1024, stream))
        .map_err(|e| ResolveError::Io(path.to_string(), e))?;
    Ok(versioned_path(path, &hash.version_token()))
}
