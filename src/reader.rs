//! Collaborator traits for resource access and classification.
//!
//! The engine never touches storage directly: bytes come through a
//! [`ResourceReader`], and a [`GeneratorRegistry`] tells the normalizer
//! which paths name dynamically generated resources rather than files.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::ResolveError;

/// Byte-level access to a resource's content stream.
pub trait ResourceReader: Send + Sync {
    /// Open the content stream for a logical path.
    fn open(&self, path: &str) -> Result<Box<dyn Read>, ResolveError>;
}

/// Classifies paths as dynamically generated vs filesystem-backed.
///
/// Generated resources are addressed by logical name and bypass
/// relative-path resolution entirely.
pub trait GeneratorRegistry: Send + Sync {
    fn is_generated(&self, path: &str) -> bool;
}

// ============================================================================
// Filesystem Reader
// ============================================================================

/// Reader backed by a web root directory on disk.
///
/// Maps `/images/logo.png` to `<root>/images/logo.png`.
#[derive(Debug, Clone)]
pub struct FsReader {
    root: PathBuf,
}

impl FsReader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceReader for FsReader {
    fn open(&self, path: &str) -> Result<Box<dyn Read>, ResolveError> {
        let full = self.root.join(path.trim_start_matches('/'));
        match File::open(&full) {
            Ok(file) => Ok(Box::new(file)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ResolveError::NotFound(path.to_string()))
            }
            Err(e) => Err(ResolveError::Io(path.to_string(), e)),
        }
    }
}

// ============================================================================
// Generator Registries
// ============================================================================

/// Registry for deployments with no generated resources.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGenerators;

impl GeneratorRegistry for NoGenerators {
    fn is_generated(&self, _path: &str) -> bool {
        false
    }
}

/// Registry matching generated resources by scheme-like path prefix
/// (e.g. `sprite:` or `jar:`).
#[derive(Debug, Clone, Default)]
pub struct PrefixGenerators {
    prefixes: Vec<String>,
}

impl PrefixGenerators {
    pub fn new(prefixes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }
}

impl GeneratorRegistry for PrefixGenerators {
    fn is_generated(&self, path: &str) -> bool {
        self.prefixes.iter().any(|p| path.starts_with(p.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_fs_reader_opens_relative_to_root() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("css")).unwrap();
        fs::write(dir.path().join("css/site.css"), "body {}").unwrap();

        let reader = FsReader::new(dir.path());
        let mut content = String::new();
        reader
            .open("/css/site.css")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "body {}");
    }

    #[test]
    fn test_fs_reader_not_found() {
        let dir = TempDir::new().unwrap();
        let reader = FsReader::new(dir.path());

        let err = reader.open("/missing.css").err().unwrap();
        assert!(matches!(err, ResolveError::NotFound(p) if p == "/missing.css"));
    }

    #[test]
    fn test_prefix_generators() {
        let registry = PrefixGenerators::new(["sprite:", "jar:"]);
        assert!(registry.is_generated("sprite:/global/all.png"));
        assert!(registry.is_generated("jar:/META-INF/icons/x.png"));
        assert!(!registry.is_generated("/images/a.png"));
        assert!(!NoGenerators.is_generated("sprite:/global/all.png"));
    }
}
