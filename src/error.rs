//! Resolution error taxonomy.
//!
//! Two of the three variants are recoverable: the engine logs them and
//! degrades to the unversioned path rather than failing the page render.
//! [`ResolveError::NotInitialized`] is a wiring defect and always
//! propagates.

use thiserror::Error;

/// Errors raised while resolving a resource.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The reader could not locate the resource.
    #[error("resource not found: `{0}`")]
    NotFound(String),

    /// The resource byte stream could not be fully read.
    #[error("failed to read resource `{0}`")]
    Io(String, #[source] std::io::Error),

    /// The resolver was used before the embedding application installed it.
    #[error(
        "resource resolver has not been initialized; \
         install a Resolver into the handle before rendering resource references"
    )]
    NotInitialized,
}

impl ResolveError {
    /// Whether the engine may recover by degrading to the unversioned path.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::NotInitialized)
    }
}
