//! Process-wide artifact cache keyed by logical resource path.
//!
//! Thread-safe mapping from [`CacheKey`] to a computed artifact (versioned
//! URL or data URI). Callers compute artifacts outside the cache and then
//! publish them; concurrent duplicate computation is accepted because every
//! computation of the same key is idempotent, and the first published value
//! wins so a torn or divergent entry can never be observed.

use dashmap::DashMap;

/// Cache key: the artifact namespace paired with the canonical path.
///
/// A resource can hold a versioned-URL entry and a data-URI entry at the
/// same time without collision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Cache-busted URL namespace.
    Url(String),
    /// Base64 data-URI namespace.
    DataUri(String),
}

impl CacheKey {
    /// The canonical resource path this key addresses.
    pub fn path(&self) -> &str {
        match self {
            Self::Url(p) | Self::DataUri(p) => p,
        }
    }
}

/// Concurrent resource-artifact cache (thread-safe).
#[derive(Debug, Default)]
pub struct ArtifactCache {
    entries: DashMap<CacheKey, String>,
}

impl ArtifactCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Look up the artifact for a key.
    pub fn get(&self, key: &CacheKey) -> Option<String> {
        self.entries.get(key).map(|r| r.clone())
    }

    /// Publish a computed artifact, returning the cached value.
    ///
    /// Insert-if-absent: if another thread published the same key first,
    /// its value is kept and returned. Only call after a successful
    /// compute; failures must never be published.
    pub fn publish(&self, key: CacheKey, artifact: String) -> String {
        self.entries.entry(key).or_insert(artifact).clone()
    }

    /// Drop the entry for a key (both namespaces are independent).
    pub fn invalidate(&self, key: &CacheKey) {
        self.entries.remove(key);
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
