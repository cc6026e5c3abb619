//! Resource resolution orchestration.
//!
//! [`Resolver`] wires the normalizer, checksum computer, inliner, cache
//! and finisher together behind the single entry point the presentation
//! layer calls. All collaborators are constructor-injected; nothing is
//! looked up from ambient global state.

use std::sync::{Arc, OnceLock};

use crate::cache::{ArtifactCache, CacheKey};
use crate::checksum;
use crate::config::ResolverConfig;
use crate::log;
use crate::context::RequestContext;
use crate::error::ResolveError;
use crate::finish;
use crate::inline;
use crate::mime::{MimeTable, MimeTypeProvider};
use crate::path;
use crate::reader::{GeneratorRegistry, NoGenerators, ResourceReader};

/// Resolves logical resource references into final URLs or data URIs.
///
/// One instance per deployment, shared across request-handling threads.
/// Resolution is synchronous on the calling thread; on a cache miss the
/// resource is read and hashed outside any cache lock, and duplicate
/// concurrent computation converges on one published artifact.
pub struct Resolver {
    config: ResolverConfig,
    cache: ArtifactCache,
    reader: Arc<dyn ResourceReader>,
    generators: Arc<dyn GeneratorRegistry>,
    mime: Arc<dyn MimeTypeProvider>,
}

impl Resolver {
    /// Create a resolver over a reader, with no generated resources and
    /// the MIME table derived from the config overrides.
    pub fn new(config: ResolverConfig, reader: impl ResourceReader + 'static) -> Self {
        let mime = MimeTable::with_overrides(config.mime.clone());
        Self {
            config,
            cache: ArtifactCache::new(),
            reader: Arc::new(reader),
            generators: Arc::new(NoGenerators),
            mime: Arc::new(mime),
        }
    }

    /// Replace the generator registry.
    pub fn with_generators(mut self, generators: impl GeneratorRegistry + 'static) -> Self {
        self.generators = Arc::new(generators);
        self
    }

    /// Replace the MIME table provider.
    pub fn with_mime(mut self, mime: impl MimeTypeProvider + 'static) -> Self {
        self.mime = Arc::new(mime);
        self
    }

    /// Resolve a resource reference to its final artifact.
    ///
    /// Inlining happens only when requested *and* the client can render
    /// data URIs; a legacy browser falls back to the versioned URL before
    /// any encoding work is done. Recoverable failures degrade: a broken
    /// resource must never block the page render.
    pub fn resolve(&self, src: &str, ctx: &RequestContext, allow_inline: bool) -> String {
        let key_path = self.canonical_path(src, ctx);

        if allow_inline && !ctx.legacy_browser {
            match self.data_uri_for(&key_path) {
                Ok(uri) => return uri,
                Err(e) => {
                    log!("resolve"; "unable to inline '{key_path}', falling back to URL: {e}");
                }
            }
        }

        self.url_for(&key_path, ctx)
    }

    /// Resolve a resource reference to a cache-busted URL (never inlines).
    pub fn url(&self, src: &str, ctx: &RequestContext) -> String {
        let key_path = self.canonical_path(src, ctx);
        self.url_for(&key_path, ctx)
    }

    /// Resolve a resource reference to a data URI.
    ///
    /// Unlike [`Resolver::resolve`], failures surface to the caller so it
    /// can distinguish "absent" from an artifact.
    pub fn data_uri(&self, src: &str, ctx: &RequestContext) -> Result<String, ResolveError> {
        let key_path = self.canonical_path(src, ctx);
        self.data_uri_for(&key_path)
    }

    /// Drop the cached artifacts for a logical path (both namespaces).
    ///
    /// Administrative hook for the owner that knows the underlying content
    /// changed; the next request recomputes.
    pub fn invalidate(&self, key_path: &str) {
        self.cache.invalidate(&CacheKey::Url(key_path.to_string()));
        self.cache.invalidate(&CacheKey::DataUri(key_path.to_string()));
    }

    /// The artifact cache (exposed for the owning invalidation layer).
    pub fn cache(&self) -> &ArtifactCache {
        &self.cache
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    /// Canonical, context-independent key for a resource reference.
    ///
    /// Generated resources and site-absolute references are used as-is;
    /// anything else resolves against the current request's path and has
    /// the context prefix stripped.
    fn canonical_path(&self, src: &str, ctx: &RequestContext) -> String {
        if self.generators.is_generated(src) || src.starts_with('/') {
            return src.to_string();
        }
        let joined = path::concat_web_path(&ctx.request_path, src);
        path::strip_context_path(&joined, &ctx.context_path).to_string()
    }

    fn url_for(&self, key_path: &str, ctx: &RequestContext) -> String {
        let key = CacheKey::Url(key_path.to_string());
        let url = match self.cache.get(&key) {
            Some(url) => url,
            None => match checksum::cache_busted_url(key_path, self.reader.as_ref()) {
                Ok(url) => self.cache.publish(key, url),
                Err(e) => {
                    // Not cached: the next request retries the computation.
                    // The raw reference is returned untouched; rewriting a
                    // path we could not even read would compound the failure.
                    log!("resolve"; "unable to checksum '{key_path}': {e}");
                    return key_path.to_string();
                }
            },
        };

        finish::finish_url(&url, &self.config, &ctx.context_path, ctx.ssl)
    }

    fn data_uri_for(&self, key_path: &str) -> Result<String, ResolveError> {
        let key = CacheKey::DataUri(key_path.to_string());
        if let Some(uri) = self.cache.get(&key) {
            return Ok(uri);
        }
        let uri = inline::data_uri(key_path, self.reader.as_ref(), self.mime.as_ref())?;
        Ok(self.cache.publish(key, uri))
    }
}

// ============================================================================
// Resolver Handle
// ============================================================================

/// Install-once cell for the deployment-wide [`Resolver`].
///
/// Owned by the embedding application (not a process global): the wiring
/// layer installs the resolver at startup and hands the cell to the
/// presentation layer. Using it before installation is a deployment
/// defect and surfaces as [`ResolveError::NotInitialized`].
#[derive(Default)]
pub struct ResolverHandle {
    inner: OnceLock<Resolver>,
}

impl ResolverHandle {
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Install the resolver. Returns false if one was already installed.
    pub fn install(&self, resolver: Resolver) -> bool {
        self.inner.set(resolver).is_ok()
    }

    /// The installed resolver, or the fatal not-initialized error.
    pub fn get(&self) -> Result<&Resolver, ResolveError> {
        self.inner.get().ok_or(ResolveError::NotInitialized)
    }
}
