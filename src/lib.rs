//! Cachebust - content-hashed URL resolution for static web resources.
//!
//! Resolves logical references to static resources (images, stylesheets,
//! scripts) into final, cache-friendly URLs. Every distinct resource gets a
//! URL carrying a token derived from its content, so browsers and proxies
//! can cache it forever without staleness risk. Small binary resources can
//! alternatively be inlined as `data:` URIs.
//!
//! The engine is an in-process library: the HTTP-facing layer supplies a
//! [`RequestContext`] per request and calls [`Resolver::resolve`], which
//! consults a process-wide artifact cache and only reads resource bytes on
//! a cache miss.
//!
//! # Example
//!
//! ```no_run
//! use cachebust::{FsReader, RequestContext, Resolver, ResolverConfig};
//!
//! let resolver = Resolver::new(ResolverConfig::default(), FsReader::new("webroot"));
//! let ctx = RequestContext::new("/pages/index.html", "");
//! let url = resolver.resolve("/images/logo.png", &ctx, false);
//! ```

pub mod bundle;
pub mod cache;
pub mod checksum;
pub mod config;
pub mod context;
pub mod error;
pub mod finish;
pub mod inline;
pub mod logger;
pub mod mime;
pub mod path;
pub mod reader;
pub mod resolver;

pub use cache::{ArtifactCache, CacheKey};
pub use checksum::ContentHash;
pub use config::{ConfigError, ResolverConfig, RewriteRules};
pub use context::RequestContext;
pub use error::ResolveError;
pub use mime::{MimeTable, MimeTypeProvider};
pub use reader::{FsReader, GeneratorRegistry, NoGenerators, PrefixGenerators, ResourceReader};
pub use resolver::{Resolver, ResolverHandle};
