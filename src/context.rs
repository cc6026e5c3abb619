//! Per-request environment context.
//!
//! Constructed fresh by the request-handling layer for every request and
//! discarded after use; the engine never mutates it.

/// Decision inputs the engine needs from the current request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Path of the page being rendered (relative references resolve
    /// against it). Carries the context path, as a request URI does.
    pub request_path: String,
    /// Deployment context path (`""` for root deployments).
    pub context_path: String,
    /// Whether the request arrived over TLS.
    pub ssl: bool,
    /// Whether the client cannot reliably render data URIs.
    pub legacy_browser: bool,
}

impl RequestContext {
    pub fn new(request_path: impl Into<String>, context_path: impl Into<String>) -> Self {
        Self {
            request_path: request_path.into(),
            context_path: context_path.into(),
            ssl: false,
            legacy_browser: false,
        }
    }

    pub fn with_ssl(mut self, ssl: bool) -> Self {
        self.ssl = ssl;
        self
    }

    pub fn with_legacy_browser(mut self, legacy: bool) -> Self {
        self.legacy_browser = legacy;
        self
    }

    /// Classify the client from its `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.legacy_browser = is_legacy_user_agent(user_agent);
        self
    }
}

/// Whether a `User-Agent` value names a browser incapable of rendering
/// data URIs (IE 7 and older).
pub fn is_legacy_user_agent(user_agent: &str) -> bool {
    ["MSIE 5.", "MSIE 6.", "MSIE 7."]
        .iter()
        .any(|marker| user_agent.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    const IE6: &str = "Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1)";
    const IE8: &str = "Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1; Trident/4.0)";
    const FIREFOX: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";

    #[test]
    fn test_is_legacy_user_agent() {
        assert!(is_legacy_user_agent(IE6));
        assert!(is_legacy_user_agent(
            "Mozilla/4.0 (compatible; MSIE 7.0; Windows NT 5.1)"
        ));
        assert!(!is_legacy_user_agent(IE8));
        assert!(!is_legacy_user_agent(FIREFOX));
    }

    #[test]
    fn test_context_builders() {
        let ctx = RequestContext::new("/app/pages/x.jsp", "/app")
            .with_ssl(true)
            .with_user_agent(IE6);
        assert_eq!(ctx.request_path, "/app/pages/x.jsp");
        assert_eq!(ctx.context_path, "/app");
        assert!(ctx.ssl);
        assert!(ctx.legacy_browser);
    }
}
