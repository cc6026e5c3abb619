//! Environment-aware URL finishing.
//!
//! Applies the per-request rewriting stage after an artifact leaves the
//! cache: mapping-prefix join (or leading-slash strip when no mapping is
//! configured), then alternate-domain or context-path joining. Data URIs
//! never pass through here; they are not HTTP paths.

use crate::config::ResolverConfig;
use crate::path;

/// Rewrite a versioned URL for the current environment.
///
/// - With a mapping configured, the mapping prefix is joined with exactly
///   one separator.
/// - Without one, a single leading separator is stripped so the URL is
///   container-relative.
/// - The configured alternate domain for this request (see
///   [`crate::config::RewriteRules`]) is then joined; absent a domain the
///   context path is, so the URL stays addressable under the deployment.
pub fn finish_url(url: &str, config: &ResolverConfig, context_path: &str, ssl: bool) -> String {
    let url = if config.mapping.is_empty() {
        url.strip_prefix('/').unwrap_or(url).to_string()
    } else {
        path::join_paths(&config.mapping, url)
    };

    if let Some(domain) = config.rewrite.domain_for(ssl) {
        path::join_paths(domain, &url)
    } else if !context_path.is_empty() {
        path::join_paths(context_path, &url)
    } else {
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RewriteRules;

    fn config(mapping: &str) -> ResolverConfig {
        ResolverConfig {
            mapping: mapping.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_mapping_join_single_separator() {
        let url = finish_url("/images/a-v123.png", &config("static"), "", false);
        assert_eq!(url, "static/images/a-v123.png");

        let url = finish_url("/images/a-v123.png", &config("static/"), "", false);
        assert_eq!(url, "static/images/a-v123.png");
    }

    #[test]
    fn test_no_mapping_strips_leading_separator() {
        let url = finish_url("/images/a-v123.png", &config(""), "", false);
        assert_eq!(url, "images/a-v123.png");
    }

    #[test]
    fn test_context_path_prepended() {
        let url = finish_url("/images/a-v123.png", &config("static"), "/app", false);
        assert_eq!(url, "/app/static/images/a-v123.png");

        let url = finish_url("/images/a-v123.png", &config(""), "/app", false);
        assert_eq!(url, "/app/images/a-v123.png");
    }

    #[test]
    fn test_domain_rewrite() {
        let mut config = config("static");
        config.rewrite = RewriteRules {
            domain: Some("http://static.example.com".into()),
            ssl_domain: Some("https://secure.example.com".into()),
        };

        let url = finish_url("/images/a-v123.png", &config, "/app", false);
        assert_eq!(url, "http://static.example.com/static/images/a-v123.png");

        // Secure request picks the TLS domain, context path is irrelevant
        let url = finish_url("/images/a-v123.png", &config, "/app", true);
        assert_eq!(url, "https://secure.example.com/static/images/a-v123.png");
    }

    #[test]
    fn test_tls_without_ssl_domain_stays_context_relative() {
        let mut config = config("");
        config.rewrite = RewriteRules {
            domain: Some("http://static.example.com".into()),
            ssl_domain: None,
        };

        let url = finish_url("/images/a-v123.png", &config, "/app", true);
        assert_eq!(url, "/app/images/a-v123.png");
    }
}
