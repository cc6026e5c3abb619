//! `[rewrite]` section: alternate-domain rules.
//!
//! The finisher supplies the decision inputs (URL, TLS flag, context path)
//! and applies whatever rule this section returns. A secure request is
//! only rewritten to `ssl_domain`; serving a plain-HTTP domain on a secure
//! page would trip mixed-content blocking, so absent `ssl_domain` the URL
//! stays context-relative.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Alternate/CDN domain substitution rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteRules {
    /// Domain resource URLs are rewritten to on plain-HTTP requests,
    /// e.g. `http://static.example.com`.
    pub domain: Option<String>,

    /// Domain used when the inbound request arrived over TLS.
    pub ssl_domain: Option<String>,
}

impl RewriteRules {
    /// The domain to rewrite to for this request, if any.
    pub fn domain_for(&self, ssl: bool) -> Option<&str> {
        if ssl {
            self.ssl_domain.as_deref()
        } else {
            self.domain.as_deref()
        }
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("domain", &self.domain), ("ssl_domain", &self.ssl_domain)] {
            if let Some(domain) = value
                && domain.is_empty()
            {
                return Err(ConfigError::Validation(format!(
                    "rewrite.{field} must not be empty; omit the field instead"
                )));
            }
        }
        if let Some(domain) = &self.ssl_domain
            && domain.starts_with("http://")
        {
            return Err(ConfigError::Validation(
                "rewrite.ssl_domain must not use plain http".to_string(),
            ));
        }
        Ok(())
    }
}
