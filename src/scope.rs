use crate::error::AuditError;
use regex::Regex;
use url::Url;

/// Decides which discovered links belong to the site under audit
///
/// Membership is a prefix test against the configured origin, the way the
/// links appear to the page author: relative hrefs are resolved against the
/// origin first. Exclude patterns let asset URLs (images, stylesheets) be
/// skipped without a diagnostic.
#[derive(Debug)]
pub struct ScopeFilter {
    origin: String,
    base: Url,
    exclude_regexes: Vec<Regex>,
}

impl ScopeFilter {
    /// Create a scope filter for the given origin
    pub fn new(origin: &str, exclude_patterns: &[String]) -> Result<Self, AuditError> {
        let base = Url::parse(origin)
            .map_err(|e| AuditError::Config(format!("invalid origin `{}`: {}", origin, e)))?;

        let mut exclude_regexes = Vec::with_capacity(exclude_patterns.len());
        for pattern in exclude_patterns {
            let regex = Regex::new(pattern)
                .map_err(|e| AuditError::Config(format!("invalid pattern `{}`: {}", pattern, e)))?;
            exclude_regexes.push(regex);
        }

        Ok(Self {
            origin: origin.trim_end_matches('/').to_string(),
            base,
            exclude_regexes,
        })
    }

    /// Resolve an href against the origin, yielding an absolute URL string
    ///
    /// Hrefs that cannot be resolved are returned unchanged; the
    /// reachability check will classify them.
    pub fn resolve(&self, href: &str) -> String {
        match self.base.join(href) {
            Ok(resolved) => resolved.to_string(),
            Err(_) => href.to_string(),
        }
    }

    /// Whether a resolved URL belongs to the audited site
    pub fn in_scope(&self, url: &str) -> bool {
        if !url.starts_with(&self.origin) {
            return false;
        }
        for regex in &self.exclude_regexes {
            if regex.is_match(url) {
                return false;
            }
        }
        true
    }

    /// Strip the fragment from a URL; fragments never change what the
    /// server answers
    pub fn normalize(&self, url: &str) -> String {
        match Url::parse(url) {
            Ok(mut parsed) => {
                parsed.set_fragment(None);
                parsed.to_string()
            }
            Err(_) => url.to_string(),
        }
    }
}
