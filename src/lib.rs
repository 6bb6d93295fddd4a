// Re-export modules
pub mod anchors;
pub mod checks;
pub mod config;
pub mod error;
pub mod reachability;
pub mod report;
pub mod runner;
pub mod scope;
pub mod session;

// Re-export commonly used types for convenience
pub use error::AuditError;
pub use report::{AuditReport, ConnectionResult, Diagnostic, Link};

use config::{LoginConfig, SiteConfig};

/// Main builder for auditing a site
pub struct Audit {
    config: SiteConfig,
    iterations: usize,
}

impl Audit {
    /// Create a new audit for the given page URL
    pub fn new(base_url: &str) -> Self {
        Self {
            config: SiteConfig::new(base_url),
            iterations: 1,
        }
    }

    /// Create an audit from an existing configuration
    pub fn with_config(config: SiteConfig) -> Self {
        Self {
            config,
            iterations: 1,
        }
    }

    /// Load the configuration from a JSON file
    pub fn with_config_file(path: impl AsRef<std::path::Path>) -> Result<Self, AuditError> {
        let config = SiteConfig::from_file(path)?;
        Ok(Self::with_config(config))
    }

    /// Override the page URL under audit
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.config.base_url = base_url.to_string();
        self
    }

    /// Set the expected page title
    pub fn with_expected_title(mut self, title: &str) -> Self {
        self.config.expected_title = Some(title.to_string());
        self
    }

    /// Set how many times to run the check suite
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the maximum number of concurrent reachability requests
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.config.max_concurrency = max_concurrency;
        self
    }

    /// Set the per-request timeout for reachability checks
    pub fn with_request_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.request_timeout_secs = timeout_seconds;
        self
    }

    /// Enable the login check with the given settings
    pub fn with_login(mut self, login: LoginConfig) -> Self {
        self.config.login = Some(login);
        self
    }

    /// Run the audit and collect one report per iteration
    pub async fn run(mut self) -> Result<Vec<AuditReport>, AuditError> {
        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.config.webdriver_url = webdriver_url;
            }
        }

        runner::run(&self.config, self.iterations).await
    }
}
