use crate::error::AuditError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for a site audit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// URL of the page under audit; also the same-origin prefix for links
    pub base_url: String,

    /// Expected page title (exact match); skipped when absent
    #[serde(default)]
    pub expected_title: Option<String>,

    /// URL of the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Maximum number of concurrent reachability requests
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Per-request timeout in seconds for reachability checks
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// HTTP statuses treated as reachable
    #[serde(default = "default_acceptable_statuses")]
    pub acceptable_statuses: Vec<u16>,

    /// Regex patterns for same-origin URLs to skip without a diagnostic
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Login form settings; the login check is skipped when absent
    #[serde(default)]
    pub login: Option<LoginConfig>,
}

/// Settings for the login form check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginConfig {
    /// Account name to type into the form
    pub username: String,

    /// Password to type into the form
    pub password: String,

    /// CSS selector for the username field
    #[serde(default = "default_username_selector")]
    pub username_selector: String,

    /// CSS selector for the password field
    #[serde(default = "default_password_selector")]
    pub password_selector: String,

    /// CSS selector for the submit control
    #[serde(default = "default_submit_selector")]
    pub submit_selector: String,

    /// Case-insensitive title substring that marks a login page
    #[serde(default = "default_title_marker")]
    pub title_marker: String,
}

impl SiteConfig {
    /// Create a new configuration with default values
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            expected_title: None,
            webdriver_url: default_webdriver_url(),
            max_concurrency: default_max_concurrency(),
            request_timeout_secs: default_request_timeout_secs(),
            acceptable_statuses: default_acceptable_statuses(),
            exclude_patterns: Vec::new(),
            login: None,
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AuditError> {
        let mut file = File::open(&path).map_err(|e| {
            AuditError::Config(format!("cannot open {}: {}", path.as_ref().display(), e))
        })?;
        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(|e| {
            AuditError::Config(format!("cannot read {}: {}", path.as_ref().display(), e))
        })?;

        serde_json::from_str(&contents).map_err(|e| AuditError::Config(e.to_string()))
    }
}

impl LoginConfig {
    /// Login settings with default selectors and the given credentials
    pub fn with_credentials(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            username_selector: default_username_selector(),
            password_selector: default_password_selector(),
            submit_selector: default_submit_selector(),
            title_marker: default_title_marker(),
        }
    }
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default value for max_concurrency
fn default_max_concurrency() -> usize {
    5
}

/// Default per-request timeout
fn default_request_timeout_secs() -> u64 {
    crate::reachability::DEFAULT_TIMEOUT_SECS
}

/// Default acceptable status set
fn default_acceptable_statuses() -> Vec<u16> {
    vec![200]
}

fn default_username_selector() -> String {
    "input[name=username]".to_string()
}

fn default_password_selector() -> String {
    "input[name=password]".to_string()
}

fn default_submit_selector() -> String {
    "button[type=submit]".to_string()
}

fn default_title_marker() -> String {
    "login".to_string()
}
