use thiserror::Error;

/// Errors produced while setting up or running an audit
#[derive(Debug, Error)]
pub enum AuditError {
    /// Configuration could not be loaded or is invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// Could not establish a WebDriver session
    #[error("failed to connect to WebDriver: {0}")]
    Connect(#[from] fantoccini::error::NewSessionError),

    /// A WebDriver command failed mid-check
    #[error("webdriver command failed: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),

    /// An expected page element is missing; the page structure has changed
    /// since the selectors were configured
    #[error("page structure changed: {0}")]
    PageStructure(String),

    /// The HTTP client for reachability checks could not be built
    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),
}
