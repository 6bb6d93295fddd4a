use crate::error::AuditError;
use fantoccini::elements::Element;
use fantoccini::{Client, ClientBuilder, Locator};

/// Alternative WebDriver endpoints probed when the configured one is down
const FALLBACK_URLS: [&str; 3] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4444", // geckodriver / Selenium default
    "http://127.0.0.1:4444", // IP instead of localhost
];

/// An owned browser session
///
/// Wraps the WebDriver client behind the handful of operations the checks
/// need. The session is created by the runner, passed by reference to each
/// check, and closed by the runner on every exit path. Nothing else holds
/// the client.
pub struct Session {
    client: Client,
}

impl Session {
    /// Connect to a WebDriver server, probing common fallback endpoints if
    /// the configured one does not answer
    pub async fn connect(webdriver_url: &str) -> Result<Self, AuditError> {
        let primary_err = match ClientBuilder::native().connect(webdriver_url).await {
            Ok(client) => {
                ::log::debug!("Connected to WebDriver at {}", webdriver_url);
                return Ok(Self { client });
            }
            Err(e) => e,
        };
        ::log::error!(
            "Failed to connect to WebDriver at {}: {}",
            webdriver_url,
            primary_err
        );

        for url in FALLBACK_URLS.iter() {
            if *url == webdriver_url {
                continue;
            }
            ::log::info!("Trying fallback WebDriver URL: {}", url);
            if let Ok(client) = ClientBuilder::native().connect(url).await {
                ::log::debug!("Connected to fallback WebDriver at {}", url);
                return Ok(Self { client });
            }
        }

        ::log::error!(
            "Could not reach any WebDriver server; start one or set the WEBDRIVER_URL environment variable"
        );
        Err(AuditError::Connect(primary_err))
    }

    /// Navigate the browser to a URL
    pub async fn goto(&self, url: &str) -> Result<(), AuditError> {
        self.client.goto(url).await?;
        Ok(())
    }

    /// Title of the current page
    pub async fn title(&self) -> Result<String, AuditError> {
        Ok(self.client.title().await?)
    }

    /// Full HTML source of the current page
    pub async fn source(&self) -> Result<String, AuditError> {
        Ok(self.client.source().await?)
    }

    /// Click the element matching a CSS selector
    pub async fn click(&self, selector: &str) -> Result<(), AuditError> {
        self.find(selector).await?.click().await?;
        Ok(())
    }

    /// Type text into the element matching a CSS selector
    pub async fn type_into(&self, selector: &str, text: &str) -> Result<(), AuditError> {
        self.find(selector).await?.send_keys(text).await?;
        Ok(())
    }

    /// End the session; a close failure is logged, not propagated
    pub async fn close(self) {
        if let Err(e) = self.client.close().await {
            ::log::warn!("Failed to close WebDriver session: {}", e);
        }
    }

    async fn find(&self, selector: &str) -> Result<Element, AuditError> {
        match self.client.find(Locator::Css(selector)).await {
            Ok(element) => Ok(element),
            Err(e) if e.is_no_such_element() => Err(AuditError::PageStructure(
                format!("no element matching `{}`", selector),
            )),
            Err(e) => Err(AuditError::WebDriver(e)),
        }
    }
}
