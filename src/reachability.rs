use crate::error::AuditError;
use crate::report::ConnectionResult;
use futures::{StreamExt, stream};
use reqwest::Client;
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default set of HTTP statuses treated as reachable
pub fn default_acceptable_statuses() -> HashSet<u16> {
    HashSet::from([200])
}

/// HTTP reachability checker
///
/// Wraps a single shared client so repeated checks against the same host
/// reuse connections. Every request carries an explicit timeout so a dead
/// host cannot stall the audit.
#[derive(Debug, Clone)]
pub struct Checker {
    client: Client,
    acceptable_statuses: HashSet<u16>,
    max_concurrency: usize,
}

impl Checker {
    /// Create a checker with the given timeout, acceptable statuses and
    /// concurrency bound
    pub fn new(
        timeout: Duration,
        acceptable_statuses: HashSet<u16>,
        max_concurrency: usize,
    ) -> Result<Self, AuditError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            acceptable_statuses,
            max_concurrency: max_concurrency.max(1),
        })
    }

    /// Checker with default timeout and statuses
    pub fn with_defaults(max_concurrency: usize) -> Result<Self, AuditError> {
        Self::new(
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_acceptable_statuses(),
            max_concurrency,
        )
    }

    /// Checks whether a single URL is reachable
    pub async fn check(&self, url: &str) -> ConnectionResult {
        self.check_with_status(url).await.0
    }

    /// Checks a single URL, also returning the observed HTTP status if a
    /// response came back
    pub async fn check_with_status(&self, url: &str) -> (ConnectionResult, Option<u16>) {
        // An unparsable URL never hits the network
        if Url::parse(url).is_err() {
            ::log::warn!("Not a valid URL, skipping request: {}", url);
            return (ConnectionResult::Malformed, None);
        }

        match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                if self.acceptable_statuses.contains(&status) {
                    ::log::trace!("Reachable ({}): {}", status, url);
                    (ConnectionResult::Reachable, Some(status))
                } else {
                    ::log::debug!("Unacceptable status {} for: {}", status, url);
                    (ConnectionResult::Unreachable, Some(status))
                }
            }
            Err(e) => {
                ::log::debug!("Request failed for {}: {}", url, e);
                (ConnectionResult::Unreachable, None)
            }
        }
    }

    /// Checks many URLs with bounded concurrency
    ///
    /// Input pairs carry the caller's discovery index; the output is sorted
    /// by that index, so the report order never depends on which request
    /// finished first.
    pub async fn check_all(
        &self,
        urls: Vec<(usize, String)>,
    ) -> Vec<(usize, ConnectionResult, Option<u16>)> {
        let mut results: Vec<(usize, ConnectionResult, Option<u16>)> = stream::iter(urls)
            .map(|(index, url)| {
                let checker = self;
                async move {
                    let (result, status) = checker.check_with_status(&url).await;
                    (index, result, status)
                }
            })
            .buffer_unordered(self.max_concurrency)
            .collect()
            .await;

        results.sort_by_key(|(index, _, _)| *index);
        results
    }
}
