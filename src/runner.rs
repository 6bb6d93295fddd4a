use crate::checks;
use crate::config::SiteConfig;
use crate::error::AuditError;
use crate::reachability::Checker;
use crate::report::{AuditReport, Diagnostic};
use crate::scope::ScopeFilter;
use crate::session::Session;
use std::time::Duration;

/// Runs the full check suite for the configured number of iterations
///
/// One WebDriver session is opened for the whole run and closed on every
/// exit path, including a check failing mid-iteration. An iteration count
/// below one is clamped to one.
pub async fn run(config: &SiteConfig, iterations: usize) -> Result<Vec<AuditReport>, AuditError> {
    let iterations = iterations.max(1);

    let scope = ScopeFilter::new(&config.base_url, &config.exclude_patterns)?;
    let checker = Checker::new(
        Duration::from_secs(config.request_timeout_secs),
        config.acceptable_statuses.iter().copied().collect(),
        config.max_concurrency,
    )?;

    let session = Session::connect(&config.webdriver_url).await?;
    let result = run_iterations(&session, config, &scope, &checker, iterations).await;
    session.close().await;
    result
}

async fn run_iterations(
    session: &Session,
    config: &SiteConfig,
    scope: &ScopeFilter,
    checker: &Checker,
    iterations: usize,
) -> Result<Vec<AuditReport>, AuditError> {
    ::log::info!("Starting {} audit iterations for {}", iterations, config.base_url);

    let mut reports = Vec::with_capacity(iterations);
    for iteration in 1..=iterations {
        ::log::debug!("Iteration {} of {}", iteration, iterations);

        session.goto(&config.base_url).await?;

        let mut report = checks::links::run(session, scope, checker).await?;

        if let Some(expected) = &config.expected_title {
            if let Some(diag) = checks::title::run(session, expected).await? {
                report.diagnostics.push(diag);
            }
        }

        if let Some(login) = &config.login {
            match checks::login::run(session, login).await {
                Ok(true) => ::log::info!("Login form submitted"),
                Ok(false) => {}
                // A missing element fails this check, not the run
                Err(AuditError::PageStructure(detail)) => {
                    ::log::error!("Login page structure changed: {}", detail);
                    report.diagnostics.push(Diagnostic::PageStructure {
                        check: "login".to_string(),
                        detail,
                    });
                }
                Err(e) => return Err(e),
            }
        }

        ::log::info!(
            "Iteration {} complete: {} links, {} diagnostics",
            iteration,
            report.total_links,
            report.diagnostics.len()
        );
        reports.push(report);
    }

    Ok(reports)
}
