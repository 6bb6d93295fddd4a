use clap::Parser;
use page_audit::config::LoginConfig;
use page_audit::{Audit, AuditError};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    println!("Note: the audit drives a live browser through a WebDriver server (e.g. ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
    );

    let audit = match build_audit(&args) {
        Ok(audit) => audit,
        Err(e) => {
            ::log::error!("Failed to set up audit: {}", e);
            std::process::exit(2);
        }
    };

    let start_time = std::time::Instant::now();
    let reports = match audit.run().await {
        Ok(reports) => reports,
        Err(e) => {
            ::log::error!("Audit failed: {}", e);
            std::process::exit(2);
        }
    };

    // One JSON line per iteration, findings summarized on the log
    let mut clean = true;
    for (iteration, report) in reports.iter().enumerate() {
        if let Ok(json) = serde_json::to_string(report) {
            println!("{}", json);
        }
        ::log::info!(
            "Iteration {}: {} links, {} diagnostics",
            iteration + 1,
            report.total_links,
            report.diagnostics.len()
        );
        if !report.is_clean() {
            clean = false;
        }
    }

    ::log::info!(
        "Audit complete: {} iterations in {:.2} seconds",
        reports.len(),
        start_time.elapsed().as_secs_f64()
    );

    if !clean {
        std::process::exit(1);
    }
}

/// Builds the audit from the parsed arguments
fn build_audit(args: &Args) -> Result<Audit, AuditError> {
    let mut audit = match (&args.config, &args.url) {
        (Some(path), _) => Audit::with_config_file(path)?,
        (None, Some(url)) => Audit::new(url),
        // clap rejects this combination before we get here
        (None, None) => {
            return Err(AuditError::Config(
                "either a URL or a configuration file is required".to_string(),
            ));
        }
    };

    if args.config.is_some() {
        if let Some(url) = &args.url {
            audit = audit.with_base_url(url);
        }
    }

    if let Some(iterations) = args.iterations {
        audit = audit.with_iterations(iterations);
    }
    if let Some(concurrency) = args.concurrency {
        audit = audit.with_max_concurrency(concurrency);
    }
    if let Some(timeout) = args.request_timeout {
        audit = audit.with_request_timeout(timeout);
    }
    if let Some(title) = &args.expected_title {
        audit = audit.with_expected_title(title);
    }

    if let (Some(username), Some(password)) = (&args.username, &args.password) {
        audit = audit.with_login(LoginConfig::with_credentials(username, password));
    }

    Ok(audit)
}
