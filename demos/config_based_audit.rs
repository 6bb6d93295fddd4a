use clap::Parser;
use page_audit::Audit;
use page_audit::config::SiteConfig;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to audit configuration file
    #[arg(short, long)]
    config: String,

    /// Override number of iterations
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Override max concurrency
    #[arg(long)]
    concurrency: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();

    // Load configuration from file
    let config_path = PathBuf::from(&args.config);
    let config = SiteConfig::from_file(config_path)?;

    println!("Audit configuration:");
    println!("  Base URL: {}", config.base_url);
    println!("  Max concurrency: {}", config.max_concurrency);
    println!("  WebDriver URL: {}", config.webdriver_url);

    let mut audit = Audit::with_config(config);
    if let Some(iterations) = args.iterations {
        audit = audit.with_iterations(iterations);
    }
    if let Some(concurrency) = args.concurrency {
        audit = audit.with_max_concurrency(concurrency);
    }

    let reports = audit.run().await?;

    for (iteration, report) in reports.iter().enumerate() {
        println!(
            "Iteration {}: {} links discovered, {} diagnostics",
            iteration + 1,
            report.total_links,
            report.diagnostics.len()
        );
        for diag in &report.diagnostics {
            println!("  {}", serde_json::to_string(diag)?);
        }
    }

    Ok(())
}
