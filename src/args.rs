use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-audit")]
#[command(about = "Audits a live page: link reachability, title, login form")]
#[command(version)]
pub struct Args {
    /// URL of the page to audit; also the same-origin prefix for links
    #[arg(required_unless_present = "config")]
    pub url: Option<String>,

    /// Expected page title (exact match)
    #[arg(short, long)]
    pub expected_title: Option<String>,

    /// Number of times to run the check suite [default: 1]
    #[arg(short, long)]
    pub iterations: Option<usize>,

    /// Maximum concurrent reachability requests [default: 5]
    #[arg(short, long)]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds for reachability checks [default: 5]
    #[arg(long)]
    pub request_timeout: Option<u64>,

    /// JSON configuration file; flags given alongside it take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Login username (the login check runs when --password is also given)
    #[arg(long)]
    pub username: Option<String>,

    /// Login password
    #[arg(long)]
    pub password: Option<String>,
}
