use crate::audit::record::ReportSchema;
use crate::audit::{AuditConfig, BatchAuditor};
use crate::console::ConsoleProgressReporter;
use crate::progress_reporter::ProgressReporter;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

mod audit;
mod console;
mod progress_reporter;
mod report;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CommandLineArgs {
    /// CSV file with a `url` column
    #[arg(long, default_value = "urls.csv")]
    input: PathBuf,

    /// Where to write the report
    #[arg(long, default_value = "seo_report.csv")]
    output: PathBuf,

    /// Keyword to measure, repeatable (defaults to SEO, optimization, content)
    #[arg(long = "keyword", value_name = "KEYWORD")]
    keywords: Vec<String>,

    /// Seconds to wait for each page
    #[arg(long, default_value_t = 10)]
    page_timeout: u64,

    /// Seconds to wait for each sitemap, robots.txt, header or link probe
    #[arg(long, default_value_t = 5)]
    probe_timeout: u64,

    /// Number of URLs audited at once
    #[arg(long, default_value_t = 1)]
    concurrency: usize,

    /// Number of broken-link checks in flight per page
    #[arg(long, default_value_t = 8)]
    link_concurrency: usize,

    /// Flag titles and descriptions repeated across the batch
    #[arg(long)]
    track_duplicates: bool,

    /// User agent sent with every request
    #[arg(long)]
    user_agent: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl CommandLineArgs {
    fn audit_config(&self) -> AuditConfig {
        AuditConfig::new(self.input.clone(), self.output.clone())
            .with_keywords(self.keywords.clone())
            .with_timeouts(
                Duration::from_secs(self.page_timeout),
                Duration::from_secs(self.probe_timeout),
            )
            .with_concurrency(self.concurrency, self.link_concurrency)
            .with_duplicate_tracking(self.track_duplicates)
            .with_user_agent(self.user_agent.clone())
    }
}

async fn main_impl(args: &CommandLineArgs) -> anyhow::Result<()> {
    let config = args.audit_config();
    let console_reporter = ConsoleProgressReporter::new();

    let urls = match report::read_urls(config.input()) {
        Ok(urls) => urls,
        Err(e) => {
            error!("Error reading input file {}: {}", config.input().display(), e);
            Vec::new()
        }
    };
    if urls.is_empty() {
        console_reporter.message("No URLs to analyze.");
        return Ok(());
    }

    // Set up a shutdown signal handler
    let shutdown_notify = Arc::new(tokio::sync::Notify::new());
    {
        let shutdown_notify = Arc::clone(&shutdown_notify);
        ctrlc::set_handler(move || {
            eprintln!("Received Ctrl+C, shutting down...");
            shutdown_notify.notify_one();
        })?;
    }

    let schema = ReportSchema::new(config.keywords());
    let batch_auditor = BatchAuditor::new(shutdown_notify, config.clone(), console_reporter)?;
    let summary = batch_auditor.run(&urls).await;
    info!(
        "Audited {} of {} URLs",
        summary.records().len(),
        urls.len()
    );

    report::write_report(config.output(), &schema, summary.records())?;
    batch_auditor.progress_reporter().report_saved(config.output());

    Ok(())
}

#[tokio::main]
async fn main() {
    let args = CommandLineArgs::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = main_impl(&args).await {
        error!("{:#}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
