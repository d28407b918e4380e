//! Job-Harvest main entry point
//!
//! This is the command-line interface for the Job-Harvest service.

use anyhow::Context;
use clap::{Parser, Subcommand};
use job_harvest::config::{load_config_with_hash, Config};
use job_harvest::crawler::Harvester;
use job_harvest::output::{export_report, write_report, ExportFormat};
use job_harvest::url::SearchQuery;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Job-Harvest: a paginated job-listing harvester
///
/// Crawls every results page of a job board search and returns the
/// deduplicated list of job titles and links, either over HTTP or once
/// from the command line.
#[derive(Parser, Debug)]
#[command(name = "job-harvest")]
#[command(version)]
#[command(about = "A paginated job-listing harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service (default)
    Serve {
        /// Address to listen on, overriding the config file
        #[arg(short, long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Crawl once and print or export the results
    Crawl {
        /// Search term
        query: String,

        /// Restrict to internships when no filter codes are given
        #[arg(long)]
        intern: bool,

        /// Filter codes, comma separated (e.g. 1,3)
        #[arg(long, value_delimiter = ',')]
        et: Vec<u32>,

        /// Write results to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },

    /// Validate the configuration and print it
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = load_configuration(cli.config.as_ref())?;

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => handle_serve(config, bind).await,
        Command::Crawl {
            query,
            intern,
            et,
            output,
            format,
        } => {
            let query = SearchQuery::new(query).intern(intern).with_filter_codes(et);
            handle_crawl(config, query, output, format).await
        }
        Command::CheckConfig => handle_check_config(&config),
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// `RUST_LOG`, when set, takes precedence over the flags.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else {
            match verbose {
                0 => EnvFilter::new("job_harvest=info,tower_http=info,warn"),
                1 => EnvFilter::new("job_harvest=debug,tower_http=debug,info"),
                2 => EnvFilter::new("job_harvest=trace,debug"),
                _ => EnvFilter::new("trace"),
            }
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_configuration(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::info!("No configuration file given, using built-in defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);
    Ok(config)
}

/// Runs the HTTP service until Ctrl-C
async fn handle_serve(mut config: Config, bind: Option<String>) -> anyhow::Result<()> {
    if let Some(bind) = bind {
        config.server.bind_address = bind;
    }

    let harvester = Harvester::new(&config).context("Failed to build harvester")?;

    tracing::info!(
        "Crawling {} (POST /jobs on {})",
        config.site.base_url,
        config.server.bind_address
    );

    job_harvest::server::serve(&config.server.bind_address, harvester)
        .await
        .context("Server error")?;

    Ok(())
}

/// Runs one crawl and writes its results
async fn handle_crawl(
    config: Config,
    query: SearchQuery,
    output: Option<PathBuf>,
    format: ExportFormat,
) -> anyhow::Result<()> {
    let harvester = Harvester::new(&config).context("Failed to build harvester")?;

    let report = harvester
        .crawl(&query)
        .await
        .with_context(|| format!("Crawl for {:?} failed", query.term))?;

    if !report.is_complete() {
        tracing::warn!("Pages skipped after fetch errors: {:?}", report.skipped_pages());
    }

    match output {
        Some(path) => export_report(&report, &path, format)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => write_report(&report, format, std::io::stdout().lock())?,
    }

    Ok(())
}

/// Validates the configuration and prints the resolved values
fn handle_check_config(config: &Config) -> anyhow::Result<()> {
    job_harvest::config::validate(config)?;

    println!("=== Job-Harvest Configuration ===\n");
    println!("{}", toml::to_string_pretty(config)?);
    println!("✓ Configuration is valid");

    Ok(())
}
