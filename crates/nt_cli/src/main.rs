use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use nt_core::config::{DEFAULT_OUTPUT_DIR, DEFAULT_TIMEOUT_SECS};
use nt_core::{Config, Error, Result, RunOutcome};
use nt_scrappers::logging::init_logging;
use nt_scrappers::{HttpFetcher, SpeechManager};
use nt_storage::FileArchive;
use tracing::debug;

/// Archive the latest New Year speech published on kongehuset.dk
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding one <year>.md per speech
    #[arg(long, env = "NT_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
    /// Timeout for each HTTP request, in seconds
    #[arg(long, env = "NT_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
    /// Log every pipeline step
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config::default()
            .with_output_dir(self.output_dir.clone())
            .with_timeout(Duration::from_secs(self.timeout))
    }
}

async fn run(config: &Config) -> Result<RunOutcome> {
    let fetcher = Arc::new(HttpFetcher::new(config)?);
    let archive = Arc::new(FileArchive::new(config.output_dir.clone()));
    SpeechManager::new(fetcher, archive).run().await
}

fn diagnostic(error: &Error) -> String {
    match error {
        Error::Network(e) => format!("HTTP ERROR: {}", e),
        other => format!("ERROR: {}", other),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config();
    debug!(?config, "Starting");

    match run(&config).await {
        Ok(RunOutcome::Written { path, url, .. }) => {
            println!("Skrev: {}", path.display());
            println!("URL: {}", url);
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::AlreadyArchived { path, .. }) => {
            println!("OK: {} findes allerede. Ingen ændringer.", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(stage = e.stage(), network = e.is_network(), "Run failed");
            eprintln!("{}", diagnostic(&e));
            ExitCode::FAILURE
        }
    }
}
