//! fanout - fire a batch of concurrent fetches at a stub responder
//!
//! Starts the stub, dispatches the batch, logs the summary and exits. The
//! exit code only reflects setup problems; failed requests are part of a
//! normal run.

use clap::Parser;
use fetch_fanout::config::{Config, Preset};
use fetch_fanout::utils::error::Result;
use fetch_fanout::utils::init_logging;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "fanout", version, about)]
struct Cli {
    /// YAML configuration file
    #[arg(long, env = "FANOUT_CONFIG")]
    config: Option<PathBuf>,

    /// Canned timeout profile: strict or relaxed
    #[arg(long, env = "FANOUT_PRESET", default_value = "relaxed")]
    preset: Preset,

    /// Number of identifiers in the batch
    #[arg(long, env = "FANOUT_SIZE")]
    size: Option<usize>,

    /// Target base URL instead of the started stub
    #[arg(long, env = "FANOUT_BASE_URL")]
    base_url: Option<String>,

    /// Do not start the stub responder
    #[arg(long, env = "FANOUT_NO_STUB")]
    no_stub: bool,

    /// Log level: debug, info, warn or error
    #[arg(long, env = "FANOUT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, env = "FANOUT_LOG_JSON")]
    log_json: bool,
}

impl Cli {
    /// Preset, then file, then flags
    async fn load_config(&self) -> Result<Config> {
        let mut config = Config::preset(self.preset);

        if let Some(path) = &self.config {
            config = config.overlay_file(path).await?;
        }

        if let Some(size) = self.size {
            config.batch.size = size;
        }
        if let Some(base_url) = &self.base_url {
            config.client.base_url = Some(base_url.clone());
        }
        if self.no_stub {
            config.stub.enabled = false;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if self.log_json {
            config.logging.json = true;
        }

        config.validate()?;
        Ok(config)
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.load_config().await?;
    init_logging(config.logging())?;

    println!("Start");
    fetch_fanout::run_scenario(config).await?;
    println!("Done with all");

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
