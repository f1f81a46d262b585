mod extract;

use std::path::PathBuf;
use std::process::ExitCode;

use brandmark_extractor::{Extractor, ExtractorConfig};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "brandmark-cli")]
#[command(about = "Find a website's logo and social media profiles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract the logo and social profiles for one site
    Extract {
        /// Site URL, including scheme (e.g. `https://example.com`)
        url: String,
        /// Write the raw logo bytes to this path
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Print the JSON body the HTTP server would return
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    let config = brandmark_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let extractor = Extractor::new(ExtractorConfig::from_app_config(&config))?;

    match cli.command {
        Commands::Extract { url, output, json } => {
            let succeeded =
                extract::run_extract(&extractor, &url, output.as_deref(), json).await?;
            Ok(if succeeded {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
