mod commands;
mod display;

use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "orgrepos",
    version,
    about = "List a GitHub organization's public repositories"
)]
pub struct Cli {
    /// Output results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Show verbose output (request and cache debug logging)
    #[arg(long, global = true)]
    verbose: bool,

    /// GitHub API root to use instead of the configured one
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show an organization's metadata
    Org {
        /// Organization login (defaults to the configured org)
        org: Option<String>,
    },
    /// List an organization's public repositories
    Repos {
        /// Organization login (defaults to the configured org)
        org: Option<String>,
        /// Only show repositories with this license key (e.g. apache-2.0)
        #[arg(long)]
        license: Option<String>,
    },
    /// Fetch a URL and print its JSON body
    Get {
        /// URL to fetch
        url: String,
        /// Dot-separated key path to print instead of the whole body
        #[arg(long)]
        path: Option<String>,
    },
    /// Show or update the saved configuration
    Config {
        /// API root to save as the default
        #[arg(long)]
        url: Option<String>,
        /// Organization to use when none is given
        #[arg(long)]
        org: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Org { org } => commands::org::run(org, &cli.api_url, cli.json).await,
        Commands::Repos { org, license } => {
            commands::repos::run(org, license, &cli.api_url, cli.json).await
        }
        Commands::Get { url, path } => commands::get::run(url, path, &cli.api_url).await,
        Commands::Config { url, org } => commands::config::run(url, org),
    };

    if let Err(e) = result {
        display::error(&e.to_string());
        std::process::exit(1);
    }
}
