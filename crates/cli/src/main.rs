use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, MovieApp, StdTerminal};
use colored::Colorize;
use metadata::OmdbClient;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing on stderr so logs stay out of the menu
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    let client = OmdbClient::new(cli.omdb_config()).context("Failed to build OMDb client")?;
    if !client.has_api_key() {
        eprintln!(
            "{} no OMDb API key set; adding movies will fail until OMDB_API_KEY is provided",
            "warning:".yellow().bold()
        );
    }

    info!(api_url = %cli.api_url, "Starting genre movies");
    let mut app = MovieApp::new(client);
    app.run(&mut StdTerminal::stdio())
}
