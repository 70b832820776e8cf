//! Command-line and environment configuration.
//!
//! Everything is optional: with no flags the app starts, and only adding a
//! movie needs an OMDb API key.

use std::time::Duration;

use clap::Parser;
use metadata::{OmdbConfig, DEFAULT_OMDB_URL};

/// Genre Movies - browse, add and rate movies by genre
#[derive(Parser, Debug)]
#[command(name = "genre-movies")]
#[command(about = "Interactive movie catalog organised by genre", long_about = None)]
pub struct Cli {
    /// OMDb API key used to search for movies
    #[arg(long, env = "OMDB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the OMDb API
    #[arg(long, env = "OMDB_API_URL", default_value = DEFAULT_OMDB_URL)]
    pub api_url: String,

    /// Seconds to wait for each OMDb request
    #[arg(long, default_value = "10")]
    pub timeout_secs: u64,

    /// Log filter used when RUST_LOG is unset (logs go to stderr)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn omdb_config(&self) -> OmdbConfig {
        OmdbConfig {
            base_url: self.api_url.clone(),
            api_key: self.api_key.clone().filter(|key| !key.trim().is_empty()),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}
