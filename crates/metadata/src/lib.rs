//! Movie metadata lookup for the catalog.
//!
//! This crate defines the capability the interaction loop uses to find
//! movies by title and enrich a chosen result with full details, plus an
//! implementation backed by the OMDb HTTP API.
//!
//! Calls are blocking: the menu loop waits on each request and nothing is
//! retried.

use catalog::Movie;
use thiserror::Error;

pub mod omdb;

pub use omdb::{OmdbClient, OmdbConfig, DEFAULT_OMDB_URL};

/// Errors that can occur when talking to a metadata provider
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("no OMDb API key configured (set OMDB_API_KEY or pass --api-key)")]
    MissingApiKey,

    #[error("request to metadata service failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("metadata service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("metadata service error: {0}")]
    Api(String),

    #[error("invalid response from metadata service: {0}")]
    Decode(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, MetadataError>;

/// Source of movie metadata.
///
/// `search` returns candidates in the provider's relevance order; they
/// usually carry only a title, a year and an id. `fetch_details` takes one
/// of those candidates and returns the full record that gets stored.
pub trait MetadataProvider {
    /// Find movies whose title matches `title`.
    ///
    /// No matches is an empty list, not an error.
    fn search(&self, title: &str) -> Result<Vec<Movie>>;

    /// Fetch the complete record for a search candidate
    fn fetch_details(&self, candidate: &Movie) -> Result<Movie>;
}

impl<T: MetadataProvider + ?Sized> MetadataProvider for &T {
    fn search(&self, title: &str) -> Result<Vec<Movie>> {
        (**self).search(title)
    }

    fn fetch_details(&self, candidate: &Movie) -> Result<Movie> {
        (**self).fetch_details(candidate)
    }
}

impl<T: MetadataProvider + ?Sized> MetadataProvider for Box<T> {
    fn search(&self, title: &str) -> Result<Vec<Movie>> {
        (**self).search(title)
    }

    fn fetch_details(&self, candidate: &Movie) -> Result<Movie> {
        (**self).fetch_details(candidate)
    }
}
