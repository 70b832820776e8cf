//! OMDb (Open Movie Database) client.
//!
//! Two endpoints are used, both on the same base URL:
//! - search: `?s={title}&type=movie`, returns a short list of candidates
//! - details: `?i={imdbID}&plot=short`, returns the full record
//!
//! Every request carries the `apikey` query parameter.

use std::time::Duration;

use catalog::Movie;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::{MetadataError, MetadataProvider, Result};

pub const DEFAULT_OMDB_URL: &str = "https://www.omdbapi.com/";

const USER_AGENT: &str = concat!("genre-movies/", env!("CARGO_PKG_VERSION"));

// OMDb reports an empty search as an error payload with this text.
const NOT_FOUND_ERROR: &str = "Movie not found!";

/// Connection settings for [`OmdbClient`]
#[derive(Debug, Clone)]
pub struct OmdbConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OMDB_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }
}

// =============================================================================
// Response payloads
// =============================================================================

/// OMDb movie record, as found in search results and detail lookups
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbMovie {
    #[serde(rename = "Title")]
    pub title: String,
    /// "1999", "2005–2007", "2019–" or "N/A"
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "imdbID", default)]
    pub id: Option<String>,
    /// Every other field (Plot, Director, imdbRating, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<OmdbMovie> for Movie {
    fn from(record: OmdbMovie) -> Self {
        let mut extra = record.extra;
        extra.remove("Response");

        Movie {
            id: record.id,
            title: record.title,
            year: record.year.as_deref().and_then(parse_year),
            rating: None,
            extra,
        }
    }
}

/// `?s=` response
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Kept untyped so one malformed item doesn't sink the whole search
    #[serde(rename = "Search", default)]
    pub search: Vec<Value>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

/// `Response: "False"` payload
#[derive(Debug, Deserialize)]
pub struct ApiFailure {
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

/// `?i=` / `?t=` response: either a record or an API error
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DetailResponse {
    Found(OmdbMovie),
    Failed(ApiFailure),
}

// =============================================================================
// Client
// =============================================================================

/// Blocking OMDb API client
pub struct OmdbClient {
    http_client: reqwest::blocking::Client,
    config: OmdbConfig,
}

impl OmdbClient {
    pub fn new(config: OmdbConfig) -> Result<Self> {
        let http_client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Build a GET against the base URL with the key and `params` in the query
    fn request(&self, params: &[(&str, &str)]) -> Result<reqwest::blocking::Request> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(MetadataError::MissingApiKey)?;

        let request = self
            .http_client
            .get(&self.config.base_url)
            .query(&[("apikey", api_key)])
            .query(params)
            .build()?;
        Ok(request)
    }

    fn get<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T> {
        let request = self.request(params)?;
        debug!(url = %self.config.base_url, ?params, "Querying OMDb");

        let response = self.http_client.execute(request)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(MetadataError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .map_err(|e| MetadataError::Decode(e.to_string()))
    }
}

impl MetadataProvider for OmdbClient {
    fn search(&self, title: &str) -> Result<Vec<Movie>> {
        let payload: SearchResponse = self.get(&[("s", title), ("type", "movie")])?;
        let candidates = parse_search_response(payload)?;
        info!(query = %title, hits = candidates.len(), "OMDb search complete");
        Ok(candidates)
    }

    fn fetch_details(&self, candidate: &Movie) -> Result<Movie> {
        let payload: DetailResponse = self.get(&detail_params(candidate))?;
        let movie = parse_detail_response(payload)?;
        info!(title = %movie.title, id = ?movie.id, "Fetched OMDb details");
        Ok(movie)
    }
}

/// Query for a detail lookup: by id when the candidate has one, else by title
pub fn detail_params(candidate: &Movie) -> Vec<(&'static str, &str)> {
    let lookup = match candidate.id.as_deref() {
        Some(id) => ("i", id),
        None => ("t", candidate.title.as_str()),
    };
    vec![lookup, ("plot", "short")]
}

/// Turn a search payload into candidates.
///
/// A "Movie not found!" error payload is an empty result. Items that aren't
/// valid records are skipped.
pub fn parse_search_response(payload: SearchResponse) -> Result<Vec<Movie>> {
    if payload.response == "False" {
        let message = payload.error.unwrap_or_else(|| "unknown error".to_string());
        if message == NOT_FOUND_ERROR {
            return Ok(Vec::new());
        }
        return Err(MetadataError::Api(message));
    }

    let candidates = payload
        .search
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<OmdbMovie>(item) {
            Ok(record) => Some(Movie::from(record)),
            Err(err) => {
                warn!(error = %err, "Skipping malformed OMDb search item");
                None
            }
        })
        .collect();
    Ok(candidates)
}

/// Turn a detail payload into a full movie record
pub fn parse_detail_response(payload: DetailResponse) -> Result<Movie> {
    match payload {
        DetailResponse::Found(record) => Ok(record.into()),
        DetailResponse::Failed(failure) => Err(MetadataError::Api(
            failure.error.unwrap_or_else(|| "unknown error".to_string()),
        )),
    }
}

/// Leading four-digit year of an OMDb year field ("1999", "2005–2007", "2019–")
fn parse_year(raw: &str) -> Option<i32> {
    let digits: String = raw.chars().take_while(char::is_ascii_digit).collect();
    if digits.len() == 4 {
        digits.parse().ok()
    } else {
        None
    }
}
