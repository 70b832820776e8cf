//! Core domain types for the genre catalog.
//!
//! - `GenreName`: the closed set of categories a catalog is built from
//! - `Rating`: a personal score constrained to 1..=10
//! - `Movie`: one record as returned by the metadata provider, plus the
//!   locally assigned rating

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogError, Result};
use crate::parser::title_case;

// =============================================================================
// Genre names
// =============================================================================

/// The fixed categories a catalog holds.
///
/// Declaration order is the order genres are listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenreName {
    Action,
    Comedy,
    Drama,
    Horror,
    Romance,
    Thriller,
}

impl GenreName {
    /// Every genre, in construction order
    pub const ALL: [GenreName; 6] = [
        GenreName::Action,
        GenreName::Comedy,
        GenreName::Drama,
        GenreName::Horror,
        GenreName::Romance,
        GenreName::Thriller,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GenreName::Action => "Action",
            GenreName::Comedy => "Comedy",
            GenreName::Drama => "Drama",
            GenreName::Horror => "Horror",
            GenreName::Romance => "Romance",
            GenreName::Thriller => "Thriller",
        }
    }

    /// Resolve raw user input to a genre.
    ///
    /// The input is title-cased before matching, so `"action"` and `"ACTION"`
    /// both resolve. On a miss the error carries the title-cased text.
    pub fn from_input(raw: &str) -> Result<Self> {
        title_case(raw).parse()
    }
}

impl fmt::Display for GenreName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenreName {
    type Err = CatalogError;

    /// Exact match against the title-cased label
    fn from_str(s: &str) -> Result<Self> {
        GenreName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownGenre(s.to_string()))
    }
}

// =============================================================================
// Rating
// =============================================================================

/// A personal rating on the 1-10 scale.
///
/// The only way to build one is through `Rating::new`, so a `Rating` value
/// is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 10;

    pub fn new(value: i64) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value as u8))
        } else {
            Err(CatalogError::InvalidRating(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = CatalogError;

    fn try_from(value: i64) -> Result<Self> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Movie
// =============================================================================

/// A movie record held in a genre.
///
/// Only `title` is required. Provider fields the catalog doesn't model
/// (plot, director, poster, ...) are kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Provider-side identifier used to fetch full details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Movie {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            year: None,
            rating: None,
            extra: Map::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Rating as shown in listings, `NR` when not rated yet
    pub fn rating_label(&self) -> String {
        self.rating
            .map(|r| r.to_string())
            .unwrap_or_else(|| "NR".to_string())
    }

    /// Year as shown in search results
    pub fn year_label(&self) -> String {
        self.year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "Unknown year".to_string())
    }

    /// `- {title} ({rating}/10)`
    pub fn listing_line(&self) -> String {
        format!("- {} ({}/10)", self.title, self.rating_label())
    }
}
