//! Error types for the catalog crate.
//!
//! These describe the user-facing failures of catalog operations: an
//! unknown genre label, a rating outside the accepted scale, and a movie
//! position that does not exist in a genre's list.

use thiserror::Error;

/// Errors that can occur while looking up or mutating the catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Genre label did not match any of the fixed categories
    ///
    /// Carries the label after title-casing, as it was looked up.
    #[error("Genre '{0}' not found.")]
    UnknownGenre(String),

    /// Rating outside the closed range 1..=10
    #[error("Invalid rating {0}: expected a number between 1 and 10")]
    InvalidRating(i64),

    /// 1-based movie position outside the genre's list
    #[error("No movie at position {position} (genre holds {len})")]
    InvalidSelection { position: i64, len: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
