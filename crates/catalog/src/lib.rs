//! # Catalog Crate
//!
//! In-memory model of the genre catalog: a fixed set of genres, each holding
//! an ordered list of movies that can be appended to and rated.
//!
//! ## Main Components
//!
//! - **types**: Domain types (GenreName, Rating, Movie)
//! - **genre**: The Genre bucket and the Catalog that owns one per GenreName
//! - **parser**: Normalising raw terminal input (title-casing, numbers)
//! - **error**: Error types for catalog operations
//!
//! ## Example Usage
//!
//! ```
//! use catalog::{Catalog, GenreName, Movie, Rating};
//!
//! let mut catalog = Catalog::new();
//! let action = GenreName::from_input("action")?;
//!
//! catalog.genre_mut(action).add_movie(Movie::new("The Dark Knight"));
//! catalog.genre_mut(action).rate_movie(1, Rating::new(9)?)?;
//!
//! assert_eq!(catalog.genre(action).listing_lines(), vec!["- The Dark Knight (9/10)"]);
//! # Ok::<(), catalog::CatalogError>(())
//! ```

// Public modules
pub mod error;
pub mod genre;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use genre::{Catalog, EMPTY_GENRE_MESSAGE, Genre};
pub use parser::{parse_number, title_case};
pub use types::{GenreName, Movie, Rating};
