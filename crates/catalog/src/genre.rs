//! Genre buckets and the fixed catalog that owns them.

use crate::error::{CatalogError, Result};
use crate::types::{GenreName, Movie, Rating};

/// Line shown when a genre has nothing in it
pub const EMPTY_GENRE_MESSAGE: &str = "No movies in this genre yet.";

/// An ordered list of movies filed under one category.
///
/// Movies are only ever appended or re-rated in place; insertion order is
/// preserved and duplicates are allowed.
#[derive(Debug, Clone)]
pub struct Genre {
    name: GenreName,
    movies: Vec<Movie>,
}

impl Genre {
    pub fn new(name: GenreName) -> Self {
        Self {
            name,
            movies: Vec::new(),
        }
    }

    pub fn name(&self) -> GenreName {
        self.name
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Append a movie to the end of the list
    pub fn add_movie(&mut self, movie: Movie) {
        self.movies.push(movie);
    }

    /// Lines describing every movie, in insertion order.
    ///
    /// An empty genre yields exactly one informational line.
    pub fn listing_lines(&self) -> Vec<String> {
        if self.movies.is_empty() {
            return vec![EMPTY_GENRE_MESSAGE.to_string()];
        }
        self.movies.iter().map(Movie::listing_line).collect()
    }

    /// Look up a movie by its 1-based position in the list
    pub fn movie_at(&self, position: i64) -> Result<&Movie> {
        let index = self.index_of(position)?;
        Ok(&self.movies[index])
    }

    /// Set the rating of the movie at a 1-based position.
    ///
    /// Returns the updated movie so the caller can report its title.
    pub fn rate_movie(&mut self, position: i64, rating: Rating) -> Result<&Movie> {
        let index = self.index_of(position)?;
        let movie = &mut self.movies[index];
        movie.rating = Some(rating);
        Ok(movie)
    }

    fn index_of(&self, position: i64) -> Result<usize> {
        let len = self.movies.len();
        match usize::try_from(position) {
            Ok(p) if p >= 1 && p <= len => Ok(p - 1),
            _ => Err(CatalogError::InvalidSelection { position, len }),
        }
    }
}

/// The fixed set of genres known to the application.
///
/// Holds exactly one `Genre` per `GenreName`, in `GenreName::ALL` order.
/// There is no way to add or remove genres after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    genres: Vec<Genre>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            genres: GenreName::ALL.into_iter().map(Genre::new).collect(),
        }
    }

    /// Genre names in construction order
    pub fn names(&self) -> impl Iterator<Item = GenreName> + '_ {
        self.genres.iter().map(Genre::name)
    }

    pub fn genre(&self, name: GenreName) -> &Genre {
        &self.genres[Self::slot(name)]
    }

    pub fn genre_mut(&mut self, name: GenreName) -> &mut Genre {
        &mut self.genres[Self::slot(name)]
    }

    /// Total number of movies across every genre
    pub fn movie_count(&self) -> usize {
        self.genres.iter().map(Genre::len).sum()
    }

    // Genres are built from GenreName::ALL, so the slot is the enum position.
    fn slot(name: GenreName) -> usize {
        name as usize
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
