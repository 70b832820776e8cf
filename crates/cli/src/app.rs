//! The interactive menu loop.
//!
//! `MovieApp` owns the catalog and the metadata provider. Each pass through
//! the loop prints the menu, reads one choice and runs the matching action;
//! every action returns to the menu except Exit (or end of input).
//!
//! User mistakes (unknown genre, bad number, rating out of range, empty
//! search) are answered with a message and never surface as `Err`. Only
//! terminal I/O failures do.

use anyhow::{Context, Result};
use catalog::{parse_number, Catalog, CatalogError, GenreName, Movie, Rating};
use metadata::{MetadataError, MetadataProvider};
use tracing::{debug, info, warn};

use crate::terminal::Terminal;

/// Search results shown when adding a movie
pub const MAX_SEARCH_RESULTS: usize = 10;

pub const MENU: [&str; 6] = [
    "Generalize Movie App",
    "1. List Genres",
    "2. View Movies in a Genre",
    "3. Add Movie to a Genre",
    "4. Rate a Movie in a Genre",
    "5. Exit",
];

const CHOICE_PROMPT: &str = "Enter your choice: ";
const VIEW_GENRE_PROMPT: &str = "Enter genre name: ";
const ADD_GENRE_PROMPT: &str = "Enter genre name for adding movie: ";
const RATE_GENRE_PROMPT: &str = "Enter genre name for rating movie: ";
const SEARCH_PROMPT: &str = "Enter movie title to search: ";
const PICK_RESULT_PROMPT: &str = "Choose a number (or 0 to cancel): ";
const PICK_MOVIE_PROMPT: &str = "Enter movie number (or 0 to cancel): ";
const RATING_PROMPT: &str = "Enter rating (1-10): ";

pub const EXIT_MESSAGE: &str = "Exiting Generalize Movie App.";
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice. Please try again.";
pub const NO_RESULTS_MESSAGE: &str = "No results found.";
pub const NO_SELECTION_MESSAGE: &str = "No valid selection made.";
pub const INVALID_RATING_MESSAGE: &str = "Invalid rating. Please enter a number between 1 and 10.";

/// What the loop should do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct MovieApp<P> {
    catalog: Catalog,
    provider: P,
}

impl<P: MetadataProvider> MovieApp<P> {
    pub fn new(provider: P) -> Self {
        Self::with_catalog(Catalog::new(), provider)
    }

    pub fn with_catalog(catalog: Catalog, provider: P) -> Self {
        Self { catalog, provider }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Run the menu until the user exits or input runs out
    pub fn run<T: Terminal>(&mut self, term: &mut T) -> Result<()> {
        loop {
            for line in MENU {
                say(term, line)?;
            }
            let Some(choice) = ask(term, CHOICE_PROMPT)? else {
                debug!("Input closed at menu");
                return Ok(());
            };
            if self.dispatch(&choice, term)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Run the action for one menu choice
    pub fn dispatch<T: Terminal>(&mut self, choice: &str, term: &mut T) -> Result<Flow> {
        debug!(choice = %choice, "Menu choice");
        match choice.trim() {
            "1" => self.list_genres(term),
            "2" => self.view_movies(term),
            "3" => self.add_movie(term),
            "4" => self.rate_movie(term),
            "5" => {
                say(term, EXIT_MESSAGE)?;
                Ok(Flow::Exit)
            }
            _ => {
                say(term, INVALID_CHOICE_MESSAGE)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn list_genres<T: Terminal>(&self, term: &mut T) -> Result<Flow> {
        for name in self.catalog.names() {
            say(term, &format!("- {name}"))?;
        }
        Ok(Flow::Continue)
    }

    fn view_movies<T: Terminal>(&self, term: &mut T) -> Result<Flow> {
        let Some(raw) = ask(term, VIEW_GENRE_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = resolve_genre(term, &raw)? else {
            return Ok(Flow::Continue);
        };

        for line in self.catalog.genre(name).listing_lines() {
            say(term, &line)?;
        }
        Ok(Flow::Continue)
    }

    fn add_movie<T: Terminal>(&mut self, term: &mut T) -> Result<Flow> {
        let Some(raw) = ask(term, ADD_GENRE_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = resolve_genre(term, &raw)? else {
            return Ok(Flow::Continue);
        };
        let Some(title) = ask(term, SEARCH_PROMPT)? else {
            return Ok(Flow::Exit);
        };

        let candidates = match self.provider.search(&title) {
            Ok(candidates) => candidates,
            Err(err) => {
                lookup_failed(term, &err)?;
                return Ok(Flow::Continue);
            }
        };
        if candidates.is_empty() {
            say(term, NO_RESULTS_MESSAGE)?;
            return Ok(Flow::Continue);
        }

        let shown = &candidates[..candidates.len().min(MAX_SEARCH_RESULTS)];
        say(term, "Select the movie you want to add:")?;
        for (i, candidate) in shown.iter().enumerate() {
            say(
                term,
                &format!("{}. {} ({})", i + 1, candidate.title, candidate.year_label()),
            )?;
        }

        let Some(answer) = ask(term, PICK_RESULT_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        let choice = parse_number(&answer);
        if choice == Some(0) {
            debug!("Add cancelled");
            return Ok(Flow::Continue);
        }
        let Some(candidate) = choice.and_then(|n| pick(shown, n)) else {
            say(term, NO_SELECTION_MESSAGE)?;
            return Ok(Flow::Continue);
        };

        let movie = match self.provider.fetch_details(candidate) {
            Ok(movie) => movie,
            Err(err) => {
                lookup_failed(term, &err)?;
                return Ok(Flow::Continue);
            }
        };

        let message = format!("Added {} to {} genre.", movie.title, name);
        info!(title = %movie.title, genre = %name, "Added movie");
        self.catalog.genre_mut(name).add_movie(movie);
        say(term, &message)?;
        Ok(Flow::Continue)
    }

    fn rate_movie<T: Terminal>(&mut self, term: &mut T) -> Result<Flow> {
        let Some(raw) = ask(term, RATE_GENRE_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = resolve_genre(term, &raw)? else {
            return Ok(Flow::Continue);
        };

        for (i, movie) in self.catalog.genre(name).movies().iter().enumerate() {
            say(term, &format!("{}. {}", i + 1, movie.title))?;
        }

        let Some(answer) = ask(term, PICK_MOVIE_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        let position = match parse_number(&answer) {
            Some(p) if self.catalog.genre(name).movie_at(p).is_ok() => p,
            _ => {
                say(term, NO_SELECTION_MESSAGE)?;
                return Ok(Flow::Continue);
            }
        };

        let Some(answer) = ask(term, RATING_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        let rating = match parse_number(&answer).map(Rating::new) {
            Some(Ok(rating)) => rating,
            _ => {
                say(term, INVALID_RATING_MESSAGE)?;
                return Ok(Flow::Continue);
            }
        };

        let movie = self.catalog.genre_mut(name).rate_movie(position, rating)?;
        info!(title = %movie.title, genre = %name, %rating, "Rated movie");
        let message = format!("Rating updated for {}", movie.title);
        say(term, &message)?;
        Ok(Flow::Continue)
    }
}

/// 1-based pick from the displayed results
fn pick(shown: &[Movie], choice: i64) -> Option<&Movie> {
    let index = usize::try_from(choice).ok()?.checked_sub(1)?;
    shown.get(index)
}

/// Title-case and look up a genre, printing the miss.
fn resolve_genre<T: Terminal>(term: &mut T, raw: &str) -> Result<Option<GenreName>> {
    match GenreName::from_input(raw) {
        Ok(name) => Ok(Some(name)),
        Err(err @ CatalogError::UnknownGenre(_)) => {
            say(term, &err.to_string())?;
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

fn lookup_failed<T: Terminal>(term: &mut T, err: &MetadataError) -> Result<()> {
    warn!(error = %err, "Movie lookup failed");
    say(term, &format!("Movie lookup failed: {err}"))
}

fn ask<T: Terminal>(term: &mut T, prompt: &str) -> Result<Option<String>> {
    term.read_line(prompt).context("failed to read from terminal")
}

fn say<T: Terminal>(term: &mut T, line: &str) -> Result<()> {
    term.write_line(line).context("failed to write to terminal")
}
