//! Integration tests for the menu loop.
//!
//! These drive `MovieApp` with scripted answers and a canned metadata
//! provider, then check exactly what was printed and what the catalog holds.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

use catalog::{Catalog, GenreName, Movie, Rating};
use cli::{Flow, MovieApp, Terminal};
use metadata::{MetadataError, MetadataProvider};
use serde_json::json;

/// Terminal that replays answers and records printed lines (prompts excluded)
struct ScriptedTerminal {
    answers: VecDeque<String>,
    output: Vec<String>,
    prompts: Vec<String>,
}

impl ScriptedTerminal {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            output: Vec::new(),
            prompts: Vec::new(),
        }
    }

    fn printed(&self) -> String {
        self.output.iter().map(|line| format!("{line}\n")).collect()
    }
}

impl Terminal for ScriptedTerminal {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}

/// Provider returning fixed search results; details add a plot field
#[derive(Default)]
struct FakeProvider {
    results: Vec<Movie>,
    fail_search: bool,
    fail_details: bool,
    searches: RefCell<Vec<String>>,
    detail_calls: RefCell<usize>,
}

impl FakeProvider {
    fn with_results(results: Vec<Movie>) -> Self {
        Self {
            results,
            ..Self::default()
        }
    }
}

impl MetadataProvider for FakeProvider {
    fn search(&self, title: &str) -> metadata::Result<Vec<Movie>> {
        self.searches.borrow_mut().push(title.to_string());
        if self.fail_search {
            return Err(MetadataError::Api("service unavailable".to_string()));
        }
        Ok(self.results.clone())
    }

    fn fetch_details(&self, candidate: &Movie) -> metadata::Result<Movie> {
        *self.detail_calls.borrow_mut() += 1;
        if self.fail_details {
            return Err(MetadataError::Api("detail lookup failed".to_string()));
        }
        let mut movie = candidate.clone();
        movie.extra.insert("Plot".to_string(), json!("Full plot"));
        Ok(movie)
    }
}

fn app_with(results: Vec<Movie>) -> MovieApp<FakeProvider> {
    MovieApp::new(FakeProvider::with_results(results))
}

fn dark_knight() -> Movie {
    Movie::new("The Dark Knight").with_year(2008).with_id("tt0468569")
}

fn dispatch(
    app: &mut MovieApp<FakeProvider>,
    choice: &str,
    answers: &[&str],
) -> (Flow, ScriptedTerminal) {
    let mut term = ScriptedTerminal::new(answers);
    let flow = app.dispatch(choice, &mut term).unwrap();
    (flow, term)
}

// =============================================================================
// List / view
// =============================================================================

#[test]
fn test_list_genres() {
    let mut app = app_with(vec![]);
    let (flow, term) = dispatch(&mut app, "1", &[]);

    assert_eq!(flow, Flow::Continue);
    assert_eq!(
        term.printed(),
        "- Action\n- Comedy\n- Drama\n- Horror\n- Romance\n- Thriller\n"
    );
}

#[test]
fn test_view_movies_empty_genre() {
    let mut app = app_with(vec![]);
    let (_, term) = dispatch(&mut app, "2", &["Action"]);

    assert_eq!(term.printed(), "No movies in this genre yet.\n");
    assert_eq!(term.prompts, vec!["Enter genre name: "]);
}

#[test]
fn test_view_movies_lists_ratings() {
    let mut catalog = Catalog::new();
    let action = catalog.genre_mut(GenreName::Action);
    action.add_movie(Movie::new("The Dark Knight").with_rating(Rating::new(9).unwrap()));
    action.add_movie(Movie::new("Inception"));
    let mut app = MovieApp::with_catalog(catalog, FakeProvider::default());

    let (_, term) = dispatch(&mut app, "2", &["aCtIoN"]);
    assert_eq!(term.printed(), "- The Dark Knight (9/10)\n- Inception (NR/10)\n");
}

#[test]
fn test_view_movies_twice_is_identical() {
    let mut catalog = Catalog::new();
    catalog.genre_mut(GenreName::Drama).add_movie(Movie::new("Heat"));
    let mut app = MovieApp::with_catalog(catalog, FakeProvider::default());

    let (_, first) = dispatch(&mut app, "2", &["drama"]);
    let (_, second) = dispatch(&mut app, "2", &["drama"]);
    assert_eq!(first.printed(), second.printed());
}

#[test]
fn test_unknown_genre() {
    let provider = FakeProvider::with_results(vec![dark_knight()]);
    let mut app = MovieApp::new(&provider);

    let mut term = ScriptedTerminal::new(&["sci-fi"]);
    app.dispatch("2", &mut term).unwrap();
    assert_eq!(term.printed(), "Genre 'Sci-Fi' not found.\n");

    let mut term = ScriptedTerminal::new(&["western", "Alien"]);
    app.dispatch("3", &mut term).unwrap();
    assert_eq!(term.printed(), "Genre 'Western' not found.\n");
    assert!(provider.searches.borrow().is_empty());

    let mut term = ScriptedTerminal::new(&[" action"]);
    app.dispatch("4", &mut term).unwrap();
    assert_eq!(term.printed(), "Genre ' Action' not found.\n");
}

// =============================================================================
// Add
// =============================================================================

#[test]
fn test_add_movie() {
    let mut app = app_with(vec![dark_knight(), Movie::new("Batman Begins")]);
    let (flow, term) = dispatch(&mut app, "3", &["action", "The Dark Knight", "1"]);

    assert_eq!(flow, Flow::Continue);
    assert_eq!(
        term.printed(),
        "Select the movie you want to add:\n\
         1. The Dark Knight (2008)\n\
         2. Batman Begins (Unknown year)\n\
         Added The Dark Knight to Action genre.\n"
    );
    assert_eq!(
        term.prompts,
        vec![
            "Enter genre name for adding movie: ",
            "Enter movie title to search: ",
            "Choose a number (or 0 to cancel): ",
        ]
    );

    let movies = app.catalog().genre(GenreName::Action).movies();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "The Dark Knight");
    assert_eq!(movies[0].id.as_deref(), Some("tt0468569"));
    assert_eq!(movies[0].extra.get("Plot"), Some(&json!("Full plot")));
}

#[test]
fn test_add_movie_searches_for_entered_title() {
    let provider = FakeProvider::with_results(vec![dark_knight()]);
    let mut app = MovieApp::new(&provider);
    let mut term = ScriptedTerminal::new(&["Action", "dark knight", "1"]);

    app.dispatch("3", &mut term).unwrap();
    assert_eq!(*provider.searches.borrow(), vec!["dark knight"]);
    assert_eq!(*provider.detail_calls.borrow(), 1);
}

#[test]
fn test_add_movie_no_results() {
    let mut app = app_with(vec![]);
    let (_, term) = dispatch(&mut app, "3", &["Comedy", "Nothing Matches"]);

    assert_eq!(term.printed(), "No results found.\n");
    assert_eq!(app.catalog().movie_count(), 0);
}

#[test]
fn test_add_movie_cancel_is_silent() {
    let mut app = app_with(vec![dark_knight()]);
    let (_, term) = dispatch(&mut app, "3", &["Action", "Dark", "0"]);

    assert_eq!(
        term.printed(),
        "Select the movie you want to add:\n1. The Dark Knight (2008)\n"
    );
    assert_eq!(app.catalog().movie_count(), 0);
}

#[test]
fn test_add_movie_shows_at_most_ten_results() {
    let results: Vec<Movie> = (1..=15).map(|i| Movie::new(format!("Movie {i}"))).collect();
    let mut app = app_with(results);
    let (_, term) = dispatch(&mut app, "3", &["Horror", "Movie", "0"]);

    let listed: Vec<&String> = term.output.iter().skip(1).collect();
    assert_eq!(listed.len(), 10);
    assert_eq!(listed[0], "1. Movie 1 (Unknown year)");
    assert_eq!(listed[9], "10. Movie 10 (Unknown year)");
}

#[test]
fn test_add_movie_rejects_out_of_range_choice() {
    let results: Vec<Movie> = (1..=12).map(|i| Movie::new(format!("Movie {i}"))).collect();
    let provider = FakeProvider::with_results(results);
    let mut app = MovieApp::new(&provider);

    // 11 exists in the search results but was never displayed
    for answer in ["11", "-2", "first"] {
        let mut term = ScriptedTerminal::new(&["Horror", "Movie", answer]);
        app.dispatch("3", &mut term).unwrap();
        assert_eq!(term.output.last().unwrap(), "No valid selection made.");
    }
    assert_eq!(*provider.detail_calls.borrow(), 0);
    assert_eq!(app.catalog().movie_count(), 0);
}

#[test]
fn test_add_movie_search_failure() {
    let provider = FakeProvider {
        fail_search: true,
        ..FakeProvider::default()
    };
    let mut app = MovieApp::new(provider);
    let mut term = ScriptedTerminal::new(&["Action", "Alien"]);

    let flow = app.dispatch("3", &mut term).unwrap();
    assert_eq!(flow, Flow::Continue);
    assert_eq!(
        term.printed(),
        "Movie lookup failed: metadata service error: service unavailable\n"
    );
}

#[test]
fn test_add_movie_detail_failure_adds_nothing() {
    let provider = FakeProvider {
        results: vec![dark_knight()],
        fail_details: true,
        ..FakeProvider::default()
    };
    let mut app = MovieApp::new(provider);
    let mut term = ScriptedTerminal::new(&["Action", "Dark", "1"]);

    app.dispatch("3", &mut term).unwrap();
    assert_eq!(
        term.output.last().unwrap(),
        "Movie lookup failed: metadata service error: detail lookup failed"
    );
    assert_eq!(app.catalog().movie_count(), 0);
}

// =============================================================================
// Rate
// =============================================================================

fn app_with_unrated_movie() -> MovieApp<FakeProvider> {
    let mut app = app_with(vec![]);
    app.catalog_mut()
        .genre_mut(GenreName::Action)
        .add_movie(Movie::new("The Dark Knight"));
    app
}

fn action_rating(app: &MovieApp<FakeProvider>) -> Option<Rating> {
    app.catalog().genre(GenreName::Action).movies()[0].rating
}

#[test]
fn test_rate_movie() {
    let mut app = app_with_unrated_movie();
    let (_, term) = dispatch(&mut app, "4", &["Action", "1", "10"]);

    assert_eq!(term.printed(), "1. The Dark Knight\nRating updated for The Dark Knight\n");
    assert_eq!(action_rating(&app), Some(Rating::new(10).unwrap()));
    assert_eq!(
        term.prompts,
        vec![
            "Enter genre name for rating movie: ",
            "Enter movie number (or 0 to cancel): ",
            "Enter rating (1-10): ",
        ]
    );
}

#[test]
fn test_rate_movie_invalid_rating() {
    let mut app = app_with_unrated_movie();

    for rating in ["0", "11", "ten"] {
        let (_, term) = dispatch(&mut app, "4", &["Action", "1", rating]);
        assert_eq!(
            term.output.last().unwrap(),
            "Invalid rating. Please enter a number between 1 and 10."
        );
        assert_eq!(action_rating(&app), None);
    }
}

#[test]
fn test_rate_movie_keeps_previous_rating_on_invalid() {
    let mut app = app_with_unrated_movie();
    dispatch(&mut app, "4", &["Action", "1", "7"]);
    dispatch(&mut app, "4", &["Action", "1", "11"]);

    assert_eq!(action_rating(&app), Some(Rating::new(7).unwrap()));
}

#[test]
fn test_rate_movie_invalid_selection() {
    let mut app = app_with_unrated_movie();

    for choice in ["0", "2", "-1", "one"] {
        let (_, term) = dispatch(&mut app, "4", &["Action", choice]);
        assert_eq!(term.printed(), "1. The Dark Knight\nNo valid selection made.\n");
        // never asked for a rating
        assert_eq!(term.prompts.len(), 2);
    }
    assert_eq!(action_rating(&app), None);
}

#[test]
fn test_rate_movie_empty_genre() {
    let mut app = app_with(vec![]);
    let (_, term) = dispatch(&mut app, "4", &["Romance", "1"]);

    assert_eq!(term.printed(), "No valid selection made.\n");
}

// =============================================================================
// Menu loop
// =============================================================================

#[test]
fn test_exit() {
    let mut app = app_with(vec![]);
    let (flow, term) = dispatch(&mut app, "5", &[]);

    assert_eq!(flow, Flow::Exit);
    assert_eq!(term.printed(), "Exiting Generalize Movie App.\n");
}

#[test]
fn test_invalid_choice() {
    let mut app = app_with(vec![]);
    for choice in ["6", "", "list", "0"] {
        let (flow, term) = dispatch(&mut app, choice, &[]);
        assert_eq!(flow, Flow::Continue);
        assert_eq!(term.printed(), "Invalid choice. Please try again.\n");
    }
}

#[test]
fn test_run_until_exit() {
    let mut app = app_with(vec![dark_knight()]);
    let mut term = ScriptedTerminal::new(&["3", "Action", "Dark", "1", "2", "Action", "5", "1"]);

    app.run(&mut term).unwrap();

    let menu = "Generalize Movie App\n\
                1. List Genres\n\
                2. View Movies in a Genre\n\
                3. Add Movie to a Genre\n\
                4. Rate a Movie in a Genre\n\
                5. Exit\n";
    let expected = format!(
        "{menu}Select the movie you want to add:\n\
         1. The Dark Knight (2008)\n\
         Added The Dark Knight to Action genre.\n\
         {menu}- The Dark Knight (NR/10)\n\
         {menu}Exiting Generalize Movie App.\n"
    );
    assert_eq!(term.printed(), expected);
    // the trailing "1" is never read
    assert_eq!(term.answers.len(), 1);
}

#[test]
fn test_run_stops_at_end_of_input() {
    let mut app = app_with(vec![]);
    let mut term = ScriptedTerminal::new(&["1"]);

    app.run(&mut term).unwrap();
    let printed = term.printed();
    assert!(printed.contains("- Thriller\n"));
    assert!(printed.ends_with("5. Exit\n"));
    assert!(!printed.contains("Exiting"));
}
