//! Interactive front end for the genre catalog.
//!
//! - **terminal**: the line-oriented I/O seam (`Terminal`, `StdTerminal`)
//! - **app**: `MovieApp`, the menu loop and its actions
//! - **config**: command-line / environment settings

pub mod app;
pub mod config;
pub mod terminal;

pub use app::{Flow, MovieApp, MAX_SEARCH_RESULTS};
pub use config::Cli;
pub use terminal::{StdTerminal, Terminal};
