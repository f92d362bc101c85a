//! Command-line client: argument parsing, the interactive menu and terminal
//! rendering. Everything below this module talks to the library through
//! [`kennel::api::KennelApi`] only.

mod commands;
mod render;
mod setup;
mod shell;

pub use commands::run;
