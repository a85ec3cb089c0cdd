//! cellroute CLI library.
//!
//! Subcommand handlers and report formatting for the `cellroute` binary.
//! Handlers write to any [`std::io::Write`] so they can be driven from tests.

pub mod commands;
pub mod output;
pub mod terminal;
