//! cmdline - an interactive command line with a handful of filesystem
//! inspection commands.
//!
//! The session reads a line, splits it into a command and arguments, looks
//! the command up in a [`shell::Registry`] and executes it against a shared
//! [`shell::Context`] until a command asks to stop.

#[macro_use]
extern crate log;

pub mod config;
pub mod error;
pub mod fs;
pub mod shell;

pub use error::{ShellError, ShellResult};
