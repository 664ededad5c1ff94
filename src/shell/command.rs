//! Command trait, line parsing and execution context definitions.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;

use crate::ShellResult;
use crate::fs::{FileSystem, resolve_path};
use crate::shell::registry::Registry;

/// Arguments following the command token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args<'a> {
    args: Vec<&'a str>,
}

impl<'a> Args<'a> {
    pub fn new(args: Vec<&'a str>) -> Self {
        Self { args }
    }

    /// Get argument at index (0 is first argument after command name).
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.args.iter().copied()
    }
}

/// One input line split into a command token and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    /// The line as given to the parser.
    pub raw: &'a str,
    /// Command token, empty when the line is empty or starts with a space.
    pub command: &'a str,
    /// `None` when the line holds a single token. Tokens may be empty.
    pub args: Option<Args<'a>>,
}

impl<'a> ParsedCommand<'a> {
    /// Split `line` on every single space.
    ///
    /// Nothing is trimmed and runs of spaces are not collapsed, so
    /// `"dir  "` yields the command `dir` and two empty arguments.
    pub fn parse(line: &'a str) -> Self {
        let mut parts = line.split(' ');
        // split() always yields at least one item
        let command = parts.next().unwrap_or_default();
        let rest: Vec<&str> = parts.collect();

        Self {
            raw: line,
            command,
            args: if rest.is_empty() {
                None
            } else {
                Some(Args::new(rest))
            },
        }
    }
}

/// Session state shared by every command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    current_dir: PathBuf,
}

impl Context {
    /// `current_dir` must be absolute.
    pub fn new(current_dir: PathBuf) -> Self {
        Self { current_dir }
    }

    /// Context starting in the process working directory.
    pub fn from_process(fs: &dyn FileSystem) -> io::Result<Self> {
        let cwd = fs.absolute_path(Path::new("."))?;
        Ok(Self::new(resolve_path(&cwd, "")))
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn set_current_dir(&mut self, dir: PathBuf) {
        self.current_dir = dir;
    }
}

/// What the dispatch loop does after a command returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Everything a command may touch while it runs.
pub struct Execution<'a> {
    pub context: &'a mut Context,
    pub registry: &'a Registry,
    pub fs: &'a dyn FileSystem,
    /// Encoding of file contents shown by CAT.
    pub file_encoding: &'static Encoding,
    pub out: &'a mut dyn Write,
}

/// Trait for implementing commands.
///
/// Commands are static instances registered by their uppercase name and
/// looked up case-insensitively.
pub trait Command: Sync {
    /// Uppercase command name.
    fn name(&self) -> &'static str;

    /// Short description (shown in the help list).
    fn description(&self) -> &'static str;

    /// Text shown by `help <command>`.
    fn usage(&self) -> &'static str {
        self.description()
    }

    fn print_help(&self, out: &mut dyn Write) -> ShellResult<()> {
        writeln!(out, "{}", self.usage())?;
        Ok(())
    }

    /// Run the command. User mistakes are reported on `exec.out` and yield
    /// `Flow::Continue`; an `Err` means the console itself failed.
    fn execute(&self, exec: &mut Execution<'_>, args: Option<&Args<'_>>) -> ShellResult<Flow>;
}
