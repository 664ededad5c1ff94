//! The dispatch loop: prompt, read, parse, look up, execute.

use std::io::{BufRead, Write};

use encoding_rs::Encoding;

use crate::ShellResult;
use crate::fs::FileSystem;
use crate::shell::command::{Args, Command, Context, Execution, Flow, ParsedCommand};
use crate::shell::console::Console;
use crate::shell::registry::Registry;
use crate::shell::MSG_COMMAND_NOT_FOUND;

pub const BANNER: [&str; 2] = ["Welcome to the command line!", "Type help for a list of commands"];

/// Name of the command run when the input stream ends.
const EOF_COMMAND: &str = "EXIT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Running,
    Stopped,
}

pub struct Shell<'a, R, W> {
    registry: &'a Registry,
    fs: &'a dyn FileSystem,
    console: Console<R, W>,
    context: Context,
    prompt: String,
    file_encoding: &'static Encoding,
    state: ShellState,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(
        registry: &'a Registry,
        fs: &'a dyn FileSystem,
        console: Console<R, W>,
        context: Context,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            fs,
            console,
            context,
            prompt: prompt.into(),
            file_encoding: encoding_rs::UTF_8,
            state: ShellState::Running,
        }
    }

    /// Encoding used to decode files printed by CAT. Defaults to UTF-8.
    pub fn with_file_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.file_encoding = encoding;
        self
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn greet(&mut self) -> ShellResult<()> {
        for line in BANNER {
            writeln!(self.console.writer(), "{}", line)?;
        }
        Ok(())
    }

    /// Run until a command stops the session or input ends.
    pub fn run(&mut self) -> ShellResult<()> {
        info!("Session started in {}", self.context.current_dir().display());
        while self.state == ShellState::Running {
            self.step()?;
        }
        self.console.writer().flush()?;
        info!("Session finished");
        Ok(())
    }

    /// One prompt-read-dispatch iteration.
    pub fn step(&mut self) -> ShellResult<ShellState> {
        self.console.prompt(&self.prompt)?;

        let flow = match self.console.read_line()? {
            Some(line) => self.dispatch(&line)?,
            None => {
                debug!("End of input");
                // Keep the termination message off the prompt line
                writeln!(self.console.writer())?;
                if let Some(cmd) = self.registry.lookup(EOF_COMMAND) {
                    self.execute(cmd, None)?;
                }
                Flow::Stop
            }
        };

        if flow == Flow::Stop {
            self.state = ShellState::Stopped;
        }
        Ok(self.state)
    }

    /// Parse and execute a single line.
    pub fn dispatch(&mut self, line: &str) -> ShellResult<Flow> {
        let parsed = ParsedCommand::parse(line);
        if parsed.command.is_empty() {
            return Ok(Flow::Continue);
        }

        let Some(cmd) = self.registry.lookup(parsed.command) else {
            debug!("Unknown command: {}", parsed.command);
            writeln!(self.console.writer(), "{}", MSG_COMMAND_NOT_FOUND)?;
            return Ok(Flow::Continue);
        };

        self.execute(cmd, parsed.args.as_ref())
    }

    fn execute(&mut self, cmd: &dyn Command, args: Option<&Args<'_>>) -> ShellResult<Flow> {
        debug!("Executing {} {:?}", cmd.name(), args);
        let mut exec = Execution {
            context: &mut self.context,
            registry: self.registry,
            fs: self.fs,
            file_encoding: self.file_encoding,
            out: self.console.writer(),
        };
        cmd.execute(&mut exec, args)
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}
