//! Session control commands.

use std::io::Write;

use crate::ShellResult;
use crate::shell::{Args, Command, Execution, Flow};

pub const MSG_FINISHING: &str = "Finishing command processor... done.";

/// Exit command instance.
pub static EXIT: ExitCommand = ExitCommand;

/// Exit command implementation.
pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "EXIT"
    }

    fn description(&self) -> &'static str {
        "Exits from command processor"
    }

    fn execute(&self, exec: &mut Execution<'_>, _args: Option<&Args<'_>>) -> ShellResult<Flow> {
        writeln!(exec.out, "{}", MSG_FINISHING)?;
        Ok(Flow::Stop)
    }
}
