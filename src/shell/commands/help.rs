//! Help command - displays available commands and their usage.

use std::io::Write;

use crate::ShellResult;
use crate::shell::{Args, Command, Execution, Flow, MSG_COMMAND_NOT_FOUND, MSG_DELIM};

/// Help command instance.
pub static HELP: HelpCommand = HelpCommand;

/// Help command implementation.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "HELP"
    }

    fn description(&self) -> &'static str {
        "Prints list of available commands"
    }

    fn usage(&self) -> &'static str {
        "Usage: help [command...]\n\
         \n\
         Without arguments: lists all available commands.\n\
         With command names: shows help for each of them."
    }

    fn execute(&self, exec: &mut Execution<'_>, args: Option<&Args<'_>>) -> ShellResult<Flow> {
        match args {
            None => show_all_commands(exec)?,
            Some(args) => {
                for name in args.iter() {
                    show_command_help(exec, name)?;
                }
            }
        }
        Ok(Flow::Continue)
    }
}

fn show_command_help(exec: &mut Execution<'_>, name: &str) -> ShellResult<()> {
    writeln!(exec.out, "Help for command {}:", name)?;
    writeln!(exec.out, "{}", MSG_DELIM)?;
    match exec.registry.lookup(name) {
        Some(cmd) => cmd.print_help(exec.out)?,
        None => writeln!(exec.out, "{}", MSG_COMMAND_NOT_FOUND)?,
    }
    writeln!(exec.out, "{}", MSG_DELIM)?;
    Ok(())
}

fn show_all_commands(exec: &mut Execution<'_>) -> ShellResult<()> {
    writeln!(exec.out, "Available commands:")?;
    writeln!(exec.out, "{}", MSG_DELIM)?;
    for cmd in exec.registry.list_all() {
        writeln!(exec.out, "{}: {}", cmd.name(), cmd.description())?;
    }
    writeln!(exec.out, "{}", MSG_DELIM)?;
    Ok(())
}
