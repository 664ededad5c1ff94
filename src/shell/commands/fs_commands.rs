//! Filesystem commands.

use std::io::{self, Read, Write};
use std::path::Path;

use crate::ShellResult;
use crate::fs::resolve_path;
use crate::shell::{Args, Command, Execution, Flow};

pub const MSG_NOT_A_DIRECTORY: &str = "It's don't directory";
pub const MSG_NOT_A_FILE: &str = "It's don't file";

/// Bytes read from a file per decoding round.
const CHUNK_SIZE: usize = 8 * 1024;

/// List the regular files of the current directory.
pub static DIR: DirCommand = DirCommand;

pub struct DirCommand;

impl Command for DirCommand {
    fn name(&self) -> &'static str {
        "DIR"
    }

    fn description(&self) -> &'static str {
        "Prints files in the current directory"
    }

    fn execute(&self, exec: &mut Execution<'_>, args: Option<&Args<'_>>) -> ShellResult<Flow> {
        // Only the bare form is supported
        if args.is_some() {
            return Ok(Flow::Continue);
        }

        match exec.fs.list_entries(exec.context.current_dir()) {
            Ok(mut entries) => {
                entries.sort_by(|a, b| a.name.cmp(&b.name));
                for entry in entries.iter().filter(|e| e.is_file) {
                    writeln!(exec.out, "{}", entry.name)?;
                }
            }
            Err(e) => {
                warn!("Cannot list {}: {}", exec.context.current_dir().display(), e);
                writeln!(exec.out, "dir: {}", e)?;
            }
        }
        Ok(Flow::Continue)
    }
}

/// Print current working directory.
pub static PWD: PwdCommand = PwdCommand;

pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "PWD"
    }

    fn description(&self) -> &'static str {
        "Full path for current directory"
    }

    fn execute(&self, exec: &mut Execution<'_>, args: Option<&Args<'_>>) -> ShellResult<Flow> {
        if args.is_none() {
            writeln!(exec.out, "{}", exec.context.current_dir().display())?;
        }
        Ok(Flow::Continue)
    }
}

/// Change directory.
pub static CD: CdCommand = CdCommand;

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "CD"
    }

    fn description(&self) -> &'static str {
        "Change the current directory"
    }

    fn usage(&self) -> &'static str {
        "Usage: cd [path]\n\
         \n\
         Without arguments: prints the current directory.\n\
         Relative paths are taken from the current directory."
    }

    fn execute(&self, exec: &mut Execution<'_>, args: Option<&Args<'_>>) -> ShellResult<Flow> {
        let Some(path) = args.and_then(|a| a.get(0)) else {
            writeln!(exec.out, "{}", exec.context.current_dir().display())?;
            return Ok(Flow::Continue);
        };

        let target = resolve_path(exec.context.current_dir(), path);
        if !path.is_empty() && exec.fs.is_dir(&target) {
            info!("Changing directory to {}", target.display());
            exec.context.set_current_dir(target);
        } else {
            writeln!(exec.out, "{}", MSG_NOT_A_DIRECTORY)?;
        }
        Ok(Flow::Continue)
    }
}

/// Print file contents.
pub static CAT: CatCommand = CatCommand;

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "CAT"
    }

    fn description(&self) -> &'static str {
        "Output text file content"
    }

    fn usage(&self) -> &'static str {
        "Usage: cat <file>"
    }

    fn execute(&self, exec: &mut Execution<'_>, args: Option<&Args<'_>>) -> ShellResult<Flow> {
        let Some(path) = args.and_then(|a| a.get(0)) else {
            writeln!(exec.out, "{}", self.usage())?;
            return Ok(Flow::Continue);
        };

        let target = resolve_path(exec.context.current_dir(), path);
        if path.is_empty() || !exec.fs.is_file(&target) {
            writeln!(exec.out, "{}", MSG_NOT_A_FILE)?;
            return Ok(Flow::Continue);
        }

        print_file(exec, &target)?;
        Ok(Flow::Continue)
    }
}

/// Stream `target` to the console, decoding it chunk by chunk. Read
/// failures are printed after whatever was already shown.
fn print_file(exec: &mut Execution<'_>, target: &Path) -> ShellResult<()> {
    let mut reader = match exec.fs.open(target) {
        Ok(reader) => reader,
        Err(e) => return report_read_error(exec, target, e),
    };

    let mut decoder = exec.file_encoding.new_decoder();
    let mut buf = [0u8; CHUNK_SIZE];
    let mut text = String::new();
    let mut malformed = false;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return report_read_error(exec, target, e),
        };
        let last = n == 0;

        text.clear();
        // Worst-case capacity lets a single call consume the whole chunk
        text.reserve(decoder.max_utf8_buffer_length(n).unwrap_or(3 * CHUNK_SIZE + 4));
        let (_, _, had_errors) = decoder.decode_to_string(&buf[..n], &mut text, last);
        malformed |= had_errors;
        write!(exec.out, "{}", text)?;

        if last {
            break;
        }
    }

    if malformed {
        debug!("{} is not valid {}", target.display(), exec.file_encoding.name());
    }
    Ok(())
}

fn report_read_error(exec: &mut Execution<'_>, target: &Path, e: io::Error) -> ShellResult<()> {
    warn!("Cannot read {}: {}", target.display(), e);
    writeln!(exec.out, "{}", e)?;
    Ok(())
}
