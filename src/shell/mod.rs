//! Interactive command system.
//!
//! This module provides the read-parse-dispatch loop and the built-in
//! commands it drives.
//!
//! # Architecture
//!
//! - `command.rs` - Defines the `Command` trait, line parsing and the execution context
//! - `registry.rs` - Command registration and case-insensitive lookup
//! - `console.rs` - Prompt output and encoded line input
//! - `repl.rs` - The dispatch loop
//! - `commands/` - Individual command implementations
//!
//! # Adding a New Command
//!
//! 1. Create a new file in `commands/` (e.g., `commands/mycommand.rs`)
//! 2. Define a struct and implement the `Command` trait
//! 3. Export a static instance: `pub static MYCOMMAND: MyCommand = MyCommand;`
//! 4. Add to `commands/mod.rs`: `pub mod mycommand;` and `pub use mycommand::MYCOMMAND;`
//! 5. Register in `registry.rs` BUILTIN_COMMANDS array: `&commands::MYCOMMAND,`

pub mod command;
pub mod commands;
pub mod console;
pub mod registry;
pub mod repl;

pub use command::{Args, Command, Context, Execution, Flow, ParsedCommand};
pub use console::Console;
pub use registry::Registry;
pub use repl::{Shell, ShellState};

pub const MSG_COMMAND_NOT_FOUND: &str = "Command not found";
/// Frame printed around help blocks.
pub const MSG_DELIM: &str = "==========================================";
