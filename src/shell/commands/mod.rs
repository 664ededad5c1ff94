//! Command implementations.
//!
//! Each command is defined in its own module file.

pub mod fs_commands;
pub mod help;
pub mod system;

#[cfg(test)]
pub(crate) mod testing;

// Re-export command instances for registry
pub use fs_commands::{CAT, CD, DIR, PWD};
pub use help::HELP;
pub use system::EXIT;
