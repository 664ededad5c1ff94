//! Unified error types for the command line.
//!
//! Library code returns [`ShellResult<T>`]. User mistakes (unknown command,
//! wrong path kind) are never errors: commands print a message and carry on.
//! A `ShellError` means the console or the startup configuration is broken.
//!
//! ## Usage Examples
//!
//! Propagating console failures:
//! ```ignore
//! writeln!(out, "{}", line)?;
//! ```
//!
//! Rejecting configuration:
//! ```ignore
//! return Err(ShellError::UnknownEncoding(label.to_string()));
//! ```

#[derive(thiserror::Error, Debug)]
pub enum ShellError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("config: {0}")]
    Config(#[from] Box<figment::Error>),
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),
    #[error("Console encoding is not ASCII-compatible: {0}")]
    UnsupportedEncoding(String),
}

impl From<figment::Error> for ShellError {
    fn from(err: figment::Error) -> Self {
        ShellError::Config(Box::new(err))
    }
}

/// Result type alias used across the crate.
pub type ShellResult<T> = Result<T, ShellError>;
