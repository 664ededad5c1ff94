//! Filesystem access used by the built-in commands.
//!
//! Commands never touch `std::fs` directly; they go through [`FileSystem`]
//! so the session can be driven against the host or a test double.

mod ops;

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

pub use ops::resolve_path;

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_file: bool,
}

/// Host filesystem operations consumed by the commands.
pub trait FileSystem {
    /// List the entries of `path`, in no particular order.
    fn list_entries(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether `path` exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Absolute form of `path`, relative paths are taken against the
    /// process working directory.
    fn absolute_path(&self, path: &Path) -> io::Result<PathBuf>;

    /// Open the file for sequential reading. Dropping the reader closes it.
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read>>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostFs;

impl FileSystem for HostFs {
    fn list_entries(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            // file_type() does not follow symlinks, metadata() does
            let is_file = std::fs::metadata(entry.path())
                .map(|m| m.is_file())
                .unwrap_or(false);
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_file,
            });
        }
        Ok(entries)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn absolute_path(&self, path: &Path) -> io::Result<PathBuf> {
        std::path::absolute(path)
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read>> {
        Ok(Box::new(File::open(path)?))
    }
}
