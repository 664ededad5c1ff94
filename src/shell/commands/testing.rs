//! Test harness running one command against a temporary directory.

use std::path::Path;

use encoding_rs::Encoding;
use tempfile::TempDir;

use crate::fs::{FileSystem, HostFs};
use crate::shell::{Args, Command, Context, Execution, Flow, Registry};

pub struct Harness {
    dir: TempDir,
    pub context: Context,
    pub file_encoding: &'static Encoding,
    fs: Box<dyn FileSystem>,
    registry: Registry,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_fs(Box::new(HostFs))
    }

    pub fn with_fs(fs: Box<dyn FileSystem>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let context = Context::new(dir.path().to_path_buf());
        Self {
            dir,
            context,
            file_encoding: encoding_rs::UTF_8,
            fs,
            registry: Registry::builtin(),
        }
    }

    /// The temporary directory the session starts in.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Execute `cmd` and return its flow and everything it printed.
    pub fn run(&mut self, cmd: &dyn Command, args: Option<Vec<&str>>) -> (Flow, String) {
        let args = args.map(Args::new);
        let mut out = Vec::new();
        let mut exec = Execution {
            context: &mut self.context,
            registry: &self.registry,
            fs: self.fs.as_ref(),
            file_encoding: self.file_encoding,
            out: &mut out,
        };
        let flow = cmd.execute(&mut exec, args.as_ref()).unwrap();
        (flow, String::from_utf8(out).unwrap())
    }
}
