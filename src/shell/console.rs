//! Console I/O: prompt output and line input in the configured encoding.

use std::io::{BufRead, Write};

use encoding_rs::Encoding;

use crate::ShellResult;

pub struct Console<R, W> {
    reader: R,
    writer: W,
    encoding: &'static Encoding,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W, encoding: &'static Encoding) -> Self {
        Self {
            reader,
            writer,
            encoding,
        }
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn prompt(&mut self, prompt: &str) -> ShellResult<()> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Read one line without its terminator. `None` at end of input.
    pub fn read_line(&mut self) -> ShellResult<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        let (line, had_errors) = self.encoding.decode_without_bom_handling(&buf);
        if had_errors {
            warn!("Input line is not valid {}", self.encoding.name());
        }
        Ok(Some(line.into_owned()))
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
