//! Command sources - where command lines come from.
//!
//! The interpreter keeps a stack of sources. The bottom one is the
//! interactive stream; every `read` pushes an opened file on top, which is
//! drained before control returns to the source below it.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{CalcError, CalcResult};

/// A named, line-oriented reader.
pub struct CommandSource {
    name: String,
    reader: Box<dyn BufRead>,
    line_no: usize,
    interactive: bool,
}

impl CommandSource {
    /// Wrap the interactive stream. Prompts and listings are shown for it.
    pub fn interactive(reader: Box<dyn BufRead>) -> Self {
        Self::from_reader("<stdin>", reader, true)
    }

    pub fn from_reader(name: impl Into<String>, reader: Box<dyn BufRead>, interactive: bool) -> Self {
        Self {
            name: name.into(),
            reader,
            line_no: 0,
            interactive,
        }
    }

    /// Open a script file.
    pub fn open(path: &Path) -> CalcResult<Self> {
        let file = File::open(path).map_err(|e| CalcError::File {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_reader(
            path.display().to_string(),
            Box::new(BufReader::new(file)),
            false,
        ))
    }

    /// Read the next line without its terminator. `None` at end of input.
    pub fn next_line(&mut self) -> CalcResult<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }
}
