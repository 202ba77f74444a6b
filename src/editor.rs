//! Line input for the interpreter, wrapping rustyline.

use std::fmt;
use std::io;
use std::path::Path;

use failure::{Fail, ResultExt};
use rustyline::{self, error::ReadlineError, Config};

use crate::errors::{ErrorKind, Result};

pub struct Editor {
    internal: rustyline::Editor<()>,
}

impl Editor {
    pub fn with_capacity(history_capacity: usize) -> Editor {
        let config = Config::builder()
            .max_history_size(history_capacity)
            .history_ignore_space(true)
            .build();

        Editor {
            internal: rustyline::Editor::with_config(config),
        }
    }

    /// Reads one line. Returns `None` when end of file is reached.
    ///
    /// An interrupt at the prompt reads as an empty line: the interpreter
    /// ignores SIGINT, so the only sensible response is a reprompt.
    pub fn readline(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.internal.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(e) => Err(e.context(ErrorKind::Readline).into()),
        }
    }

    pub fn add_history_entry(&mut self, line: &str) {
        self.internal.add_history_entry(line);
    }

    pub fn load_history<P: AsRef<Path> + ?Sized>(&mut self, path: &P) -> Result<()> {
        match self.internal.load_history(path) {
            Ok(()) => Ok(()),
            Err(ReadlineError::Io(ref inner)) if inner.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.context(ErrorKind::Readline).into()),
        }
    }

    pub fn save_history<P: AsRef<Path> + ?Sized>(&mut self, path: &P) -> Result<()> {
        self.internal
            .save_history(path)
            .context(ErrorKind::Readline)?;
        Ok(())
    }
}

impl fmt::Debug for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "history entries: {}", self.internal.history().len())
    }
}
