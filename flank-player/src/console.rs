//! Line-oriented terminal I/O, injectable for scripted play.

use crate::error::PlayError;
use std::cell::RefCell;
use std::fmt::Display;
use std::io::{self, BufRead, BufReader, Cursor, Write};
use std::rc::Rc;

/// The input and output streams a session talks through.
pub struct Console {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl Console {
    pub fn new(input: impl BufRead + 'static, output: impl Write + 'static) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Bind to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }

    /// A console fed from `script`, recording everything written to it.
    pub fn scripted(script: &str) -> (Self, Transcript) {
        let transcript = Transcript::default();
        let console = Self::new(Cursor::new(script.to_owned()), transcript.clone());
        (console, transcript)
    }

    /// Write one line.
    pub fn say(&mut self, text: impl Display) -> Result<(), PlayError> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line with surrounding whitespace removed.
    /// Running out of input is [`PlayError::InputClosed`].
    pub fn read_line(&mut self) -> Result<String, PlayError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PlayError::InputClosed);
        }
        Ok(line.trim().to_owned())
    }

    pub fn prompt(&mut self, text: impl Display) -> Result<String, PlayError> {
        self.say(text)?;
        self.read_line()
    }

    /// Prompt until the answer is one of `options`, compared case-insensitively.
    /// Returns the answer lowercased.
    pub fn choose(
        &mut self,
        text: impl Display,
        options: &[&str],
        retry: impl Display,
    ) -> Result<String, PlayError> {
        let mut answer = self.prompt(text)?.to_lowercase();
        while !options.iter().any(|option| option.eq_ignore_ascii_case(&answer)) {
            answer = self.prompt(&retry)?.to_lowercase();
        }
        Ok(answer)
    }
}

/// Shared in-memory sink for console output.
#[derive(Clone, Debug, Default)]
pub struct Transcript(Rc<RefCell<Vec<u8>>>);

impl Transcript {
    /// Everything written so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for Transcript {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
