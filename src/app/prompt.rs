//! Line-based prompting over arbitrary input and output streams.

use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading answers.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Input ended while a prompt was waiting for an answer.
    #[error("input closed while waiting for an answer to '{prompt}'")]
    InputClosed {
        /// The prompt that was left unanswered
        prompt: String,
    },
    /// Reading input or writing the prompt failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Asks questions on `output` and reads trimmed answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given streams.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `prompt` (no newline) and returns the trimmed answer line.
    ///
    /// Bytes that are not valid UTF-8 become `U+FFFD` instead of failing.
    pub fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(PromptError::InputClosed {
                prompt: prompt.trim_end().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    /// Asks until `parse` accepts the answer.
    ///
    /// There is no retry limit; only a closed input ends the loop early.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, PromptError> {
        loop {
            let answer = self.ask(prompt)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            debug!(%answer, "unrecognized answer, asking again");
        }
    }

    /// Asks for a comma-separated list.
    pub fn ask_list(&mut self, prompt: &str) -> Result<Vec<String>, PromptError> {
        Ok(split_list(&self.ask(prompt)?))
    }

    /// Consumes the prompter, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Splits a comma-separated answer into trimmed fields.
///
/// Trailing empty fields are dropped before trimming, so `""` gives no
/// fields and `"a,b,"` gives two, while `"a,,b"` keeps its empty middle field.
pub fn split_list(line: &str) -> Vec<String> {
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields.into_iter().map(|f| f.trim().to_string()).collect()
}
