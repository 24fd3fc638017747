//! User input utilities for interactive command-line prompts.
//!
//! Prompts go through [`ConfirmationProvider`] so handlers can be driven
//! by scripted answers in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use crate::error::CliError;

/// Source of yes/no answers.
pub trait ConfirmationProvider: Send + Sync {
    /// Show `prompt` and return whether the answer was affirmative.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn confirm(&self, prompt: &str) -> Result<bool, CliError>;
}

/// Reads one line from stdin per confirmation.
///
/// End of input counts as "no".
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirmation;

impl ConfirmationProvider for StdinConfirmation {
    fn confirm(&self, prompt: &str) -> Result<bool, CliError> {
        print!("{prompt}");
        io::stdout().flush()?;

        match read_answer(&mut io::stdin().lock())? {
            Some(answer) => Ok(is_affirmative(&answer)),
            None => {
                println!();
                Ok(false)
            }
        }
    }
}

/// Read one answer line; `None` at end of input.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn read_answer(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Replays queued answers; an exhausted queue answers "no".
#[derive(Debug, Default)]
pub struct ScriptedConfirmation {
    answers: Mutex<VecDeque<String>>,
}

impl ScriptedConfirmation {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
        }
    }
}

impl ConfirmationProvider for ScriptedConfirmation {
    fn confirm(&self, prompt: &str) -> Result<bool, CliError> {
        let answer = self
            .answers
            .lock()
            .map_err(|_| CliError::Unexpected("confirmation script poisoned".to_string()))?
            .pop_front();
        print!("{prompt}");
        Ok(answer.as_deref().is_some_and(is_affirmative))
    }
}

/// Accepts `y` or `yes` in any case, ignoring surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "y" || answer == "yes"
}
