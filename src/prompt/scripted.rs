use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{CutReleaseError, Result};
use crate::prompt::{Prompter, Validator};

/// One queued answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// 0-based choice index for `select`
    Choice(usize),
    /// Raw text for `input`; an empty string takes the default
    Text(String),
    /// Answer for `confirm`
    Confirm(bool),
}

/// Prompter replaying queued answers, for tests.
///
/// Free-text answers go through the validator like a real terminal: a
/// rejected answer is recorded and the next queued answer is used instead.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<Answer>>,
    asked: Mutex<Vec<String>>,
    rejected: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        ScriptedPrompter {
            answers: Mutex::new(answers.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Messages of every question asked, in order (re-asks are not repeated)
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().map(|a| a.clone()).unwrap_or_default()
    }

    /// Validation messages produced by rejected free-text answers
    pub fn rejected(&self) -> Vec<String> {
        self.rejected.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Answers that were never consumed
    pub fn remaining(&self) -> usize {
        self.answers.lock().map(|a| a.len()).unwrap_or_default()
    }

    fn record(&self, message: &str) {
        if let Ok(mut asked) = self.asked.lock() {
            asked.push(message.to_string());
        }
    }

    fn next(&self, message: &str) -> Result<Answer> {
        self.answers
            .lock()
            .map_err(|_| CutReleaseError::prompt("answer queue poisoned"))?
            .pop_front()
            .ok_or_else(|| CutReleaseError::prompt(format!("no scripted answer for '{}'", message)))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, message: &str, choices: &[String], default: usize) -> Result<usize> {
        self.record(message);
        match self.next(message)? {
            Answer::Choice(index) if index < choices.len() => Ok(index),
            Answer::Text(t) if t.is_empty() => Ok(default),
            other => Err(CutReleaseError::prompt(format!(
                "unexpected answer {:?} for '{}' ({} choices)",
                other,
                message,
                choices.len()
            ))),
        }
    }

    fn input(&self, message: &str, default: Option<&str>, validate: Validator<'_>) -> Result<String> {
        self.record(message);
        loop {
            let text = match self.next(message)? {
                Answer::Text(t) if t.is_empty() => default.unwrap_or_default().to_string(),
                Answer::Text(t) => t,
                other => {
                    return Err(CutReleaseError::prompt(format!(
                        "unexpected answer {:?} for '{}'",
                        other, message
                    )))
                }
            };
            match validate(&text) {
                Ok(()) => return Ok(text),
                Err(reason) => {
                    if let Ok(mut rejected) = self.rejected.lock() {
                        rejected.push(reason);
                    }
                }
            }
        }
    }

    fn confirm(&self, message: &str, _default: bool) -> Result<bool> {
        self.record(message);
        match self.next(message)? {
            Answer::Confirm(yes) => Ok(yes),
            other => Err(CutReleaseError::prompt(format!(
                "unexpected answer {:?} for '{}'",
                other, message
            ))),
        }
    }
}
