//! Interactive questions.
//!
//! The answer flow only needs three kinds of question; the [Prompter] trait
//! describes them so the flow can be driven by a terminal or by a script.
//!
//! - `terminal` - Numbered-list prompts on stdin/stdout
//! - `scripted` - Queued answers for tests

pub mod scripted;
pub mod terminal;

pub use scripted::{Answer, ScriptedPrompter};
pub use terminal::TerminalPrompter;

use crate::error::Result;

/// Validation hook for free-text answers; `Err` carries the message shown before re-asking
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// Capability to ask the operator a question and get a typed answer back.
///
/// Implementations block until an acceptable answer is available; invalid
/// free-text answers are re-asked, never returned.
pub trait Prompter {
    /// Single choice from `choices`; returns the selected index
    fn select(&self, message: &str, choices: &[String], default: usize) -> Result<usize>;

    /// Free-text entry; an empty answer yields `default` when one is given
    fn input(&self, message: &str, default: Option<&str>, validate: Validator<'_>) -> Result<String>;

    /// Yes/no question
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;
}
