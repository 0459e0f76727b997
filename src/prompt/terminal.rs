use std::io::{self, BufRead, Write};

use console::style;

use crate::error::{CutReleaseError, Result};
use crate::prompt::{Prompter, Validator};

/// Prompts on stdout, answers read line by line from stdin.
///
/// Pressing Enter picks the default. End of input is an error rather than
/// an endless re-prompt.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        TerminalPrompter
    }

    fn ask(&self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Err(CutReleaseError::prompt("input closed before an answer was given"));
        }
        Ok(input.trim().to_string())
    }
}

/// Interpret a 1-based selection; empty input picks `default` (0-based).
pub fn parse_selection(input: &str, len: usize, default: usize) -> Option<usize> {
    if input.is_empty() {
        return Some(default);
    }
    match input.parse::<usize>() {
        Ok(n) if n > 0 && n <= len => Some(n - 1),
        _ => None,
    }
}

/// Interpret a yes/no answer; empty input picks `default`.
pub fn parse_confirmation(input: &str, default: bool) -> Option<bool> {
    match input.to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

impl Prompter for TerminalPrompter {
    fn select(&self, message: &str, choices: &[String], default: usize) -> Result<usize> {
        if choices.is_empty() {
            return Err(CutReleaseError::prompt(format!("no choices for '{}'", message)));
        }
        let default = default.min(choices.len() - 1);

        println!("\n{}", style(message).bold());
        for (i, choice) in choices.iter().enumerate() {
            if i == default {
                println!("  {}. {}", i + 1, style(choice).cyan());
            } else {
                println!("  {}. {}", i + 1, choice);
            }
        }

        loop {
            let input = self.ask(&format!(
                "\nSelect (1-{}) [default: {}]: ",
                choices.len(),
                default + 1
            ))?;
            match parse_selection(&input, choices.len(), default) {
                Some(index) => return Ok(index),
                None => println!("{}", style(format!("'{}' is not a valid choice", input)).red()),
            }
        }
    }

    fn input(&self, message: &str, default: Option<&str>, validate: Validator<'_>) -> Result<String> {
        let prompt = match default {
            Some(d) => format!("\n{} [{}]: ", style(message).bold(), d),
            None => format!("\n{}: ", style(message).bold()),
        };

        loop {
            let mut answer = self.ask(&prompt)?;
            if answer.is_empty() {
                if let Some(d) = default {
                    answer = d.to_string();
                }
            }
            match validate(&answer) {
                Ok(()) => return Ok(answer),
                Err(reason) => println!("{}", style(reason).red()),
            }
        }
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };
        loop {
            let input = self.ask(&format!("\n{} {}: ", style(message).bold(), hint))?;
            match parse_confirmation(&input, default) {
                Some(answer) => return Ok(answer),
                None => println!("{}", style("Please answer y or n").red()),
            }
        }
    }
}
