//! Prompts
//!
//! Interactive yes/no questions for the installation flow.
//! Uses the `dialoguer` crate for input handling; unrecognized answers
//! re-prompt instead of falling through to the default.

use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;

use crate::error::Abort;

/// Interpret one line of input as a yes/no answer.
/// Empty input takes the default; anything unrecognized yields `None`.
pub fn parse_answer(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Ask a yes/no question, looping until the answer is recognizable.
/// An interrupt inside the prompt surfaces as [`Abort::Interrupted`].
pub fn ask_yes_no(question: &str, default: bool) -> Result<bool> {
    let suffix = if default { "(Y/n)" } else { "(y/N)" };

    loop {
        let value: String = Input::new()
            .with_prompt(format!(
                "  {} {} {}",
                "\u{2192}".cyan(),
                question.white(),
                suffix.dimmed()
            ))
            .allow_empty(true)
            .interact_text()
            .map_err(|_| Abort::Interrupted)?;

        match parse_answer(&value, default) {
            Some(answer) => return Ok(answer),
            None => println!("{}", "  Please answer yes or no.".yellow()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_takes_default() {
        assert_eq!(parse_answer("", true), Some(true));
        assert_eq!(parse_answer("", false), Some(false));
        assert_eq!(parse_answer("   ", true), Some(true));
    }

    #[test]
    fn test_affirmative_answers() {
        assert_eq!(parse_answer("y", false), Some(true));
        assert_eq!(parse_answer("Yes", false), Some(true));
        assert_eq!(parse_answer("YES", false), Some(true));
    }

    #[test]
    fn test_negative_answers() {
        assert_eq!(parse_answer("n", true), Some(false));
        assert_eq!(parse_answer("No", true), Some(false));
    }

    #[test]
    fn test_unrecognized_input_has_no_decision() {
        assert_eq!(parse_answer("maybe", true), None);
        assert_eq!(parse_answer("yep", false), None);
        assert_eq!(parse_answer("0", true), None);
    }
}
