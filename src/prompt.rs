// src/prompt.rs

//! Interactive prompts for collecting recipe input
//!
//! Command handlers receive a [`Prompter`] rather than touching stdin
//! directly, so the same handlers run against a terminal or scripted input.
//! The helpers in this module re-ask until the answer validates; only I/O
//! failures (including end of input) are returned as errors.

use crate::error::{Error, Result};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Source of user answers
pub trait Prompter {
    /// Ask a free-text question and return the trimmed answer
    fn text(&mut self, message: &str) -> Result<String>;

    /// Ask a yes/no question; an empty answer picks `default`
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;

    /// Show a message without expecting an answer
    fn notice(&mut self, message: &str) -> Result<()>;
}

/// Line-oriented prompter over any reader/writer pair
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl LinePrompt<StdinLock<'static>, Stdout> {
    /// Prompt on the process terminal
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect what was shown
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            )));
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompt<R, W> {
    fn text(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}: ", message)?;
        self.output.flush()?;
        self.read_answer()
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            write!(self.output, "{} {}: ", message, hint)?;
            self.output.flush()?;

            match self.read_answer()?.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}

/// Answers for a new recipe
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDetails {
    pub name: String,
    pub cooking_time: u32,
    pub servings: u32,
}

/// Answers for a new ingredient line
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientDetails {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

/// Ask `message` until `parse` accepts the answer
pub fn ask<P, T, F>(prompter: &mut P, message: &str, parse: F) -> Result<T>
where
    P: Prompter + ?Sized,
    F: Fn(&str) -> std::result::Result<T, String>,
{
    loop {
        let answer = prompter.text(message)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(reason) => prompter.notice(&reason)?,
        }
    }
}

fn non_empty(what: &'static str) -> impl Fn(&str) -> std::result::Result<String, String> {
    move |answer: &str| {
        if answer.is_empty() {
            Err(format!("{what} must not be empty."))
        } else {
            Ok(answer.to_string())
        }
    }
}

fn whole_number(min: u32) -> impl Fn(&str) -> std::result::Result<u32, String> {
    move |answer: &str| match answer.parse::<u32>() {
        Ok(n) if n >= min => Ok(n),
        _ => Err(format!("Please enter a whole number of at least {min}.")),
    }
}

fn positive_amount(answer: &str) -> std::result::Result<f64, String> {
    match answer.parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => Ok(n),
        _ => Err("Please enter a number greater than zero.".to_string()),
    }
}

/// Name, cooking time, and servings for a new recipe
pub fn recipe_details<P: Prompter + ?Sized>(prompter: &mut P) -> Result<RecipeDetails> {
    Ok(RecipeDetails {
        name: ask(prompter, "Recipe name", non_empty("Name"))?,
        cooking_time: ask(prompter, "Cooking time (minutes)", whole_number(0))?,
        servings: ask(prompter, "Servings", whole_number(1))?,
    })
}

/// Name, amount, and unit for an ingredient; the unit may be left blank
pub fn ingredient_details<P: Prompter + ?Sized>(prompter: &mut P) -> Result<IngredientDetails> {
    Ok(IngredientDetails {
        name: ask(prompter, "Ingredient name", non_empty("Name"))?,
        amount: ask(prompter, "Amount", positive_amount)?,
        unit: prompter.text("Unit (e.g. g, cup; blank for none)")?,
    })
}

/// Text of a new step
pub fn instruction<P: Prompter + ?Sized>(prompter: &mut P) -> Result<String> {
    ask(prompter, "Step instruction", non_empty("Instruction"))
}

/// Show `steps` and ask for a 1-based step number; returns the 0-based index
///
/// `steps` must not be empty.
pub fn step_selection<P: Prompter + ?Sized>(prompter: &mut P, steps: &[String]) -> Result<usize> {
    prompter.notice(&crate::render::render_steps(steps))?;
    let count = steps.len() as u32;
    let position = ask(
        prompter,
        &format!("Step to remove (1-{count})"),
        |answer| match answer.parse::<u32>() {
            Ok(n) if (1..=count).contains(&n) => Ok(n),
            _ => Err(format!("Please enter a number between 1 and {count}.")),
        },
    )?;
    Ok(position as usize - 1)
}
