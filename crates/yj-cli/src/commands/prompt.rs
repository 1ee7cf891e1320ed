//! Interactive menus for `yj divine`.

use std::io::{BufRead, Write};

use colored::Colorize;

use yj_core::Direction;
use yj_core::lines::validate_digits;

/// How the user wants to supply digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigitChoice {
    /// Let the diviner generate them.
    Random,
    /// Six digits typed by the user.
    Manual(String),
}

/// What the user wants to ask about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryChoice {
    /// One of the fixed menu entries.
    Direction(Direction),
    /// Free text, classified by keyword.
    Custom(String),
}

/// Line-oriented prompts over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and read one trimmed line. EOF is an error.
    fn ask(&mut self, question: &str) -> Result<String, String> {
        write!(self.output, "{question}").map_err(|e| e.to_string())?;
        self.output.flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err("no input".into()),
            Ok(_) => Ok(line.trim().to_string()),
            Err(e) => Err(e.to_string()),
        }
    }

    fn say(&mut self, text: &str) -> Result<(), String> {
        writeln!(self.output, "{text}").map_err(|e| e.to_string())
    }

    /// Random or manual digits. Manual entry repeats until six digits are given.
    pub fn choose_digits(&mut self) -> Result<DigitChoice, String> {
        self.say("Choose how to cast:")?;
        self.say("  1. Auto-cast (generate a random number)")?;
        self.say("  2. Enter a 6-digit number")?;

        if self.ask("> ")? != "2" {
            return Ok(DigitChoice::Random);
        }

        loop {
            let digits = self.ask("Enter 6 digits: ")?;
            match validate_digits(&digits) {
                Ok(()) => return Ok(DigitChoice::Manual(digits)),
                Err(_) => {
                    let msg = "Invalid input, please enter exactly 6 digits.".yellow();
                    self.say(&msg.to_string())?;
                }
            }
        }
    }

    /// One of the four directions or free text.
    pub fn choose_query(&mut self) -> Result<QueryChoice, String> {
        self.say("What would you like to ask about?")?;
        for (i, d) in Direction::all().iter().enumerate() {
            self.say(&format!("  {}. {d}", i + 1))?;
        }
        self.say(&format!("  {}. Something else", Direction::all().len() + 1))?;

        let choice = self.ask("> ")?;
        if let Some(direction) = Direction::parse(&choice) {
            return Ok(QueryChoice::Direction(direction));
        }
        let text = self.ask("Describe your question: ")?;
        Ok(QueryChoice::Custom(text))
    }
}
