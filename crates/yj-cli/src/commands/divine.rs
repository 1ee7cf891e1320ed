use std::io::{self, BufRead, Write};

use colored::Colorize;

use yj_core::lines::validate_digits;
use yj_core::{Diviner, Reading};

use super::prompt::{DigitChoice, Prompter, QueryChoice};
use crate::LlmArgs;

/// Flags of `yj divine` that are not about the text generator.
pub struct DivineOptions {
    pub numbers: Option<String>,
    pub random: bool,
    pub query: Option<String>,
    pub json: bool,
}

pub fn run(llm: &LlmArgs, opts: &DivineOptions) -> Result<(), String> {
    if let Some(digits) = &opts.numbers {
        validate_digits(digits).map_err(|e| e.to_string())?;
    }

    let mut diviner = super::build_diviner(llm)?;
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let reading = divine(&mut diviner, &mut prompter, opts)?;

    if opts.json {
        let json = serde_json::to_string_pretty(&reading).map_err(|e| e.to_string())?;
        println!("{json}");
    } else {
        println!();
        println!("{reading}");
    }
    Ok(())
}

/// Resolve digits and query, prompting for whatever the flags left open.
fn divine<R: BufRead, W: Write>(
    diviner: &mut Diviner,
    prompter: &mut Prompter<R, W>,
    opts: &DivineOptions,
) -> Result<Reading, String> {
    let digits = match (&opts.numbers, opts.random) {
        (Some(d), _) => Some(d.clone()),
        (None, true) => None,
        (None, false) => match prompter.choose_digits()? {
            DigitChoice::Random => None,
            DigitChoice::Manual(d) => Some(d),
        },
    };

    let query = match &opts.query {
        Some(q) => QueryChoice::Custom(q.clone()),
        None => prompter.choose_query()?,
    };

    if !opts.json {
        eprintln!("{}", "Interpreting the hexagram, please wait...".dimmed());
    }

    let reading = match query {
        QueryChoice::Direction(d) => diviner.cast_for(digits.as_deref(), d),
        QueryChoice::Custom(q) => diviner.cast(digits.as_deref(), &q),
    }
    .map_err(|e| e.to_string())?;

    if digits.is_none() && !opts.json {
        eprintln!("Auto-generated number: {}", reading.cast.digits.bold());
    }
    Ok(reading)
}
