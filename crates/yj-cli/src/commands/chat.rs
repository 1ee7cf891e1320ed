use std::io::{self, BufRead, Write};

use colored::Colorize;

use yj_core::DivinationWorker;

use crate::LlmArgs;

pub fn run(llm: &LlmArgs) -> Result<(), String> {
    let mut worker = DivinationWorker::new(super::build_diviner(llm)?);

    println!("  {} Yijing divination", "Starting".bold());
    println!("  Send a topic and a 6-digit number, e.g. 'career 385962'. Type 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        println!("{}\n", worker.respond(input));
    }

    Ok(())
}
