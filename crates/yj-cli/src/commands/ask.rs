use yj_core::DivinationWorker;

use crate::LlmArgs;

pub fn run(llm: &LlmArgs, text: &str) -> Result<(), String> {
    let mut worker = DivinationWorker::new(super::build_diviner(llm)?);
    println!("{}", worker.respond(text));
    Ok(())
}
