use crate::display::write_results;
use anyhow::Result;
use newsrank_core::SearchEngine;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};
use std::time::Instant;

pub const PROMPT: &str = "Enter search query (or 'exit' to quit): ";
const SEPARATOR_WIDTH: usize = 50;

pub fn is_exit_command(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "exit" | "quit")
}

/// Search once and print the timed listing to `out`.
pub fn run_query<W: Write>(engine: &SearchEngine, query: &str, top_k: usize, out: &mut W) -> Result<()> {
    let start = Instant::now();
    let results = engine.search(query, top_k)?;
    write_results(out, &results, start.elapsed())
}

/// Interactive prompt. Ends on `exit`/`quit`, Ctrl-C or end of input.
pub fn run(engine: &SearchEngine, top_k: usize) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let stdout = io::stdout();
    loop {
        println!("{}", "-".repeat(SEPARATOR_WIDTH));
        match rl.readline(PROMPT) {
            Ok(line) => {
                if is_exit_command(&line) {
                    break;
                }
                if !line.trim().is_empty() {
                    rl.add_history_entry(line.as_str())?;
                }
                run_query(engine, &line, top_k, &mut stdout.lock())?;
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
