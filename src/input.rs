//! Console input: name and coordinate prompts with re-prompt loops.

use std::io::{self, BufRead, Write};

use crate::common::GameError;

/// Prompt until the user gives a non-empty name.
pub fn request_player_name() -> io::Result<String> {
    loop {
        let name = prompt_line("Please enter your name: ")?;
        if !name.is_empty() {
            return Ok(name);
        }
        println!("Name cannot be blank. Please try again.");
    }
}

/// Prompt for a zero-based row and column, re-prompting on non-numeric
/// input. Range and duplicate checks are the engine's job; the raw pair
/// is returned as-is.
pub fn request_coordinate(size: usize) -> io::Result<(i64, i64)> {
    let row = request_index(&format!("Guess a row (0-{}): ", size - 1))?;
    let col = request_index(&format!("Guess a column (0-{}): ", size - 1))?;
    Ok((row, col))
}

fn request_index(prompt: &str) -> io::Result<i64> {
    loop {
        let line = prompt_line(prompt)?;
        match parse_index(&line) {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid input. Please enter a numeric value."),
        }
    }
}

fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Parse one typed index. Anything that is not an integer is malformed;
/// negative numbers parse fine and are left to bounds validation.
fn parse_index(text: &str) -> Result<i64, GameError> {
    text.trim().parse().map_err(|_| GameError::MalformedInput)
}
