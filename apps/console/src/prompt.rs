//! # Prompt Helpers
//!
//! Owns stdin and every re-prompt loop. The validation itself lives in
//! `boxoffice_core::validation`; this module just keeps asking until one
//! of those functions returns `Ok`.
//!
//! Malformed input therefore never escapes this file: the workflows in
//! `ops` only ever see typed, validated values.

use std::io::{self, Write};

use boxoffice_core::{validation, Money};

/// Prints a prompt and reads one line from stdin.
///
/// A closed stdin means the operator session is over; there is nothing
/// sensible left to ask, so the process ends cleanly.
fn read_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) => {
            println!();
            tracing::info!("stdin closed, ending session");
            std::process::exit(0);
        }
        Ok(_) => buf,
        Err(err) => {
            tracing::error!(%err, "failed to read stdin");
            std::process::exit(1);
        }
    }
}

/// Prompts for required free text, re-prompting while blank.
pub fn text(field: &'static str, prompt: &str) -> String {
    loop {
        match validation::non_empty(field, &read_line(prompt)) {
            Ok(value) => return value,
            Err(err) => println!("⚠️  {err}"),
        }
    }
}

/// Prompts for an integer within an inclusive range.
pub fn int_in_range(field: &'static str, prompt: &str, min: i64, max: i64) -> i64 {
    loop {
        match validation::int_in_range(field, &read_line(prompt), min, max) {
            Ok(value) => return value,
            Err(err) => println!("⚠️  {err}"),
        }
    }
}

/// Prompts for an age (1-120).
pub fn age(prompt: &str) -> u8 {
    loop {
        match validation::age(&read_line(prompt)) {
            Ok(value) => return value,
            Err(err) => println!("⚠️  {err}"),
        }
    }
}

/// Prompts for a strictly positive amount.
pub fn amount(field: &'static str, prompt: &str) -> Money {
    loop {
        match validation::positive_amount(field, &read_line(prompt)) {
            Ok(value) => return value,
            Err(err) => println!("⚠️  {err}"),
        }
    }
}

/// Asks a yes/no question.
pub fn confirm(question: &str) -> bool {
    let mut answer = validation::yes_no(&read_line(&format!("{question} (y/n): ")));
    while answer.is_none() {
        answer = validation::yes_no(&read_line("⚠️  Answer y or n: "));
    }
    answer.unwrap_or(false)
}

/// Waits for ENTER before returning to the menu.
pub fn pause() {
    let _ = read_line("\nPress ENTER to continue...");
}
