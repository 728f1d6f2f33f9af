//! Shared helpers for CLI commands.
//!
//! Exit codes: 0 = verified, 1 = verification failed, 2 = the question
//! could not be answered (bad name, missing file, missing entry).

use std::process::exit;
use std::str::FromStr;

pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

pub fn read_file_or_exit(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("error: cannot read {path}: {e}");
            exit(EXIT_ERROR);
        }
    }
}

pub fn parse_name_or_exit<T>(name: &str) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match name.parse() {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("error: {e}");
            exit(EXIT_ERROR);
        }
    }
}

pub fn ok_or_exit<T, E: std::fmt::Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("error: {e}");
            exit(EXIT_ERROR);
        }
    }
}

/// Print a single verdict and exit with the matching code.
pub fn report_verdict(name: &str, index: Option<usize>, verdict: bool, json: bool) -> ! {
    if json {
        let payload = serde_json::json!({
            "name": name,
            "index": index,
            "verified": verdict,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        match index {
            Some(i) => println!("{name} realization {i}: {}", verdict_word(verdict)),
            None => println!("{name}: {}", verdict_word(verdict)),
        }
    }
    exit(if verdict { 0 } else { EXIT_FAILED });
}

fn verdict_word(verdict: bool) -> &'static str {
    if verdict { "verified" } else { "FAILED" }
}
