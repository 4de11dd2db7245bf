//! # Prompt Helpers
//!
//! Line-oriented stdin prompts for discrete fields.
//!
//! All helpers are generic over `BufRead`/`Write` so tests drive them
//! with byte slices instead of a terminal. `None` means EOF: the
//! caller decides what an exhausted input stream means (the menu loop
//! treats it as logout).
//!
//! Numeric prompts re-prompt on unparseable input rather than aborting
//! the action; the user stays in the field until it parses or the
//! stream ends.

use std::io::{self, BufRead, Write};

use stockroom_core::Money;

/// Prompts with `label` and reads one line.
///
/// Returns the line without its trailing newline, or `None` on EOF.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prompts for an unsigned integer (product ids, menu choices).
pub fn prompt_u32<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<u32>> {
    loop {
        let Some(line) = prompt_line(input, out, label)? else {
            return Ok(None);
        };
        match line.trim().parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(out, "Please enter a whole number.")?,
        }
    }
}

/// Prompts for a signed integer (quantities).
pub fn prompt_i64<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<i64>> {
    loop {
        let Some(line) = prompt_line(input, out, label)? else {
            return Ok(None);
        };
        match line.trim().parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(out, "Please enter a whole number.")?,
        }
    }
}

/// Prompts for a monetary amount in decimal text (`10`, `0.50`).
pub fn prompt_money<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<Money>> {
    loop {
        let Some(line) = prompt_line(input, out, label)? else {
            return Ok(None);
        };
        match Money::parse_decimal(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => writeln!(out, "{err}")?,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
