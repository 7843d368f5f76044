//! Validation of the text typed at the shell prompts
//!
//! Every parser returns a typed result; none of them loop or print. The shell
//! decides what to do with a rejected line (it re-prompts).

use crate::constants::{MAX_PRECISION, QUIT_WORDS};
use crate::coordinates::CoordinateSystem;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// Decimal number with `.` as the only separator, optional sign and exponent
    static ref NUMBER: Regex = Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$")
        .expect("number pattern is valid");
}

/// Rejected input; every variant is recoverable by asking again
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a menu choice, enter a number from 1 to 4")]
    InvalidMenuChoice(String),

    #[error("'{0}' is not a number, use '.' as the decimal separator")]
    InvalidNumber(String),

    #[error("'{0}' is not a valid precision, enter a whole number from 0 to 100")]
    InvalidPrecision(String),
}

/// Parses a menu line such as `"3"` into a coordinate system
pub fn parse_menu_choice(line: &str) -> Result<CoordinateSystem, InputError> {
    let trimmed = line.trim();
    trimmed
        .parse::<u32>()
        .ok()
        .and_then(|number| CoordinateSystem::try_from(number).ok())
        .ok_or_else(|| InputError::InvalidMenuChoice(trimmed.to_string()))
}

/// Parses a finite decimal number
///
/// ```rust
/// use coordconv::shell::input::parse_number;
///
/// assert_eq!(parse_number(" -2.5 "), Ok(-2.5));
/// assert!(parse_number("2,5").is_err());
/// assert!(parse_number("inf").is_err());
/// ```
pub fn parse_number(line: &str) -> Result<f64, InputError> {
    let trimmed = line.trim();
    let invalid = || InputError::InvalidNumber(trimmed.to_string());

    if !NUMBER.is_match(trimmed) {
        return Err(invalid());
    }
    match trimmed.parse::<f64>() {
        // Huge exponents still overflow to infinity
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid()),
    }
}

/// Like [`parse_number`], but an empty line yields `default`
pub fn parse_optional_number(line: &str, default: f64) -> Result<f64, InputError> {
    if line.trim().is_empty() {
        Ok(default)
    } else {
        parse_number(line)
    }
}

/// Parses the number of decimal digits to print
pub fn parse_precision(line: &str) -> Result<usize, InputError> {
    let trimmed = line.trim();
    match trimmed.parse::<usize>() {
        Ok(precision) if precision <= MAX_PRECISION => Ok(precision),
        _ => Err(InputError::InvalidPrecision(trimmed.to_string())),
    }
}

/// Whether the line asks to leave the shell
pub fn is_quit(line: &str) -> bool {
    let trimmed = line.trim();
    QUIT_WORDS.iter().any(|word| trimmed.eq_ignore_ascii_case(word))
}
