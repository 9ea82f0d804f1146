//! Console prompting with per-field validation.
//!
//! Each field is read with [`Prompter::retry_until_valid`]: a line is read,
//! its first token is checked, and malformed or out-of-range input prints a
//! retry message and waits again. There is no attempt limit. Blank lines
//! are skipped without a message. End of input is fatal, since a closed
//! stream can never produce a valid answer.

use crate::domain::constants::{MAX_YEAR, MIN_YEAR};
use crate::domain::errors::SessionError;
use crate::domain::models::VehicleType;
use std::io::{BufRead, Write};

/// Outcome of checking one line of input for a field.
#[derive(Debug, PartialEq)]
pub enum FieldInput<T> {
    Valid(T),
    /// Nothing on the line; keep waiting silently.
    Blank,
    /// Rejected; print the message and wait for another line.
    Retry(&'static str),
}

pub const YEAR_RETRY: &str = "Invalid year. Please enter a year between 1970 and 2024: ";
pub const TYPE_INPUT_RETRY: &str = "Invalid input. Please enter 1, 2, or 3: ";
pub const TYPE_CHOICE_RETRY: &str = "Invalid choice. Please enter 1, 2, or 3: ";
pub const ACCIDENTS_RETRY: &str = "Invalid input. Please enter a non-negative number: ";
pub const YES_NO_RETRY: &str = "Invalid input. Please enter y or n: ";

pub const VEHICLE_TYPE_MENU: &str =
    "Select Vehicle Type:\n1. Car\n2. Truck\n3. Motorcycle\nEnter your choice (1-3): ";

fn first_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

/// Reads the signed integer at the start of a token, ignoring whatever
/// follows it: "2020abc" is 2020 and "2.5" is 2. `None` when the token does
/// not start with a number or the number overflows.
pub fn leading_integer(token: &str) -> Option<i64> {
    let sign_len = usize::from(token.starts_with(['+', '-']));
    let digits = token[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    token[..sign_len + digits].parse().ok()
}

pub fn parse_year(line: &str) -> FieldInput<i32> {
    let Some(token) = first_token(line) else {
        return FieldInput::Blank;
    };
    match leading_integer(token).and_then(|n| i32::try_from(n).ok()) {
        Some(year) if (MIN_YEAR..=MAX_YEAR).contains(&year) => FieldInput::Valid(year),
        _ => FieldInput::Retry(YEAR_RETRY),
    }
}

pub fn parse_vehicle_type(line: &str) -> FieldInput<VehicleType> {
    let Some(token) = first_token(line) else {
        return FieldInput::Blank;
    };
    match leading_integer(token) {
        Some(choice) => match VehicleType::from_menu_choice(choice) {
            Some(t) => FieldInput::Valid(t),
            None => FieldInput::Retry(TYPE_CHOICE_RETRY),
        },
        None => FieldInput::Retry(TYPE_INPUT_RETRY),
    }
}

pub fn parse_accident_count(line: &str) -> FieldInput<u32> {
    let Some(token) = first_token(line) else {
        return FieldInput::Blank;
    };
    match leading_integer(token).and_then(|n| u32::try_from(n).ok()) {
        Some(count) => FieldInput::Valid(count),
        None => FieldInput::Retry(ACCIDENTS_RETRY),
    }
}

/// Only the first character counts, so "yes" and "No" are accepted.
pub fn parse_yes_no(line: &str) -> FieldInput<bool> {
    let Some(token) = first_token(line) else {
        return FieldInput::Blank;
    };
    match token.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('y') => FieldInput::Valid(true),
        Some('n') => FieldInput::Valid(false),
        _ => FieldInput::Retry(YES_NO_RETRY),
    }
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn write(&mut self, text: &str) -> anyhow::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Bytes that are not UTF-8 are replaced rather than rejected, so a
    /// Latin-1 terminal can still enter a make or model.
    fn read_line(&mut self, field: &'static str) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(SessionError::InputClosed(field).into());
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Prompts once and returns the raw line. Any line is accepted.
    pub fn line(&mut self, prompt: &str, field: &'static str) -> anyhow::Result<String> {
        self.write(prompt)?;
        self.read_line(field)
    }

    /// Reads lines until `parse` accepts one. Never gives up on bad input.
    pub fn retry_until_valid<T>(
        &mut self,
        prompt: &str,
        field: &'static str,
        parse: impl Fn(&str) -> FieldInput<T>,
    ) -> anyhow::Result<T> {
        self.write(prompt)?;
        loop {
            let line = self.read_line(field)?;
            match parse(&line) {
                FieldInput::Valid(value) => return Ok(value),
                FieldInput::Blank => {}
                FieldInput::Retry(message) => {
                    tracing::debug!(field, input = %line, "rejected input");
                    self.write(message)?;
                }
            }
        }
    }

    pub fn year(&mut self) -> anyhow::Result<i32> {
        self.retry_until_valid("Enter vehicle year: ", "vehicle year", parse_year)
    }

    pub fn vehicle_type(&mut self) -> anyhow::Result<VehicleType> {
        self.retry_until_valid(VEHICLE_TYPE_MENU, "vehicle type", parse_vehicle_type)
    }

    pub fn accident_count(&mut self) -> anyhow::Result<u32> {
        self.retry_until_valid(
            "Enter number of accidents: ",
            "accident count",
            parse_accident_count,
        )
    }

    pub fn yes_no(&mut self, question: &str) -> anyhow::Result<bool> {
        let prompt = format!("{} (y/n): ", question);
        self.retry_until_valid(&prompt, "yes/no answer", parse_yes_no)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).expect("utf8 output")
    }

    #[test]
    fn year_bounds_are_inclusive() {
        assert_eq!(parse_year("1970"), FieldInput::Valid(1970));
        assert_eq!(parse_year("2024"), FieldInput::Valid(2024));
        assert_eq!(parse_year("1969"), FieldInput::Retry(YEAR_RETRY));
        assert_eq!(parse_year("2025"), FieldInput::Retry(YEAR_RETRY));
        assert_eq!(parse_year("20x0"), FieldInput::Retry(YEAR_RETRY));
        assert_eq!(parse_year("   "), FieldInput::Blank);
        assert_eq!(parse_year(" 2001 trailing"), FieldInput::Valid(2001));
    }

    #[test]
    fn numbers_are_read_from_the_start_of_the_token() {
        assert_eq!(leading_integer("2020abc"), Some(2020));
        assert_eq!(leading_integer("2.5"), Some(2));
        assert_eq!(leading_integer("-3x"), Some(-3));
        assert_eq!(leading_integer("+7"), Some(7));
        assert_eq!(leading_integer("abc"), None);
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer("99999999999999999999"), None);

        assert_eq!(parse_year("2020abc"), FieldInput::Valid(2020));
        assert_eq!(parse_year("2020.5"), FieldInput::Valid(2020));
        assert_eq!(parse_accident_count("2.5"), FieldInput::Valid(2));
        assert_eq!(parse_vehicle_type("3rd"), FieldInput::Valid(VehicleType::Motorcycle));
        assert_eq!(parse_vehicle_type("x1"), FieldInput::Retry(TYPE_INPUT_RETRY));
    }

    #[test]
    fn year_retries_once_after_garbage() {
        let mut p = prompter("abc\n2020\n");
        assert_eq!(p.year().unwrap(), 2020);
        let out = written(p);
        assert_eq!(out.matches(YEAR_RETRY).count(), 1);
        assert_eq!(out, format!("Enter vehicle year: {}", YEAR_RETRY));
    }

    #[test]
    fn blank_lines_do_not_reprompt() {
        let mut p = prompter("\n  \n1999\n");
        assert_eq!(p.year().unwrap(), 1999);
        assert_eq!(written(p), "Enter vehicle year: ");
    }

    #[test]
    fn type_menu_distinguishes_format_and_range_errors() {
        let mut p = prompter("truck\n4\n2\n");
        assert_eq!(p.vehicle_type().unwrap(), VehicleType::Truck);
        let out = written(p);
        assert!(out.starts_with(VEHICLE_TYPE_MENU));
        assert!(out.contains(TYPE_INPUT_RETRY));
        assert!(out.contains(TYPE_CHOICE_RETRY));
    }

    #[test]
    fn accident_count_rejects_negative_and_non_numeric() {
        assert_eq!(parse_accident_count("0"), FieldInput::Valid(0));
        assert_eq!(parse_accident_count("15"), FieldInput::Valid(15));
        assert_eq!(parse_accident_count("-1"), FieldInput::Retry(ACCIDENTS_RETRY));
        assert_eq!(parse_accident_count("two"), FieldInput::Retry(ACCIDENTS_RETRY));
        assert_eq!(
            parse_accident_count("99999999999"),
            FieldInput::Retry(ACCIDENTS_RETRY)
        );
    }

    #[test]
    fn yes_no_is_case_insensitive_first_char() {
        assert_eq!(parse_yes_no("Y"), FieldInput::Valid(true));
        assert_eq!(parse_yes_no("yes"), FieldInput::Valid(true));
        assert_eq!(parse_yes_no("N"), FieldInput::Valid(false));
        assert_eq!(parse_yes_no("maybe"), FieldInput::Retry(YES_NO_RETRY));

        let mut p = prompter("x\nn\n");
        assert!(!p.yes_no("Is this a commercial vehicle").unwrap());
        assert_eq!(
            written(p),
            format!("Is this a commercial vehicle (y/n): {}", YES_NO_RETRY)
        );
    }

    #[test]
    fn free_text_accepts_empty_and_strips_crlf() {
        let mut p = prompter("\r\nCivic Type R\r\n");
        assert_eq!(p.line("Enter vehicle make: ", "make").unwrap(), "");
        assert_eq!(
            p.line("Enter vehicle model: ", "model").unwrap(),
            "Civic Type R"
        );
    }

    #[test]
    fn non_utf8_bytes_are_replaced_not_fatal() {
        let mut p = Prompter::new(
            Cursor::new(b"Citro\xEBn\n20\xEB20\n2019\n".to_vec()),
            Vec::new(),
        );
        assert_eq!(
            p.line("Enter vehicle make: ", "make").unwrap(),
            "Citro\u{FFFD}n"
        );
        assert_eq!(p.year().unwrap(), 2019);
        assert_eq!(written(p).matches(YEAR_RETRY).count(), 1);
    }

    #[test]
    fn end_of_input_is_fatal() {
        let mut p = prompter("abc\n");
        let err = p.year().unwrap_err();
        assert_eq!(
            err.to_string(),
            "input stream closed while reading vehicle year"
        );
    }
}
