//! # Prompter
//!
//! Line-oriented terminal input over any `BufRead`/`Write` pair, so the
//! menu can be driven by stdin in production and by a `Cursor` in tests.
//!
//! Numbers accept both `.` and `,` as the decimal separator ("0,05").

use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{CliError, CliResult};
use lanchonete_core::Money;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Writes one line of output.
    pub fn say(&mut self, text: &str) -> CliResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Shows `label` and reads one trimmed line; `None` at end of input.
    pub fn line(&mut self, label: &str) -> CliResult<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// Like [`Prompter::line`], treating end of input as an error.
    pub fn ask(&mut self, label: &str) -> CliResult<String> {
        self.line(label)?.ok_or_else(CliError::end_of_input)
    }

    pub fn decimal(&mut self, label: &str) -> CliResult<Decimal> {
        let raw = self.ask(label)?;
        parse_decimal(&raw)
    }

    pub fn money(&mut self, label: &str) -> CliResult<Money> {
        self.decimal(label).map(Money::from_decimal)
    }

    pub fn count(&mut self, label: &str) -> CliResult<u32> {
        let raw = self.ask(label)?;
        raw.parse::<u32>()
            .map_err(|_| CliError::invalid_input(format!("'{raw}' is not a whole number")))
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parses "12", "0.05" or "0,05".
pub fn parse_decimal(raw: &str) -> CliResult<Decimal> {
    let normalized = raw.trim().replace(',', ".");
    Decimal::from_str(&normalized)
        .map_err(|_| CliError::invalid_input(format!("'{}' is not a number", raw.trim())))
}
