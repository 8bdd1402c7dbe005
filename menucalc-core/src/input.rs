//! Line-oriented input validation
//!
//! [`InputReader`] writes a prompt, consumes exactly one line and turns it into
//! an [`Operand`] or an [`OperationSelector`]. Streams are borrowed per call;
//! the reader itself only carries its line-length limit.
//!
//! The text rules are shared with the pure [`parse_operand`] and
//! [`parse_selector`] helpers:
//! - one trailing `\n` or `\r\n` is dropped, then ASCII whitespace is trimmed
//! - the remainder must be consumed completely by the literal
//! - operands must be finite (`inf`, `nan` and `1e400` are rejected)

use std::io::{self, BufRead, Read, Write};
use std::num::IntErrorKind;

use crate::error::{ParseError, ParseResult};
use crate::operand::Operand;
use crate::selector::OperationSelector;

/// Default maximum line length in bytes, terminator excluded
pub const DEFAULT_MAX_LINE_LENGTH: usize = 256;

/// Prompt written before reading a menu selection
pub const SELECTOR_PROMPT: &str = "Enter operation number (1-7): ";

/// Reads prompts and validated values from a line stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputReader {
    max_line_length: usize,
}

impl Default for InputReader {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl InputReader {
    /// Create a reader with the default line limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum accepted line length (at least one byte)
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length.max(1);
        self
    }

    /// Maximum accepted line length in bytes
    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    /// Prompt for and parse a single finite operand
    pub fn read_operand<R, W>(
        &self,
        prompt: &str,
        input: &mut R,
        output: &mut W,
    ) -> ParseResult<Operand>
    where
        R: BufRead,
        W: Write,
    {
        let line = self.read_line(prompt, input, output)?;
        parse_operand(&line)
    }

    /// Prompt for and parse a menu selection in `1..=7`
    pub fn read_selector<R, W>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> ParseResult<OperationSelector>
    where
        R: BufRead,
        W: Write,
    {
        let line = self.read_line(SELECTOR_PROMPT, input, output)?;
        parse_selector(&line)
    }

    /// Prompt for one line and return it without its terminator.
    ///
    /// At most `max_line_length` bytes plus a `\r\n` terminator are buffered.
    /// Longer lines are skipped up to and including their newline and reported
    /// as [`ParseError::MalformedNumber`] carrying only the first
    /// `max_line_length` bytes, so the next read starts on a fresh line.
    pub fn read_line<R, W>(
        &self,
        prompt: &str,
        input: &mut R,
        output: &mut W,
    ) -> ParseResult<String>
    where
        R: BufRead,
        W: Write,
    {
        write_prompt(prompt, output)?;

        let cap = self.max_line_length + 2;
        let mut buffer = Vec::with_capacity(cap.min(DEFAULT_MAX_LINE_LENGTH + 2));
        let read = input
            .by_ref()
            .take(cap as u64)
            .read_until(b'\n', &mut buffer)
            .map_err(read_failure)?;
        if read == 0 {
            log::debug!("input stream exhausted");
            return Err(ParseError::ReadFailure);
        }

        if read == cap && buffer.last() != Some(&b'\n') {
            let skipped = discard_line(input).map_err(read_failure)?;
            log::debug!(
                "rejecting over-long line ({} bytes skipped, limit {})",
                read + skipped,
                self.max_line_length
            );
            buffer.truncate(self.max_line_length);
            return Err(ParseError::malformed(String::from_utf8_lossy(&buffer)));
        }

        let line = match String::from_utf8(buffer) {
            Ok(line) => line,
            Err(err) => {
                let lossy = String::from_utf8_lossy(err.as_bytes()).into_owned();
                log::debug!("rejecting non UTF-8 input line");
                return Err(ParseError::malformed(strip_terminator(&lossy)));
            }
        };

        let content = strip_terminator(&line);
        if content.len() > self.max_line_length {
            log::debug!(
                "rejecting {} byte line (limit {})",
                content.len(),
                self.max_line_length
            );
            return Err(ParseError::malformed(
                String::from_utf8_lossy(&content.as_bytes()[..self.max_line_length]),
            ));
        }

        Ok(content.to_string())
    }
}

/// Parse a complete floating-point literal into a finite [`Operand`]
pub fn parse_operand(text: &str) -> ParseResult<Operand> {
    let literal = trim_line(text);
    if literal.is_empty() {
        log::debug!("rejecting empty operand");
        return Err(ParseError::malformed(literal));
    }

    let value: f64 = literal.parse().map_err(|_| {
        log::debug!("rejecting operand {literal:?}");
        ParseError::malformed(literal)
    })?;

    Operand::new(value).ok_or_else(|| {
        log::debug!("rejecting non-finite operand {literal:?}");
        ParseError::malformed(literal)
    })
}

/// Parse a complete base-10 integer literal into an [`OperationSelector`]
pub fn parse_selector(text: &str) -> ParseResult<OperationSelector> {
    let literal = trim_line(text);

    match literal.parse::<i64>() {
        Ok(number) => OperationSelector::from_number(number).ok_or_else(|| {
            log::debug!("selector {number} outside menu");
            ParseError::out_of_range(literal)
        }),
        // Syntactically an integer, just too large for any menu entry
        Err(err)
            if matches!(
                err.kind(),
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
            ) =>
        {
            log::debug!("selector {literal:?} overflows");
            Err(ParseError::out_of_range(literal))
        }
        Err(_) => {
            log::debug!("rejecting selector {literal:?}");
            Err(ParseError::malformed(literal))
        }
    }
}

/// Skip the rest of the current line, newline included, without buffering it
fn discard_line<R: BufRead>(input: &mut R) -> io::Result<usize> {
    let mut skipped = 0;
    loop {
        let (available, newline) = match input.fill_buf() {
            Ok(chunk) => (chunk.len(), chunk.iter().position(|&b| b == b'\n')),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        match newline {
            Some(index) => {
                input.consume(index + 1);
                return Ok(skipped + index + 1);
            }
            None if available == 0 => return Ok(skipped),
            None => {
                input.consume(available);
                skipped += available;
            }
        }
    }
}

fn read_failure(err: io::Error) -> ParseError {
    log::debug!("input stream error: {err}");
    ParseError::ReadFailure
}

fn write_prompt<W: Write>(prompt: &str, output: &mut W) -> ParseResult<()> {
    output
        .write_all(prompt.as_bytes())
        .and_then(|()| output.flush())
        .map_err(|err| {
            log::debug!("failed to write prompt: {err}");
            ParseError::ReadFailure
        })
}

fn strip_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

fn trim_line(text: &str) -> &str {
    strip_terminator(text).trim_matches(|c: char| c.is_ascii_whitespace())
}
