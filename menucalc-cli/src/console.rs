//! Console collaborator: owns the line input and the transcript output

use anyhow::{Context, Result};
use menucalc_core::{InputReader, Operand, OperationSelector, ParseError, ParseResult};
use std::fmt::Display;
use std::io::{self, BufRead, Write};

const BANNER: &str = "
 ********************************
**        Menu Calculator        **
**   checked f64 arithmetic      **
 ********************************
";

const CONTINUE_PROMPT: &str = "\nPress Enter to continue...";

/// Line-oriented console over any reader/writer pair
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given streams
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Release the underlying streams
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print the startup banner
    pub fn banner(&mut self) -> Result<()> {
        self.line(BANNER)
    }

    /// Print the operation menu
    pub fn menu(&mut self) -> Result<()> {
        self.line("Available Operations:")?;
        for selector in OperationSelector::ALL {
            self.line(selector)?;
        }
        self.line("")
    }

    /// Print the section header for an operation
    pub fn header(&mut self, selector: OperationSelector) -> Result<()> {
        self.line(format_args!("\n=== {} ===", selector.label()))
    }

    /// Print a successful result line
    pub fn result(&mut self, rendered: &str) -> Result<()> {
        self.line(format_args!("Result: {rendered}"))
    }

    /// Print an error line
    pub fn error(&mut self, error: &dyn Display) -> Result<()> {
        self.line(format_args!("Error: {error}"))
    }

    /// Print the goodbye message
    pub fn farewell(&mut self) -> Result<()> {
        self.line("\nThank you for using the calculator!")?;
        self.flush()
    }

    /// Prompt for the menu selection
    pub fn read_selector(&mut self, reader: &InputReader) -> ParseResult<OperationSelector> {
        reader.read_selector(&mut self.input, &mut self.output)
    }

    /// Prompt for one operand
    pub fn read_operand(&mut self, reader: &InputReader, prompt: &str) -> ParseResult<Operand> {
        reader.read_operand(prompt, &mut self.input, &mut self.output)
    }

    /// Show the continuation prompt and wait for one line
    pub fn pause(&mut self, reader: &InputReader) -> ParseResult<()> {
        match reader.read_line(CONTINUE_PROMPT, &mut self.input, &mut self.output) {
            // Only the key press matters, not what was typed
            Ok(_) | Err(ParseError::MalformedNumber { .. }) => {}
            Err(err) => return Err(err),
        }
        Ok(())
    }

    /// Print an empty line
    pub fn blank(&mut self) -> Result<()> {
        self.line("")
    }

    /// Flush buffered output
    pub fn flush(&mut self) -> Result<()> {
        self.output.flush().context("Failed to flush console output")
    }

    fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}").context("Failed to write to console")
    }
}

impl Console<io::StdinLock<'static>, io::StdoutLock<'static>> {
    /// Create a console over the process's standard streams
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}
