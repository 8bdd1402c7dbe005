//! The interactive menu loop
//!
//! Each iteration is strictly sequential: menu, selector, operands, evaluation,
//! result or error, continuation prompt. A bad selector returns straight to the
//! menu; a bad operand abandons the operation without reading the rest.

use crate::config::CliConfig;
use crate::console::Console;
use anyhow::Result;
use menucalc_core::{
    BinaryOp, Expression, InputReader, OperationSelector, ParseError, ParseResult,
};
use std::io::{BufRead, Write};

/// How a session finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose Exit
    Exited,
    /// The input stream ended or failed
    InputClosed,
}

/// What the loop does after one menu iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Back to the menu immediately
    Menu,
    /// Continuation prompt, then back to the menu
    Pause,
    /// Stop the session
    End(SessionEnd),
}

/// One interactive calculator session over a console
pub struct Session<R: BufRead, W: Write> {
    console: Console<R, W>,
    reader: InputReader,
    show_banner: bool,
    pause_after_result: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with the given configuration
    pub fn new(console: Console<R, W>, config: &CliConfig) -> Self {
        Self {
            console,
            reader: config.input.reader(),
            show_banner: config.display.show_banner,
            pause_after_result: config.display.pause_after_result,
        }
    }

    /// Release the console
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run until Exit is chosen or input closes
    pub fn run(&mut self) -> Result<SessionEnd> {
        log::info!("Starting calculator session");

        if self.show_banner {
            self.console.banner()?;
        }

        let end = loop {
            match self.iteration()? {
                Flow::Menu => continue,
                Flow::Pause => {
                    if !self.pause_after_result {
                        continue;
                    }
                    if let Err(err) = self.console.pause(&self.reader) {
                        break self.input_closed(&err)?;
                    }
                    self.console.blank()?;
                }
                Flow::End(end) => break end,
            }
        };

        self.console.flush()?;
        log::info!("Calculator session finished: {end:?}");
        Ok(end)
    }

    fn iteration(&mut self) -> Result<Flow> {
        self.console.menu()?;

        let selector = match self.console.read_selector(&self.reader) {
            Ok(selector) => selector,
            Err(ParseError::ReadFailure) => {
                return self.input_closed(&ParseError::ReadFailure).map(Flow::End)
            }
            Err(err) => {
                self.console.error(&err)?;
                return Ok(Flow::Menu);
            }
        };
        log::debug!("Selected {selector:?} ({} operands)", selector.arity());

        if selector == OperationSelector::Exit {
            self.console.farewell()?;
            return Ok(Flow::End(SessionEnd::Exited));
        }

        self.console.header(selector)?;
        let expression = match self.read_expression(selector) {
            Ok(Some(expression)) => expression,
            Ok(None) => return Ok(Flow::Menu),
            Err(ParseError::ReadFailure) => {
                return self.input_closed(&ParseError::ReadFailure).map(Flow::End)
            }
            Err(err) => {
                log::debug!("Abandoning {selector:?}: {err:?}");
                self.console.error(&err)?;
                return Ok(Flow::Pause);
            }
        };

        match expression.evaluate() {
            Ok(result) => self.console.result(&expression.render(result))?,
            Err(kind) => self.console.error(&kind)?,
        }
        Ok(Flow::Pause)
    }

    /// Read the operands the selector needs; `None` for Exit
    fn read_expression(&mut self, selector: OperationSelector) -> ParseResult<Option<Expression>> {
        let expression = match selector {
            OperationSelector::Add => {
                self.binary(BinaryOp::Add, "Enter first number: ", "Enter second number: ")?
            }
            OperationSelector::Subtract => {
                self.binary(BinaryOp::Subtract, "Enter first number: ", "Enter second number: ")?
            }
            OperationSelector::Multiply => {
                self.binary(BinaryOp::Multiply, "Enter first number: ", "Enter second number: ")?
            }
            OperationSelector::Divide => {
                self.binary(BinaryOp::Divide, "Enter dividend: ", "Enter divisor: ")?
            }
            OperationSelector::Power => {
                self.binary(BinaryOp::Power, "Enter base: ", "Enter exponent: ")?
            }
            OperationSelector::SquareRoot => {
                Expression::SquareRoot(self.console.read_operand(&self.reader, "Enter number: ")?)
            }
            OperationSelector::Exit => return Ok(None),
        };
        Ok(Some(expression))
    }

    fn binary(&mut self, op: BinaryOp, first: &str, second: &str) -> ParseResult<Expression> {
        let lhs = self.console.read_operand(&self.reader, first)?;
        let rhs = self.console.read_operand(&self.reader, second)?;
        Ok(Expression::binary(op, lhs, rhs))
    }

    fn input_closed(&mut self, err: &ParseError) -> Result<SessionEnd> {
        log::warn!("Input closed, ending session");
        self.console.error(err)?;
        Ok(SessionEnd::InputClosed)
    }
}
