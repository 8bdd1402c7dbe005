//! Menucalc CLI library
//!
//! This library provides the interactive console front end for the
//! menucalc calculator: the menu loop, console I/O, configuration and
//! argument handling. Validation and arithmetic live in `menucalc_core`.

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod session;

pub use cli::Cli;
pub use config::CliConfig;
pub use console::Console;
pub use error::{CliError, CliResult};
pub use session::{Session, SessionEnd};
