//! Command-line arguments and top-level execution

use crate::config::CliConfig;
use crate::console::Console;
use crate::session::{Session, SessionEnd};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Interactive menu-driven calculator.
///
/// Runs until "7. Exit" is chosen. Every flag is optional.
#[derive(Debug, Parser)]
#[command(name = "menucalc", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Execute an interactive session on the standard streams
    pub fn execute(&self) -> Result<SessionEnd> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        log::debug!("Configuration: {:?}", config);

        let mut session = Session::new(Console::stdio(), &config);
        session.run()
    }

    /// Log filter implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        if !self.quiet {
            env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(self.log_level()),
            )
            .init();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["menucalc"]).unwrap();
        assert_eq!(cli.config, None);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::try_parse_from(["menucalc", "-v"]).unwrap();
        assert_eq!(cli.log_level(), "info");
        let cli = Cli::try_parse_from(["menucalc", "-vv"]).unwrap();
        assert_eq!(cli.log_level(), "debug");
        let cli = Cli::try_parse_from(["menucalc", "-vvvv"]).unwrap();
        assert_eq!(cli.log_level(), "trace");
    }

    #[test]
    fn test_config_and_quiet() {
        let cli = Cli::try_parse_from(["menucalc", "-q", "--config", "calc.toml"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.config, Some(PathBuf::from("calc.toml")));
    }

    #[test]
    fn test_unknown_argument_rejected() {
        assert!(Cli::try_parse_from(["menucalc", "--precision", "3"]).is_err());
    }
}
