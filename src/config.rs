//! Configuration for the definition file checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Usage text and argument warnings

use clap::Parser;
use log::LevelFilter;
use std::fmt;
use std::path::PathBuf;

/// Command-line arguments.
///
/// The built-in help flag is disabled: `-h` is an ordinary positional and
/// ends up as the file name.
#[derive(Debug, Parser)]
#[command(name = "defparser")]
#[command(about = "Parse and validate a Singularity definition file")]
#[command(disable_help_flag = true)]
pub struct Args {
    /// Log level for diagnostics on stderr
    #[arg(
        long,
        default_value = "warn",
        value_parser = clap::value_parser!(LevelFilter),
        help = "Log level (off, error, warn, info, debug, trace)"
    )]
    pub log_level: LevelFilter,

    /// Print the parsed headers and sections as JSON before validating
    #[arg(long)]
    pub dump: bool,

    /// Definition file, then anything else (ignored)
    #[arg(allow_hyphen_values = true, num_args = 0..)]
    pub files: Vec<String>,
}

/// Warning printed about the positional arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgWarning {
    /// First argument was `-h`
    HelpFlag,
    /// More than one positional argument
    ExtraArguments,
}

impl fmt::Display for ArgWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgWarning::HelpFlag => {
                write!(f, "Warning: to get usage, run script with no arguments.")
            }
            ArgWarning::ExtraArguments => write!(
                f,
                "Warning: multiple arguments given, only the first argument will be processed."
            ),
        }
    }
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Definition file to check; `None` means print usage
    pub path: Option<PathBuf>,
    /// Warnings about the arguments, in the order they are printed
    pub warnings: Vec<ArgWarning>,
    pub dump: bool,
    pub log_level: LevelFilter,
}

impl Config {
    /// Create configuration from the process command line.
    ///
    /// Rejected arguments come back as the clap error so the caller can
    /// pick the exit status.
    pub fn from_args_and_env() -> Result<Self, clap::Error> {
        Ok(Self::from_args(Args::try_parse()?))
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Self {
        let mut warnings = Vec::new();
        if args.files.first().map(String::as_str) == Some("-h") {
            warnings.push(ArgWarning::HelpFlag);
        }
        if args.files.len() > 1 {
            warnings.push(ArgWarning::ExtraArguments);
        }

        Config {
            path: args.files.into_iter().next().map(PathBuf::from),
            warnings,
            dump: args.dump,
            log_level: args.log_level,
        }
    }
}

/// Usage text shown when no definition file is given
pub fn usage(program: &str) -> String {
    format!(
        "{program} <singularity_definition_file>

This script parses a singularity file and returns the following exit codes:
  0 - success
  1 - invalid header
  2 - invalid section
  3 - invalid header and section
"
    )
}
