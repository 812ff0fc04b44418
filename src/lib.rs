//! Singularity definition file parser
//!
//! Reads a definition file (a header block of `key: value` pairs followed
//! by `%section` blocks) and checks every header key and section name
//! against the known allow-lists.
//!
//! This library provides:
//! - Line classification and the two-phase header/section scanner
//! - Allow-list validation with a bitmask exit code
//! - Command-line configuration

pub mod config;
pub mod error;
pub mod parser;
pub mod validation;

pub use config::Config;
pub use error::LoadError;
pub use parser::{ParseResult, load, parse_definition};
pub use validation::{Diagnostic, ValidationResult, validate, validate_definition};
