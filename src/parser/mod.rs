//! Definition File Parser
//!
//! Reads a definition file into memory and scans it line by line into
//! headers and sections. Malformed input never fails here; it just produces
//! odd-looking entries for the validator to flag.

pub mod ast;
pub mod lexer;
pub mod scanner;

use std::path::Path;

use log::debug;

use crate::error::LoadError;

pub use ast::{Headers, ParseResult, Sections};
pub use lexer::{LineKind, classify_line};
pub use scanner::Scanner;

/// Read a definition file fully into memory
pub fn load(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|error| {
        debug!("Failed to read {}: {:?}", path.display(), error);
        match error.kind() {
            std::io::ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::Read {
                path: path.to_path_buf(),
                source: error,
            },
        }
    })
}

/// Parse definition file text into headers and sections.
///
/// Line terminators are kept on section body lines.
pub fn parse_definition(content: &str) -> ParseResult {
    let mut scanner = Scanner::new();
    for line in content.split_inclusive('\n') {
        scanner.scan_line(line);
    }
    let result = scanner.finish();

    if result.is_empty() {
        debug!("No headers or sections found");
        return result;
    }
    debug!(
        "Found {} header{} and {} section{}",
        result.headers.len(),
        if result.headers.len() == 1 { "" } else { "s" },
        result.sections.len(),
        if result.sections.len() == 1 { "" } else { "s" }
    );
    result
}

/// Load and parse a definition file in one step
pub fn parse_file(path: &Path) -> Result<ParseResult, LoadError> {
    let content = load(path)?;
    Ok(parse_definition(&content))
}
