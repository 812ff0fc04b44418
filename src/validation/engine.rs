//! Validation Engine
//!
//! Checks a parse result against the allow-lists. Validation never fails;
//! findings are collected and folded into a bitmask exit code.

use std::fmt;
use std::io::{self, Write};

use log::{debug, warn};

use super::allowlist::{is_valid_header, is_valid_section};
use crate::parser::ParseResult;

/// Exit code bit for an unknown header key
pub const INVALID_HEADER: i32 = 1;
/// Exit code bit for an unknown section name
pub const INVALID_SECTION: i32 = 2;

/// What kind of name failed the allow-list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finding {
    InvalidHeader,
    InvalidSection,
}

impl Finding {
    /// Exit code bit this finding sets
    pub fn code(self) -> i32 {
        match self {
            Finding::InvalidHeader => INVALID_HEADER,
            Finding::InvalidSection => INVALID_SECTION,
        }
    }
}

/// A single rejected header key or section name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub finding: Finding,
    pub name: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.finding {
            Finding::InvalidHeader => write!(f, "invalid header: {}", self.name),
            Finding::InvalidSection => write!(f, "invalid section name: {}", self.name),
        }
    }
}

/// Findings for a whole definition file, headers first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, finding: Finding, name: &str) {
        self.diagnostics.push(Diagnostic {
            finding,
            name: name.to_string(),
        });
    }

    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// 0 when valid, otherwise the OR of the bits of every finding
    pub fn exit_code(&self) -> i32 {
        self.diagnostics
            .iter()
            .fold(0, |code, d| code | d.finding.code())
    }

    /// Write one line per diagnostic
    pub fn report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for diagnostic in &self.diagnostics {
            writeln!(out, "{}", diagnostic)?;
        }
        Ok(())
    }
}

/// Check every header key and section name against the allow-lists
pub fn validate_definition(result: &ParseResult) -> ValidationResult {
    let mut validation = ValidationResult::new();

    for key in result.headers.keys() {
        if !is_valid_header(key) {
            validation.add(Finding::InvalidHeader, key);
        }
    }
    for name in result.sections.keys() {
        if !is_valid_section(name) {
            validation.add(Finding::InvalidSection, name);
        }
    }

    debug!(
        "Validated {} headers and {} sections: {} finding(s)",
        result.headers.len(),
        result.sections.len(),
        validation.diagnostics.len()
    );
    validation
}

/// Validate, print diagnostics to stderr and return the exit code
pub fn validate(result: &ParseResult) -> i32 {
    let validation = validate_definition(result);
    if let Err(e) = validation.report(&mut io::stderr().lock()) {
        warn!("Failed to write diagnostics: {}", e);
    }
    validation.exit_code()
}
