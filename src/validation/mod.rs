//! Validation Engine
//!
//! Allow-list checks over a parse result, kept apart from parsing and the CLI.

pub mod allowlist;
pub mod engine;

pub use engine::{
    Diagnostic, Finding, INVALID_HEADER, INVALID_SECTION, ValidationResult, validate,
    validate_definition,
};
