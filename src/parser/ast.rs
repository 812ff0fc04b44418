//! Parse result types
//!
//! Pure data: the headers and sections pulled out of one definition file.
//! Both maps keep insertion order so diagnostics come out in file order.

use indexmap::IndexMap;
use serde::Serialize;

/// Header key (lower-cased) to its assembled value
pub type Headers = IndexMap<String, String>;

/// Section name (verbatim) to its raw body lines, terminators included
pub type Sections = IndexMap<String, Vec<String>>;

/// Everything extracted from a definition file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub headers: Headers,
    pub sections: Sections,
}

impl ParseResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a header value by its stored (lower-cased) key
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    /// Body lines of a section, if it was declared
    pub fn section(&self, name: &str) -> Option<&[String]> {
        self.sections.get(name).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.sections.is_empty()
    }
}
