//! Two-phase line scanner
//!
//! Lines are fed in file order. The scanner starts in the header phase and
//! switches permanently to the section phase at the first `%` line that is
//! not swallowed by an open header continuation.

use log::{debug, trace};

use super::ast::ParseResult;
use super::lexer::{self, LineKind};

/// Header key / value separator
const KEY_SEPARATOR: char = ':';

/// Scanner state threaded through a single forward pass
#[derive(Debug, Default)]
pub struct Scanner {
    sections_begun: bool,
    continuing: bool,
    current_header_key: Option<String>,
    current_section_name: Option<String>,
    result: ParseResult,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the first section marker has been seen
    #[cfg(test)]
    fn sections_begun(&self) -> bool {
        self.sections_begun
    }

    /// True while a header value is waiting for its next fragment
    #[cfg(test)]
    fn is_continuing(&self) -> bool {
        self.continuing
    }

    /// Process one physical line, terminator included
    pub fn scan_line(&mut self, line: &str) {
        let kind = lexer::classify_line(line);

        if !self.sections_begun {
            match kind {
                // Blank and comment lines leave continuation state untouched.
                LineKind::BlankOrComment => return,
                _ if self.continuing => {
                    self.continue_header(lexer::strip_comment(line));
                    return;
                }
                LineKind::Text => {
                    self.start_header(lexer::strip_comment(line));
                    return;
                }
                LineKind::SectionMarker => {
                    debug!("Sections begin at {:?}", lexer::strip_comment(line));
                    self.sections_begun = true;
                }
            }
        }

        self.scan_section_line(line, kind);
    }

    /// Consume the scanner and hand back the populated result
    pub fn finish(self) -> ParseResult {
        if self.continuing {
            debug!(
                "Input ended inside a continuation of header {:?}",
                self.current_header_key
            );
        }
        self.result
    }

    fn start_header(&mut self, trimmed: &str) {
        let (key, rest) = trimmed
            .split_once(KEY_SEPARATOR)
            .unwrap_or((trimmed, ""));
        let key = key.to_lowercase();

        self.continuing = lexer::ends_with_continuation(rest);
        let value = if self.continuing {
            lexer::strip_continuation(rest)
        } else {
            rest
        };

        trace!("header {:?} = {:?}", key, value);
        if self
            .result
            .headers
            .insert(key.clone(), value.to_string())
            .is_some()
        {
            debug!("Header {:?} redefined, keeping the last value", key);
        }

        self.current_header_key = self.continuing.then_some(key);
    }

    fn continue_header(&mut self, trimmed: &str) {
        let more = lexer::ends_with_continuation(trimmed);
        let fragment = if more {
            lexer::strip_continuation(trimmed)
        } else {
            trimmed
        };

        if let Some(value) = self
            .current_header_key
            .as_ref()
            .and_then(|key| self.result.headers.get_mut(key))
        {
            value.push_str(fragment);
        }

        if !more {
            self.continuing = false;
            self.current_header_key = None;
        }
    }

    fn scan_section_line(&mut self, line: &str, kind: LineKind) {
        if kind == LineKind::SectionMarker {
            let name = lexer::extract_section_name(lexer::strip_comment(line));
            trace!("section marker {:?}", name);
            // Redeclaring a section keeps the lines gathered so far.
            self.result.sections.entry(name.to_string()).or_default();
            self.current_section_name = Some(name.to_string());
            return;
        }

        match self
            .current_section_name
            .as_ref()
            .and_then(|name| self.result.sections.get_mut(name))
        {
            Some(body) => body.push(line.to_string()),
            None => debug!("Dropping body line outside any section: {:?}", line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(lines: &[&str]) -> ParseResult {
        let mut scanner = Scanner::new();
        for line in lines {
            scanner.scan_line(line);
        }
        scanner.finish()
    }

    #[test]
    fn test_header_value_keeps_leading_space() {
        let result = scan(&["Bootstrap: docker\n"]);
        assert_eq!(result.header("bootstrap"), Some(" docker"));
    }

    #[test]
    fn test_value_keeps_later_colons() {
        let result = scan(&["MirrorURL: http://example.org:8080/x\n"]);
        assert_eq!(
            result.header("mirrorurl"),
            Some(" http://example.org:8080/x")
        );
    }

    #[test]
    fn test_key_without_separator() {
        let result = scan(&["Bootstrap\n"]);
        assert_eq!(result.header("bootstrap"), Some(""));
    }

    #[test]
    fn test_empty_key() {
        let result = scan(&[": value\n"]);
        assert_eq!(result.header(""), Some(" value"));
    }

    #[test]
    fn test_continuation_state() {
        let mut scanner = Scanner::new();
        scanner.scan_line("A: foo\\\n");
        assert!(scanner.is_continuing());
        scanner.scan_line("bar\\\n");
        assert!(scanner.is_continuing());
        scanner.scan_line("baz\n");
        assert!(!scanner.is_continuing());
        assert_eq!(scanner.finish().header("a"), Some(" foobarbaz"));
    }

    #[test]
    fn test_marker_inside_continuation_is_header_text() {
        let mut scanner = Scanner::new();
        scanner.scan_line("From: ubuntu\\\n");
        scanner.scan_line("%post\n");
        assert!(!scanner.sections_begun());

        let result = scanner.finish();
        assert_eq!(result.header("from"), Some(" ubuntu%post"));
        assert!(result.sections.is_empty());
    }

    #[test]
    fn test_transition_line_is_not_a_body_line() {
        let mut scanner = Scanner::new();
        scanner.scan_line("Bootstrap: docker\n");
        scanner.scan_line("%post -c /bin/bash\n");
        assert!(scanner.sections_begun());
        scanner.scan_line("    apt-get update\n");

        let result = scanner.finish();
        assert_eq!(
            result.section("post"),
            Some(&["    apt-get update\n".to_string()][..])
        );
    }

    #[test]
    fn test_header_like_lines_after_sections_are_body() {
        let result = scan(&["%labels\n", "Author: me\n"]);
        assert!(result.headers.is_empty());
        assert_eq!(
            result.section("labels"),
            Some(&["Author: me\n".to_string()][..])
        );
    }

    #[test]
    fn test_commented_markers_in_sections_are_body() {
        let result = scan(&["%post\n", "#%files\n", "echo 100% # %done\n", "\n"]);
        assert_eq!(result.sections.len(), 1);
        assert_eq!(
            result.section("post"),
            Some(
                &[
                    "#%files\n".to_string(),
                    "echo 100% # %done\n".to_string(),
                    "\n".to_string()
                ][..]
            )
        );
    }
}
