//! Line Classifier
//!
//! Small predicates and extractors applied to one physical line at a time.
//! No state lives here; the scanner decides what a line means.

/// Comment delimiter. Everything from the first occurrence onward is dropped.
const COMMENT: char = '#';

/// Marker that opens a section.
pub const SECTION_MARKER: char = '%';

/// Trailing character that continues a header value onto the next line.
const CONTINUATION: char = '\\';

/// Broad classification of a physical line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace only, or a line whose first non-blank character is `#`
    BlankOrComment,
    /// Starts with `%` once trimmed and comment-stripped
    SectionMarker,
    /// Anything else
    Text,
}

/// True if the line is empty after trimming or begins with `#`
pub fn is_blank_or_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with(COMMENT)
}

/// Drop everything from the first `#` and trim the remainder.
///
/// The split is naive: a `#` inside a quoted value still starts a comment.
pub fn strip_comment(line: &str) -> &str {
    match line.split_once(COMMENT) {
        Some((before, _)) => before.trim(),
        None => line.trim(),
    }
}

/// True if the trimmed line ends with a backslash
pub fn ends_with_continuation(trimmed_line: &str) -> bool {
    trimmed_line.ends_with(CONTINUATION)
}

/// Remove one trailing continuation backslash, if present
pub fn strip_continuation(trimmed_line: &str) -> &str {
    trimmed_line
        .strip_suffix(CONTINUATION)
        .unwrap_or(trimmed_line)
}

/// Name of the section a `%` line declares.
///
/// Takes the text after the first `%` up to the first space. Tabs and other
/// whitespace are not separators, so `%post\t-c` yields `post\t-c`.
pub fn extract_section_name(trimmed_line: &str) -> &str {
    let after_marker = match trimmed_line.find(SECTION_MARKER) {
        Some(idx) => &trimmed_line[idx + SECTION_MARKER.len_utf8()..],
        None => trimmed_line,
    };
    after_marker.split(' ').next().unwrap_or_default()
}

/// Classify a raw physical line
pub fn classify_line(line: &str) -> LineKind {
    if is_blank_or_comment(line) {
        LineKind::BlankOrComment
    } else if strip_comment(line).starts_with(SECTION_MARKER) {
        LineKind::SectionMarker
    } else {
        LineKind::Text
    }
}
