//! Class header detection and inheritance clause parsing

use regex::Regex;
use std::sync::LazyLock;

// `class Name [final] [: bases] {` with the opening brace on the same line.
// The clause may not start with a second `:`, so `class Outer::Inner {` never
// reads as `Outer` deriving from `:Inner`.
static RE_CLASS_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bclass\s+(\w+)(?:\s+final)?(?:\s*:([^:{][^{]*?))?\s*\{").unwrap()
});

// Optional access specifier and `virtual`, in either order, then the base name
static RE_BASE_SPECIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:public|private|protected)\s+(?:virtual\s+)?|virtual\s+(?:(?:public|private|protected)\s+)?)?(?:::)?(?:\w+::)*(\w+)",
    )
    .unwrap()
});

const SPECIFIER_KEYWORDS: &[&str] = &["public", "private", "protected", "virtual"];

/// A matched class header line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassHeader<'a> {
    /// Declared class name
    pub name: &'a str,

    /// Raw text between the colon and the opening brace (empty if none)
    pub inheritance: &'a str,

    /// Byte offset just past the opening brace
    pub body_start: usize,
}

/// Match a class declaration whose opening brace is on this line.
///
/// Headers spanning several lines (brace on the next line, wrapped base
/// lists) are not recognized. `enum class` declarations are skipped, and the
/// first real class header after them on the line is returned.
pub fn match_class_header(line: &str) -> Option<ClassHeader<'_>> {
    RE_CLASS_HEADER.captures_iter(line).find_map(|caps| {
        let whole = caps.get(0)?;
        if line[..whole.start()].trim_end().ends_with("enum") {
            return None;
        }

        Some(ClassHeader {
            name: caps.get(1)?.as_str(),
            inheritance: caps.get(2).map_or("", |m| m.as_str().trim()),
            body_start: whole.end(),
        })
    })
}

/// Split an inheritance clause into base class names, in clause order.
///
/// Access specifiers and `virtual` are discarded, namespace qualifiers and
/// template arguments are dropped. Segments without a usable name are
/// skipped.
pub fn parse_inheritance(clause: &str) -> Vec<String> {
    split_top_level(clause)
        .into_iter()
        .filter_map(|segment| {
            let caps = RE_BASE_SPECIFIER.captures(segment.trim())?;
            let name = caps.get(1)?.as_str();
            (!SPECIFIER_KEYWORDS.contains(&name)).then(|| name.to_string())
        })
        .collect()
}

// Split on commas that are not inside template angle brackets
fn split_top_level(clause: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, ch) in clause.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                segments.push(&clause[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    segments.push(&clause[start..]);
    segments
}
