//! Class body scanning: brace balancing and member/method classification

use classgraph_api::ClassRecord;
use regex::Regex;
use std::io::{self, BufRead};
use std::sync::LazyLock;

use crate::comments::CommentStripper;
use crate::extractor::SourceLines;

// `public:` / `private:` / `protected:` at the start of a line
static RE_ACCESS_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:public|private|protected)\s*:").unwrap());

// [access] [static|mutable|constexpr]* TYPE [*&] NAME [\[..\]] [= init] ;
static RE_MEMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:(?:public|private|protected)\s+)?(?:(?:static|mutable|constexpr)\s+)*((?:const\s+)?(?:::)?(?:\w+::)*\w+(?:<[^<>;()]*>)?)(?:\s*([*&]+)\s*|\s+)(\w+)(?:\s*\[[^\]]*\])*(?:\s*=[^;]*)?\s*;",
    )
    .unwrap()
});

// [virtual|static|inline]* TYPE [*&] NAME ( params ) [const] [= 0] [override]
static RE_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:(?:virtual|static|inline)\s+)*((?:const\s+)?(?:::)?(?:\w+::)*\w+(?:<[^<>;()]*>)?)(?:\s*([*&]+)\s*|\s+)(\w+)\s*\([^)]*\)(?:\s*const)?(?:\s*=\s*0)?(?:\s*override)?",
    )
    .unwrap()
});

// Words that start statements or qualify declarations, never a type
const NON_TYPE_KEYWORDS: &[&str] = &[
    "return", "delete", "throw", "goto", "using", "typedef", "friend", "case", "else", "new",
    "explicit", "virtual", "static", "inline", "typename", "template", "operator", "class",
    "struct", "enum", "union", "namespace",
];

/// Fills a [`ClassRecord`] from the lines of its body.
///
/// Tracks the brace depth opened by the class header (1 after the header's
/// opening brace) and stops once it returns to zero. Every non-blank line
/// inside the body is tested against the member pattern first and the method
/// pattern second; lines matching neither are ignored.
pub struct ClassBodyScanner<'r> {
    record: &'r mut ClassRecord,
    depth: isize,
}

impl<'r> ClassBodyScanner<'r> {
    pub fn new(record: &'r mut ClassRecord) -> Self {
        Self { record, depth: 1 }
    }

    /// Current brace depth relative to the enclosing scope
    pub fn depth(&self) -> isize {
        self.depth
    }

    pub fn is_open(&self) -> bool {
        self.depth > 0
    }

    /// Process the text that follows the opening brace on the header line.
    ///
    /// The text is classified statement by statement, so one-line classes
    /// such as `class A { int x; void f(); };` are fully recorded. When the
    /// body closes on this line, returns the byte offset in `tail` just past
    /// the closing brace; `None` means the body is still open.
    pub fn scan_header_tail(&mut self, tail: &str) -> Option<usize> {
        match closing_brace(tail, self.depth) {
            Some(end) => {
                self.classify_statements(&tail[..end]);
                self.depth = 0;
                Some(end + 1)
            }
            None => {
                self.classify_statements(tail);
                self.depth += brace_delta(tail);
                None
            }
        }
    }

    /// Process one decommented body line. Returns false once the body closes.
    pub fn feed_line(&mut self, line: &str) -> bool {
        if line.trim().is_empty() {
            return true;
        }

        match closing_brace(line, self.depth) {
            Some(end) => {
                self.depth = 0;
                self.classify_line(&line[..end]);
                false
            }
            None => {
                self.depth += brace_delta(line);
                self.classify_line(line);
                true
            }
        }
    }

    /// Consume lines until the body's braces balance.
    pub fn scan<R: BufRead>(
        &mut self,
        lines: &mut SourceLines<R>,
        stripper: &mut CommentStripper,
    ) -> io::Result<()> {
        while self.is_open() {
            let Some(raw) = lines.next_line()? else {
                break;
            };
            let line = stripper.strip(&raw);
            if !self.feed_line(&line) {
                break;
            }
        }
        Ok(())
    }

    fn classify_statements(&mut self, text: &str) {
        for statement in text.split_inclusive(';') {
            self.classify_line(statement);
        }
    }

    fn classify_line(&mut self, line: &str) {
        let line = strip_access_label(line);
        if line.trim().is_empty() {
            return;
        }

        if let Some((type_name, name)) = match_member(line) {
            self.record.add_member(&type_name, name);
        } else if let Some((return_type, name)) = match_method(line) {
            self.record.add_method(&return_type, name);
        }
    }
}

/// Drop a leading access label, leaving whatever follows it on the line
fn strip_access_label(line: &str) -> &str {
    match RE_ACCESS_LABEL.find(line) {
        Some(label) if !line[label.end()..].starts_with(':') => &line[label.end()..],
        _ => line,
    }
}

/// Match a member variable declaration, returning `(type, name)`
pub fn match_member(line: &str) -> Option<(String, &str)> {
    declaration(&RE_MEMBER, line)
}

/// Match a member function declaration, returning `(return type, name)`
pub fn match_method(line: &str) -> Option<(String, &str)> {
    declaration(&RE_METHOD, line)
}

fn declaration<'a>(pattern: &Regex, line: &'a str) -> Option<(String, &'a str)> {
    let caps = pattern.captures(line)?;
    let base = caps.get(1)?.as_str();
    let leading = base.trim_start_matches("const").trim_start();
    if NON_TYPE_KEYWORDS.contains(&leading) {
        return None;
    }

    let mut type_name = base.to_string();
    if let Some(sigils) = caps.get(2) {
        type_name.push_str(sigils.as_str());
    }
    Some((type_name, caps.get(3)?.as_str()))
}

/// Byte index of the `}` that brings `depth` to zero, if any
fn closing_brace(text: &str, mut depth: isize) -> Option<usize> {
    for (idx, ch) in text.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth <= 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

fn brace_delta(text: &str) -> isize {
    text.chars().fold(0, |delta, ch| match ch {
        '{' => delta + 1,
        '}' => delta - 1,
        _ => delta,
    })
}
