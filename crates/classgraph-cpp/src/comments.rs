//! Comment removal with block-comment state carried across lines

const LINE_COMMENT: &str = "//";
const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";

/// Removes `//` and `/* */` comments from lines fed in file order.
///
/// A block comment left open at the end of a line keeps the stripper in
/// block state until a later line closes it.
#[derive(Debug, Default, Clone)]
pub struct CommentStripper {
    in_block: bool,
}

impl CommentStripper {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while inside an unclosed block comment
    pub fn in_block_comment(&self) -> bool {
        self.in_block
    }

    /// Return `line` with all comment text removed
    pub fn strip(&mut self, line: &str) -> String {
        let mut rest = line;

        if self.in_block {
            match rest.find(BLOCK_CLOSE) {
                Some(idx) => {
                    self.in_block = false;
                    rest = &rest[idx + BLOCK_CLOSE.len()..];
                }
                None => return String::new(),
            }
        }

        let mut out = String::with_capacity(rest.len());
        loop {
            let block = rest.find(BLOCK_OPEN);
            let single = rest.find(LINE_COMMENT);

            match (block, single) {
                // `//` before any `/*`: the rest of the line is comment
                (_, Some(s)) if block.map_or(true, |b| s < b) => {
                    out.push_str(&rest[..s]);
                    break;
                }
                (Some(start), _) => {
                    out.push_str(&rest[..start]);
                    let after = &rest[start + BLOCK_OPEN.len()..];
                    match after.find(BLOCK_CLOSE) {
                        Some(end) => rest = &after[end + BLOCK_CLOSE.len()..],
                        None => {
                            self.in_block = true;
                            break;
                        }
                    }
                }
                _ => {
                    out.push_str(rest);
                    break;
                }
            }
        }

        out
    }
}
