//! I/O boundary traits for testability
//!
//! These traits abstract the blocking console input so the search loop
//! can be driven by scripted input in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Source of search tags, one character per call.
pub trait TagSource {
    /// Next tag, or `None` at end of input.
    fn next_tag(&mut self) -> io::Result<Option<char>>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Reads tags from any buffered reader (stdin in production).
///
/// Whitespace is skipped and each remaining character is one tag, so
/// `"B C\n"` and `"BC\n"` both yield `B` then `C`. Input is pulled a line
/// at a time and only when no tag is pending. Invalid UTF-8 is decoded
/// lossily, so a stray byte becomes a tag that no node carries.
#[derive(Debug)]
pub struct TagReader<R> {
    reader: R,
    pending: VecDeque<char>,
}

impl<R: BufRead> TagReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> TagSource for TagReader<R> {
    fn next_tag(&mut self) -> io::Result<Option<char>> {
        loop {
            while let Some(c) = self.pending.pop_front() {
                if !c.is_whitespace() {
                    return Ok(Some(c));
                }
            }

            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(String::from_utf8_lossy(&line).chars());
        }
    }
}

/// Stdin-backed tag source.
pub fn stdin_tags() -> TagReader<io::StdinLock<'static>> {
    TagReader::new(io::stdin().lock())
}
