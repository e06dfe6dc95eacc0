//! LIFO container for batches of reverse-read lines.

use std::iter::Rev;
use std::slice;
use std::vec;

/// Lines from one `next_lines` call, stacked in the order they were read
///
/// The reader finds lines last-to-first, pushing each one, so the top of the
/// stack is the line that sits earliest in the file. Popping until empty (or
/// iterating) therefore walks the batch in normal reading order.
///
/// ```
/// use backread::ReverseLineReader;
/// use std::io::Cursor;
///
/// let mut reader = ReverseLineReader::from_source(Cursor::new("a\nb\nc")).unwrap();
/// let mut stack = reader.next_lines(2).unwrap();
///
/// assert_eq!(stack.pop().as_deref(), Some("b"));
/// assert_eq!(stack.pop().as_deref(), Some("c"));
/// assert!(stack.pop().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStack {
    /// Bottom first; the last element is the top
    lines: Vec<String>,
}

impl LineStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    /// Remove the top line, the earliest one in the file still on the stack
    pub fn pop(&mut self) -> Option<String> {
        self.lines.pop()
    }

    pub fn peek(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Top to bottom, i.e. forward file order
    pub fn iter(&self) -> Rev<slice::Iter<'_, String>> {
        self.lines.iter().rev()
    }

    /// Lines in the order the reader produced them (last line of the file first)
    pub fn as_read_order(&self) -> &[String] {
        &self.lines
    }

    /// Consume the stack into a vector in forward file order
    pub fn into_forward_vec(mut self) -> Vec<String> {
        self.lines.reverse();
        self.lines
    }

    /// Join in forward file order with `\n` between lines
    pub fn join_forward(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for (i, line) in self.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(line);
        }
        out
    }
}

impl IntoIterator for LineStack {
    type Item = String;
    type IntoIter = Rev<vec::IntoIter<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter().rev()
    }
}

impl<'a> IntoIterator for &'a LineStack {
    type Item = &'a String;
    type IntoIter = Rev<slice::Iter<'a, String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
