//! Iterator adaptor yielding a reader's remaining lines, last line first.

use crate::error::Result;
use crate::reader::source::ByteSource;
use crate::reader::ReverseLineReader;
use std::iter::FusedIterator;

/// Iterator over the remaining lines of a [`ReverseLineReader`], last line first
///
/// Created by [`ReverseLineReader::lines`]. Reaching the start of the file ends
/// the iteration; any other error is yielded once and then iteration stops.
#[derive(Debug)]
pub struct ReverseLines<'a, S: ByteSource> {
    reader: &'a mut ReverseLineReader<S>,
    done: bool,
}

impl<'a, S: ByteSource> ReverseLines<'a, S> {
    pub(crate) fn new(reader: &'a mut ReverseLineReader<S>) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<S: ByteSource> Iterator for ReverseLines<'_, S> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.reader.next_line() {
            Ok(line) => Some(Ok(line)),
            Err(e) if e.is_end_of_file() => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<S: ByteSource> FusedIterator for ReverseLines<'_, S> {}
