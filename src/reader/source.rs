//! Random-access byte resources a reverse reader can walk over.

use std::fs::File;
use std::io::{self, Cursor, Read, Seek};

/// A seekable, readable byte resource with a known length
///
/// The reader only ever seeks to absolute offsets and reads exact lengths, so
/// anything that is `Read + Seek` and can report its size qualifies.
pub trait ByteSource: Read + Seek {
    /// Total length of the resource in bytes
    fn byte_len(&mut self) -> io::Result<u64>;
}

impl ByteSource for File {
    fn byte_len(&mut self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }
}

impl<T: AsRef<[u8]>> ByteSource for Cursor<T> {
    fn byte_len(&mut self) -> io::Result<u64> {
        Ok(self.get_ref().as_ref().len() as u64)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn byte_len(&mut self) -> io::Result<u64> {
        (**self).byte_len()
    }
}
