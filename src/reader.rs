//! Reverse line reading over random-access byte sources.
//!
//! [`ReverseLineReader`] walks a file from its end toward its start, reading at
//! most `chunk_size` bytes per step, and hands back one logical line at a time.
//! Only the bytes of the line being assembled are kept in memory.
//!
//! ## Cursor model
//!
//! The reader keeps a byte offset (the cursor) that separates lines already
//! returned (after it) from lines not yet read (before it). It starts at the
//! end of the file. After a line is returned the cursor sits *on* the line
//! feed that terminated the preceding line, so that delimiter is consumed by
//! the next call. At offset 0 the reader is exhausted and reports
//! [`BackreadError::EndOfFile`] until [`ReverseLineReader::reset`] is called.

pub mod lines;
pub(crate) mod scan;
pub mod source;
pub mod stack;
pub mod validation;

use crate::config::{DecodeMode, ReaderOptions};
use crate::error::{BackreadError, Result};
use log::{debug, trace};
use std::fmt;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use self::lines::ReverseLines;
use self::scan::{finish_line, scan_chunk};
use self::source::ByteSource;
use self::stack::LineStack;
use self::validation::validate_file_path;

/// Reads lines from the end of a byte source toward its start
///
/// # Examples
/// ```no_run
/// use backread::ReverseLineReader;
///
/// fn main() -> backread::Result<()> {
///     let mut reader = ReverseLineReader::open("app.log")?;
///     let newest = reader.next_line()?;
///     println!("last line: {newest}");
///     Ok(())
/// }
/// ```
pub struct ReverseLineReader<S: ByteSource = File> {
    /// `None` once closed
    source: Option<S>,

    /// Where the source came from, when opened by path
    path: Option<PathBuf>,

    /// Source length captured at open or the last reset
    len: u64,

    /// Boundary between returned lines (after) and unread lines (before)
    cursor: u64,

    options: ReaderOptions,

    /// Scratch buffer reused for every chunk read
    chunk: Vec<u8>,
}

impl ReverseLineReader<File> {
    /// Open `path` read-only and position the cursor at its end
    ///
    /// # Errors
    /// * `FileNotFound`, `PermissionDenied`, `NotAFile` when the path is unusable
    /// * `FileError` for other open or size query failures
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, ReaderOptions::default())
    }

    /// Open `path` with explicit options
    pub fn open_with(path: impl AsRef<Path>, options: ReaderOptions) -> Result<Self> {
        let path = path.as_ref();
        validate_file_path(path)?;

        let file = File::open(path).map_err(|e| BackreadError::from_open(path, e))?;
        let mut reader = Self::from_source_with(file, options)?;
        reader.path = Some(path.to_path_buf());

        debug!(
            "opened {} for reverse reading ({} bytes, chunk size {})",
            path.display(),
            reader.len,
            reader.options.chunk_size
        );
        Ok(reader)
    }
}

impl<S: ByteSource> ReverseLineReader<S> {
    /// Wrap an already open source with default options
    pub fn from_source(source: S) -> Result<Self> {
        Self::from_source_with(source, ReaderOptions::default())
    }

    /// Wrap an already open source; the cursor starts at its end
    pub fn from_source_with(mut source: S, options: ReaderOptions) -> Result<Self> {
        let len = source
            .byte_len()
            .map_err(|e| BackreadError::file_error("Failed to query source length", e))?;

        Ok(Self {
            source: Some(source),
            path: None,
            len,
            cursor: len,
            options,
            chunk: Vec::new(),
        })
    }

    /// Move the cursor back to the end of the source
    ///
    /// The length is queried again, so a file that grew since it was opened is
    /// read from its new end. Works from any position, including exhaustion.
    pub fn reset(&mut self) -> Result<()> {
        let source = self.source.as_mut().ok_or(BackreadError::Closed)?;
        let len = source.byte_len().map_err(|e| {
            BackreadError::file_error(
                format!("Failed to query length of {}", describe(&self.path)),
                e,
            )
        })?;

        self.len = len;
        self.cursor = len;
        debug!("reset {} to end ({} bytes)", describe(&self.path), len);
        Ok(())
    }

    pub fn chunk_size(&self) -> NonZeroUsize {
        self.options.chunk_size
    }

    /// Change how many bytes each backward step reads
    ///
    /// Only the number of seeks and reads changes; returned lines do not.
    pub fn set_chunk_size(&mut self, chunk_size: NonZeroUsize) {
        self.options.chunk_size = chunk_size;
    }

    pub fn set_decode_mode(&mut self, decode: DecodeMode) {
        self.options.decode = decode;
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Current cursor offset in bytes
    pub fn position(&self) -> u64 {
        self.cursor
    }

    /// Length of the source as of open or the last reset
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True once the cursor reached the start of the source
    pub fn is_exhausted(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_closed(&self) -> bool {
        self.source.is_none()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read the line that ends at the cursor, last line of the file first
    ///
    /// A file ending in `\n` yields an empty string first. Carriage returns are
    /// removed wherever they occur.
    ///
    /// # Errors
    /// * `EndOfFile` - the cursor is at the start; nothing earlier to read
    /// * `Closed` - the reader was closed
    /// * `InvalidUtf8` - only with [`DecodeMode::Strict`]; the line is still consumed
    /// * `FileError` - seeking or reading the source failed
    pub fn next_line(&mut self) -> Result<String> {
        let (bytes, line_start) = self.read_line_bytes()?;

        match String::from_utf8(bytes) {
            Ok(line) => Ok(line),
            Err(e) => match self.options.decode {
                DecodeMode::Lossy => Ok(String::from_utf8_lossy(e.as_bytes()).into_owned()),
                DecodeMode::Strict => Err(BackreadError::InvalidUtf8 {
                    offset: line_start,
                    source: e,
                }),
            },
        }
    }

    /// Same as [`next_line`](Self::next_line) without UTF-8 decoding
    pub fn next_line_bytes(&mut self) -> Result<Vec<u8>> {
        self.read_line_bytes().map(|(bytes, _)| bytes)
    }

    /// Read up to `count` lines
    ///
    /// Stops early without error at the start of the file. The returned stack
    /// has the earliest line of the file on top, so popping it yields the batch
    /// in reading order.
    ///
    /// # Errors
    /// `Closed`, resource errors and strict decoding errors fail the whole
    /// call. The cursor is moved back to where the batch started, so lines read
    /// before the failure are not lost; retrying reads the same batch again.
    pub fn next_lines(&mut self, count: usize) -> Result<LineStack> {
        self.ensure_open()?;

        let batch_start = self.cursor;
        let mut stack = LineStack::with_capacity(count.min(1024));
        for _ in 0..count {
            match self.next_line() {
                Ok(line) => stack.push(line),
                Err(e) if e.is_end_of_file() => break,
                Err(e) => {
                    self.cursor = batch_start;
                    return Err(e);
                }
            }
        }
        Ok(stack)
    }

    /// Read up to `count` lines and join them with `\n` in reading order
    ///
    /// Returns an empty string when the reader is already exhausted.
    pub fn next_lines_as_string(&mut self, count: usize) -> Result<String> {
        self.next_lines(count).map(|stack| stack.join_forward())
    }

    /// Iterate over the remaining lines, last line first
    pub fn lines(&mut self) -> ReverseLines<'_, S> {
        ReverseLines::new(self)
    }

    /// Release the underlying source
    ///
    /// Calling `close` again does nothing. Every other I/O operation fails
    /// with `Closed` from now on.
    pub fn close(&mut self) {
        if self.source.take().is_some() {
            debug!("closed {}", describe(&self.path));
        }
    }

    /// Unwrap the reader, returning the source unless it was closed
    pub fn into_inner(self) -> Option<S> {
        self.source
    }

    fn ensure_open(&self) -> Result<()> {
        if self.source.is_none() {
            return Err(BackreadError::Closed);
        }
        Ok(())
    }

    /// Collect the bytes of the line ending at the cursor
    ///
    /// The cursor is only moved once the whole line was read, so a failed
    /// read leaves the reader where it was.
    ///
    /// # Returns
    /// * Line bytes in file order, plus the offset where the line starts
    fn read_line_bytes(&mut self) -> Result<(Vec<u8>, u64)> {
        let source = self.source.as_mut().ok_or(BackreadError::Closed)?;
        if self.cursor == 0 {
            return Err(BackreadError::EndOfFile);
        }

        let step = self.options.chunk_size.get() as u64;
        let mut reversed = Vec::new();
        let mut end = self.cursor;

        let line_start = loop {
            let read_from = end.saturating_sub(step);
            let read_len = (end - read_from) as usize;

            self.chunk.resize(read_len, 0);
            source.seek(SeekFrom::Start(read_from)).map_err(|e| {
                BackreadError::file_error(
                    format!(
                        "Failed to seek to byte {} of {}",
                        read_from,
                        describe(&self.path)
                    ),
                    e,
                )
            })?;
            source.read_exact(&mut self.chunk[..]).map_err(|e| {
                let message = if e.kind() == std::io::ErrorKind::UnexpectedEof {
                    format!("File shrank while reading {}", describe(&self.path))
                } else {
                    format!(
                        "Failed to read {} bytes at byte {} of {}",
                        read_len,
                        read_from,
                        describe(&self.path)
                    )
                };
                BackreadError::file_error(message, e)
            })?;
            trace!("read {} bytes at offset {}", read_len, read_from);

            match scan_chunk(&self.chunk[..], &mut reversed) {
                Some(pos) => {
                    end = read_from + pos as u64;
                    break end + 1;
                }
                None if read_from == 0 => {
                    end = 0;
                    break 0;
                }
                None => end = read_from,
            }
        };

        self.cursor = end;
        let line = finish_line(reversed);
        trace!(
            "line of {} bytes at offset {}, cursor now {}",
            line.len(),
            line_start,
            self.cursor
        );
        Ok((line, line_start))
    }
}

impl<S: ByteSource> fmt::Debug for ReverseLineReader<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReverseLineReader")
            .field("path", &self.path)
            .field("len", &self.len)
            .field("cursor", &self.cursor)
            .field("options", &self.options)
            .field("closed", &self.is_closed())
            .finish()
    }
}

fn describe(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "source".to_string(),
    }
}

/// Return the last `count` lines of the file at `path` in reading order
///
/// Fewer lines come back when the file has fewer. A file ending in `\n`
/// counts the empty string after that final delimiter as its last line.
pub fn read_last_lines(path: impl AsRef<Path>, count: usize) -> Result<Vec<String>> {
    let mut reader = ReverseLineReader::open(path)?;
    let lines = reader.next_lines(count)?.into_forward_vec();
    reader.close();
    Ok(lines)
}
