//! # backread - Reverse Line Reader
//!
//! Reads text files from the end toward the start, one line at a time, without
//! loading the whole file into memory. Useful for showing the newest entries of
//! a log or the last N lines of any text file.
//!
//! ## Features
//!
//! - **Bounded reads**: each backward step reads at most `chunk_size` bytes
//! - **Line ending normalization**: `\r\n` and stray `\r` are stripped, only `\n` ends a line
//! - **Distinct termination**: reaching the start of the file is reported as
//!   [`BackreadError::EndOfFile`], separate from I/O failures
//! - **Any random-access source**: files, in-memory cursors, or your own [`ByteSource`]
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`config`] - Reader options, optionally loaded from TOML
//! - [`reader`] - The reverse line reader, its byte source capability and batch types
//!
//! ## Example
//!
//! ```
//! use backread::ReverseLineReader;
//! use std::io::Cursor;
//!
//! let mut reader = ReverseLineReader::from_source(Cursor::new("Line 1\nLine 2\nLine 3\n")).unwrap();
//!
//! assert_eq!(reader.next_line().unwrap(), "");
//! assert_eq!(reader.next_line().unwrap(), "Line 3");
//! assert_eq!(reader.next_lines_as_string(5).unwrap(), "Line 1\nLine 2");
//! assert!(reader.next_line().unwrap_err().is_end_of_file());
//! ```

pub mod config;
pub mod error;
pub mod reader;

// Re-export commonly used types for convenience
pub use config::{DecodeMode, ReaderOptions, DEFAULT_CHUNK_SIZE};
pub use error::{BackreadError, Result};
pub use reader::lines::ReverseLines;
pub use reader::source::ByteSource;
pub use reader::stack::LineStack;
pub use reader::{read_last_lines, ReverseLineReader};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
