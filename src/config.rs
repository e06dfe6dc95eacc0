//! Reader tuning options.
//!
//! [`ReaderOptions`] carries the knobs a [`ReverseLineReader`](crate::ReverseLineReader)
//! is created with. With the `config` feature enabled the options can also be
//! loaded from a TOML document:
//!
//! ```toml
//! chunk_size = 4096
//! decode = "strict"
//! ```

use std::num::NonZeroUsize;

#[cfg(feature = "config")]
use crate::error::{BackreadError, Result};
#[cfg(feature = "config")]
use serde::Deserialize;
#[cfg(feature = "config")]
use std::path::Path;

/// Number of bytes read per backward step unless configured otherwise.
pub const DEFAULT_CHUNK_SIZE: usize = 50;

/// How accumulated line bytes are turned into a `String`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum DecodeMode {
    /// Invalid UTF-8 sequences are replaced with U+FFFD
    #[default]
    Lossy,
    /// Invalid UTF-8 fails the read with `BackreadError::InvalidUtf8`
    Strict,
}

/// Options for creating a reverse line reader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Deserialize))]
#[cfg_attr(feature = "config", serde(try_from = "RawOptions"))]
pub struct ReaderOptions {
    /// Bytes read per backward seek step
    pub chunk_size: NonZeroUsize,

    /// UTF-8 decoding policy for returned lines
    pub decode: DecodeMode,
}

impl ReaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chunk_size(mut self, chunk_size: NonZeroUsize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_decode(mut self, decode: DecodeMode) -> Self {
        self.decode = decode;
        self
    }
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            decode: DecodeMode::default(),
        }
    }
}

fn default_chunk_size() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_CHUNK_SIZE).unwrap_or(NonZeroUsize::MIN)
}

/// Shape of the TOML document before validation
#[cfg(feature = "config")]
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOptions {
    #[serde(default)]
    chunk_size: Option<usize>,
    #[serde(default)]
    decode: DecodeMode,
}

#[cfg(feature = "config")]
impl TryFrom<RawOptions> for ReaderOptions {
    type Error = String;

    fn try_from(raw: RawOptions) -> std::result::Result<Self, Self::Error> {
        let chunk_size = match raw.chunk_size {
            None => default_chunk_size(),
            Some(n) => NonZeroUsize::new(n).ok_or("chunk_size must be greater than zero")?,
        };
        Ok(Self {
            chunk_size,
            decode: raw.decode,
        })
    }
}

#[cfg(feature = "config")]
impl ReaderOptions {
    /// Parse options from a TOML string; missing keys keep their defaults
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| BackreadError::config(e.message().to_string()))
    }

    /// Read and parse a TOML options file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            BackreadError::file_error(
                format!("Failed to read config file: {}", path.display()),
                e,
            )
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ReaderOptions::default();
        assert_eq!(options.chunk_size.get(), DEFAULT_CHUNK_SIZE);
        assert_eq!(options.decode, DecodeMode::Lossy);
        assert_eq!(ReaderOptions::new(), options);
    }

    #[test]
    fn test_builder_methods() {
        let options = ReaderOptions::new()
            .with_chunk_size(NonZeroUsize::new(7).unwrap())
            .with_decode(DecodeMode::Strict);
        assert_eq!(options.chunk_size.get(), 7);
        assert_eq!(options.decode, DecodeMode::Strict);
    }

    #[cfg(feature = "config")]
    mod toml_loading {
        use super::super::*;
        use std::io::Write;
        use tempfile::NamedTempFile;

        #[test]
        fn test_full_document() {
            let options =
                ReaderOptions::from_toml_str("chunk_size = 4096\ndecode = \"strict\"\n").unwrap();
            assert_eq!(options.chunk_size.get(), 4096);
            assert_eq!(options.decode, DecodeMode::Strict);
        }

        #[test]
        fn test_missing_keys_use_defaults() {
            let options = ReaderOptions::from_toml_str("").unwrap();
            assert_eq!(options, ReaderOptions::default());
        }

        #[test]
        fn test_zero_chunk_size_rejected() {
            let err = ReaderOptions::from_toml_str("chunk_size = 0").unwrap_err();
            match err {
                BackreadError::ConfigError { message } => {
                    assert!(message.contains("greater than zero"));
                }
                other => panic!("Expected ConfigError, got {other:?}"),
            }
        }

        #[test]
        fn test_unknown_key_rejected() {
            assert!(ReaderOptions::from_toml_str("chunk = 3").is_err());
        }

        #[test]
        fn test_load_from_file() {
            let mut file = NamedTempFile::new().expect("Failed to create temp file");
            file.write_all(b"chunk_size = 128\n").unwrap();
            file.flush().unwrap();

            let options = ReaderOptions::load(file.path()).unwrap();
            assert_eq!(options.chunk_size.get(), 128);
            assert_eq!(options.decode, DecodeMode::Lossy);
        }

        #[test]
        fn test_load_missing_file() {
            let err = ReaderOptions::load("/this/config/does/not/exist.toml").unwrap_err();
            assert!(err.is_resource_error());
        }
    }
}
