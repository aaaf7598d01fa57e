//! Byte sources that supply a message to the digest engine.
//!
//! A failed fetch is always reported as an error. It never comes back as an empty buffer, so
//! callers can tell a broken source apart from a legitimately empty message.

use std::{
    error, fmt,
    fs::{self, File},
    io::{self, Read},
    path::PathBuf,
};

use log::debug;

/// Inputs of this size or larger are refused
pub const MAX_INPUT_LEN: u64 = 4 * 1024 * 1024 * 1024; // 4 GiB

/// Something that can hand over a complete message
pub trait ByteSource {
    /// Label used when reporting the digest or an error
    fn name(&self) -> &str;

    fn fetch(&mut self) -> Result<Vec<u8>, SourceError>;
}

#[derive(Debug)]
pub enum SourceError {
    Io {
        source_name: String,
        error: io::Error,
    },
    TooLarge {
        source_name: String,
        len: u64,
        max: u64,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Io { source_name, error } => write!(f, "{source_name}: {error}"),
            SourceError::TooLarge {
                source_name,
                len,
                max,
            } => write!(
                f,
                "{source_name}: input is too large ({len} bytes, max allowed is < {max})"
            ),
        }
    }
}

impl error::Error for SourceError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SourceError::Io { error, .. } => Some(error),
            SourceError::TooLarge { .. } => None,
        }
    }
}

/// Drain `reader` into memory, refusing to hold `max_len` bytes or more.
///
/// The read is capped at `max_len`, so a stream that never ends costs at most `max_len` bytes
/// before it is rejected.
fn read_limited(reader: impl Read, name: &str, max_len: u64) -> Result<Vec<u8>, SourceError> {
    let mut buf = Vec::new();
    let read = reader
        .take(max_len)
        .read_to_end(&mut buf)
        .map_err(|error| SourceError::Io {
            source_name: name.to_owned(),
            error,
        })? as u64;

    if read >= max_len {
        return Err(SourceError::TooLarge {
            source_name: name.to_owned(),
            len: read,
            max: max_len,
        });
    }

    debug!("read {read} bytes from {name}");
    Ok(buf)
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// Reads a whole file from disk.
///
/// Regular files are sized up front; pipes, devices and `/proc` entries report a length of 0,
/// so the read itself is capped as well.
pub struct FileSource {
    path: PathBuf,
    name: String,
    max_len: u64,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_limit(path, MAX_INPUT_LEN)
    }

    /// Refuse files of `max_len` bytes or more
    pub fn with_limit(path: impl Into<PathBuf>, max_len: u64) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self {
            path,
            name,
            max_len,
        }
    }

    fn io_error(&self, error: io::Error) -> SourceError {
        SourceError::Io {
            source_name: self.name.clone(),
            error,
        }
    }
}

impl ByteSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&mut self) -> Result<Vec<u8>, SourceError> {
        let reported_len = fs::metadata(&self.path).map_err(|e| self.io_error(e))?.len();
        if reported_len >= self.max_len {
            return Err(SourceError::TooLarge {
                source_name: self.name.clone(),
                len: reported_len,
                max: self.max_len,
            });
        }

        let file = File::open(&self.path).map_err(|e| self.io_error(e))?;
        read_limited(file, &self.name, self.max_len)
    }
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// Drains any reader to its end
pub struct ReaderSource<R> {
    reader: R,
    name: String,
    max_len: u64,
}

/// Standard input, labelled `-`
pub type StdinSource = ReaderSource<io::Stdin>;

impl StdinSource {
    pub fn stdin() -> Self {
        ReaderSource::new("-", io::stdin())
    }
}

impl<R: Read> ReaderSource<R> {
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self::with_limit(name, reader, MAX_INPUT_LEN)
    }

    /// Refuse streams that yield `max_len` bytes or more
    pub fn with_limit(name: impl Into<String>, reader: R, max_len: u64) -> Self {
        Self {
            reader,
            name: name.into(),
            max_len,
        }
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&mut self) -> Result<Vec<u8>, SourceError> {
        read_limited(&mut self.reader, &self.name, self.max_len)
    }
}
