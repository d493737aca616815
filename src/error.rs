//! Error types for tokenizer decoding and corpus file reading.

use std::{error, fmt, io};

use indicatif::style::TemplateError;

/// Errors that can occur while resolving a file pattern or reading
/// the matched files.
#[derive(Debug)]
pub enum ReadError {
    /// The glob pattern failed to parse.
    Pattern(glob::PatternError),
    /// A matched path could not be resolved during the glob walk.
    Glob(glob::GlobError),
    /// A matched file could not be opened or read.
    Io(io::Error),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(e) => write!(f, "invalid file pattern: {e}"),
            Self::Glob(e) => write!(f, "glob walk failed: {e}"),
            Self::Io(e) => write!(f, "file read failed: {e}"),
        }
    }
}

impl error::Error for ReadError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Pattern(e) => Some(e),
            Self::Glob(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<glob::PatternError> for ReadError {
    fn from(e: glob::PatternError) -> Self {
        Self::Pattern(e)
    }
}

impl From<glob::GlobError> for ReadError {
    fn from(e: glob::GlobError) -> Self {
        Self::Glob(e)
    }
}

impl From<io::Error> for ReadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Errors that can occur during token decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A zero-length token has no first character to classify.
    EmptyToken {
        /// Position of the offending token in the input sequence.
        index: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyToken { index } => write!(f, "empty token at position {index}"),
        }
    }
}

impl error::Error for DecodeError {}

/// Errors that can occur during corpus token counting.
#[derive(Debug)]
pub enum CountError {
    /// Reading the corpus failed.
    Read(ReadError),
    /// Progress bar template string was invalid.
    ProgressBarSetup(TemplateError),
}

impl fmt::Display for CountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(e) => write!(f, "corpus read failed: {e}"),
            Self::ProgressBarSetup(e) => write!(f, "template parsing failed: {e}"),
        }
    }
}

impl error::Error for CountError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Read(e) => Some(e),
            Self::ProgressBarSetup(e) => Some(e),
        }
    }
}

impl From<ReadError> for CountError {
    fn from(e: ReadError) -> Self {
        Self::Read(e)
    }
}
