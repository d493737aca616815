//! Lazy streaming of glob-matched text files.
//!
//! [`FilePatternReader`] resolves a wildcard pattern to a sorted list of
//! paths up front, then drains the files one at a time as the consumer
//! pulls items. Only one file handle is ever open; it is dropped when the
//! file is exhausted, when an error surfaces, or when the iterator itself
//! is dropped early.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::PathBuf,
};

use crate::error::ReadError;

/// Streams lines or whole-file contents from files matching a pattern.
///
/// Matched paths are processed in sorted (lexicographic) order. In line
/// mode each item is one line with surrounding whitespace stripped, and
/// lines are counted globally across all files: once `max_lines` lines
/// have been produced, iteration stops, even mid-file. In whole-file mode
/// each file yields at most one item; with `max_lines` set, the file that
/// exhausts the budget is truncated to its first remaining lines (line
/// terminators preserved) and becomes the final item.
///
/// The sequence is lazy and single-pass: it cannot be restarted without
/// constructing a new reader.
pub struct FilePatternReader {
    paths: std::vec::IntoIter<PathBuf>,
    current: Option<BufReader<File>>,
    max_lines: Option<usize>,
    split_on_newlines: bool,
    lines_read: usize,
    done: bool,
}

impl FilePatternReader {
    /// Creates a reader over all files matching `pattern`.
    ///
    /// # Arguments
    ///
    /// * `pattern` - A wildcard pattern matching zero or more files.
    ///   No matches yields an empty sequence, not an error.
    /// * `max_lines` - If set, stop after this many lines have been
    ///   consumed across all matched files. `None` means unbounded.
    /// * `split_on_newlines` - If true, yield one trimmed line per item;
    ///   otherwise yield (up to) one item per file with its contents.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::Pattern`] if `pattern` is not valid glob
    /// syntax, or [`ReadError::Glob`] if a matched path cannot be
    /// resolved while walking the pattern.
    pub fn new(
        pattern: &str,
        max_lines: Option<usize>,
        split_on_newlines: bool,
    ) -> Result<Self, ReadError> {
        let mut paths = Vec::new();
        for entry in glob::glob(pattern)? {
            paths.push(entry?);
        }
        paths.sort();

        Ok(Self {
            paths: paths.into_iter(),
            current: None,
            max_lines,
            split_on_newlines,
            lines_read: 0,
            done: false,
        })
    }

    /// True once the global line budget is spent.
    fn budget_spent(&self) -> bool {
        self.max_lines.is_some_and(|cap| self.lines_read >= cap)
    }

    /// Produces the next trimmed line, opening files as needed.
    fn next_line(&mut self) -> Option<Result<String, ReadError>> {
        loop {
            if self.budget_spent() {
                self.done = true;
                return None;
            }

            if let Some(reader) = self.current.as_mut() {
                let mut line = String::new();
                match reader.read_line(&mut line) {
                    // file drained; drop the handle and move on
                    Ok(0) => self.current = None,
                    Ok(_) => {
                        self.lines_read += 1;
                        return Some(Ok(line.trim().to_string()));
                    }
                    Err(e) => return Some(Err(ReadError::Io(e))),
                }
            } else {
                let path = self.paths.next()?;
                match File::open(&path) {
                    Ok(file) => self.current = Some(BufReader::new(file)),
                    Err(e) => return Some(Err(ReadError::Io(e))),
                }
            }
        }
    }

    /// Produces the next file's contents, truncated to the remaining
    /// line budget when one is set.
    fn next_document(&mut self) -> Option<Result<String, ReadError>> {
        if self.budget_spent() {
            self.done = true;
            return None;
        }

        let path = self.paths.next()?;
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => return Some(Err(ReadError::Io(e))),
        };
        let mut reader = BufReader::new(file);

        let cap = match self.max_lines {
            Some(cap) => cap,
            None => {
                // no budget to track: hand over the raw contents
                let mut doc = String::new();
                return match reader.read_to_string(&mut doc) {
                    Ok(_) => Some(Ok(doc)),
                    Err(e) => Some(Err(ReadError::Io(e))),
                };
            }
        };

        let mut doc = String::new();
        loop {
            match reader.read_line(&mut doc) {
                Ok(0) => break,
                Ok(_) => {
                    self.lines_read += 1;
                    if self.lines_read >= cap {
                        // partial file is the final item
                        self.done = true;
                        break;
                    }
                }
                Err(e) => return Some(Err(ReadError::Io(e))),
            }
        }
        Some(Ok(doc))
    }
}

impl Iterator for FilePatternReader {
    type Item = Result<String, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = if self.split_on_newlines {
            self.next_line()
        } else {
            self.next_document()
        };
        // fail fast: an I/O error ends the sequence
        if matches!(item, Some(Err(_))) {
            self.current = None;
            self.done = true;
        }
        item
    }
}
