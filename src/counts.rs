//! Corpus token counting and vocab-file reading.
//!
//! Both operations drain a [`FilePatternReader`]. Corpus counting feeds
//! every yielded unit through [`encode`](crate::encode) and sums token
//! occurrences; vocab reading parses persisted `token,count` lines back
//! into a frequency map, skipping malformed lines with a logged warning.

use indicatif::{style::TemplateError, ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::{
    error::{CountError, ReadError},
    reader::FilePatternReader,
    tokenizer::encode,
    types::{TokenCount, TokenCounts},
};

/// Read a corpus and compute a mapping from token to occurrence count.
///
/// Every unit yielded by the reader (a trimmed line, or a whole file
/// when `split_on_newlines` is false) is tokenized with
/// [`encode`](crate::encode) and the per-token occurrences are summed
/// across all units. There is no per-unit error isolation: the first
/// reader failure aborts the count.
///
/// # Arguments
///
/// * `pattern` - A wildcard pattern matching one or more corpus files.
/// * `max_lines` - If set, maximum total lines to consume across all
///   matched files.
/// * `split_on_newlines` - If true, tokenize per trimmed line; otherwise
///   tokenize each file's contents as one unit.
/// * `show_progress` - Whether to display a progress spinner while
///   counting.
///
/// # Returns
///
/// Mapping from token to its total count over the corpus.
///
/// # Errors
///
/// Returns [`CountError::Read`] if the pattern is invalid or a matched
/// file cannot be read, or [`CountError::ProgressBarSetup`] if the
/// progress bar template fails to compile.
pub fn corpus_token_counts(
    pattern: &str,
    max_lines: Option<usize>,
    split_on_newlines: bool,
    show_progress: bool,
) -> Result<TokenCounts, CountError> {
    let reader = FilePatternReader::new(pattern, max_lines, split_on_newlines)?;

    let pb = if show_progress {
        match progress_bar("Counting corpus tokens") {
            Ok(pb) => pb,
            Err(te) => return Err(CountError::ProgressBarSetup(te)),
        }
    } else {
        // create dummy progress bar and force to not render
        let pb = ProgressBar::new_spinner();
        pb.set_draw_target(ProgressDrawTarget::hidden());
        pb
    };

    let mut counts = TokenCounts::new();
    for doc in reader {
        let doc = doc.map_err(CountError::Read)?;
        for token in encode(&doc) {
            *counts.entry(token.to_owned()).or_insert(0) += 1;
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(counts)
}

/// Read a vocab file and return a mapping from token to count.
///
/// Reads two-column CSV lines of tokens and their frequency, as produced
/// by [`encode`](crate::encode)-based counting or the equivalent. The
/// token field may itself contain commas, so each line is split on its
/// *last* comma. A line with no comma, or whose count field does not
/// parse as an integer, is malformed: it is skipped and reported through
/// [`log::warn!`] with its 0-based line index and raw content. A later
/// line with an already-seen token overwrites the earlier count.
///
/// # Arguments
///
/// * `pattern` - A wildcard pattern matching one or more vocab files.
/// * `max_lines` - If set, maximum total lines to consume across all
///   matched files.
///
/// # Returns
///
/// Mapping from token to the count recorded on its last well-formed line.
///
/// # Errors
///
/// Returns a [`ReadError`] if the pattern is invalid or a matched file
/// cannot be read. Malformed lines are never fatal.
pub fn vocab_token_counts(
    pattern: &str,
    max_lines: Option<usize>,
) -> Result<TokenCounts, ReadError> {
    let reader = FilePatternReader::new(pattern, max_lines, true)?;

    let mut counts = TokenCounts::new();
    for (index, line) in reader.enumerate() {
        let line = line?;
        let Some((token, count)) = line.rsplit_once(',') else {
            log::warn!("malformed vocab line #{index} {line:?}");
            continue;
        };
        match count.parse::<TokenCount>() {
            Ok(count) => {
                counts.insert(token.to_owned(), count);
            }
            Err(_) => {
                log::warn!("malformed vocab line #{index} {line:?}: bad count field {count:?}");
            }
        }
    }

    Ok(counts)
}

/// Creates a styled steady-tick spinner with elapsed time, a fixed-width
/// message label, and a processed-units counter.
///
/// # Errors
///
/// Returns a [`TemplateError`] if the spinner style template is invalid.
fn progress_bar(msg: impl Into<String>) -> Result<ProgressBar, TemplateError> {
    let pb = ProgressBar::new_spinner();

    let style = match ProgressStyle::default_spinner()
        .template("[{elapsed_precise}] {msg:<30!} {pos} units")
    {
        Ok(ps) => ps,
        Err(te) => return Err(te),
    };

    pb.set_style(style);
    pb.set_message(msg.into());
    pb.enable_steady_tick(std::time::Duration::from_secs(1));

    Ok(pb)
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use tempfile::TempDir;

    use super::*;

    fn write_file(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).expect("test file should be writable");
    }

    fn pattern(dir: &TempDir, glob: &str) -> String {
        dir.path().join(glob).to_string_lossy().into_owned()
    }

    fn count_of(counts: &TokenCounts, token: &str) -> TokenCount {
        counts.get(token).copied().unwrap_or(0)
    }

    #[test]
    fn test_corpus_counts_sum_across_files() {
        let dir = TempDir::new().expect("tempdir should be creatable");
        write_file(dir.path(), "a.txt", "one two\nthree four\n");
        write_file(dir.path(), "b.txt", "one five\n");

        let counts = corpus_token_counts(&pattern(&dir, "*.txt"), None, true, false)
            .expect("corpus should be countable");
        assert_eq!(count_of(&counts, "one"), 2);
        assert_eq!(count_of(&counts, "two"), 1);
        assert_eq!(count_of(&counts, "five"), 1);
        // interior lone spaces are suppressed by the tokenizer
        assert_eq!(count_of(&counts, " "), 0);
    }

    #[test]
    fn test_corpus_counts_respect_global_cap() {
        let dir = TempDir::new().expect("tempdir should be creatable");
        write_file(dir.path(), "a.txt", "one two\nthree four\n");
        write_file(dir.path(), "b.txt", "one five\nsix seven\n");

        // 3 lines: all of a.txt plus the first line of b.txt
        let counts = corpus_token_counts(&pattern(&dir, "*.txt"), Some(3), true, false)
            .expect("corpus should be countable");
        assert_eq!(count_of(&counts, "one"), 2);
        assert_eq!(count_of(&counts, "five"), 1);
        assert_eq!(count_of(&counts, "six"), 0);
        assert_eq!(count_of(&counts, "seven"), 0);
    }

    #[test]
    fn test_corpus_counts_whole_file_mode() {
        let dir = TempDir::new().expect("tempdir should be creatable");
        write_file(dir.path(), "a.txt", "one\ntwo one\n");

        let counts = corpus_token_counts(&pattern(&dir, "*.txt"), None, false, false)
            .expect("corpus should be countable");
        assert_eq!(count_of(&counts, "one"), 2);
        assert_eq!(count_of(&counts, "two"), 1);
        // line terminators survive as non-alphanumeric runs in this mode
        assert_eq!(count_of(&counts, "\n"), 2);
    }

    #[test]
    fn test_corpus_counts_bad_pattern_errors() {
        assert!(matches!(
            corpus_token_counts("[", None, true, false),
            Err(CountError::Read(ReadError::Pattern(_)))
        ));
    }

    #[test]
    fn test_vocab_counts_well_formed_lines() {
        let dir = TempDir::new().expect("tempdir should be creatable");
        write_file(dir.path(), "vocab.csv", "hello,3\nworld,7\n");

        let counts = vocab_token_counts(&pattern(&dir, "vocab.csv"), None)
            .expect("vocab should be readable");
        assert_eq!(counts.len(), 2);
        assert_eq!(count_of(&counts, "hello"), 3);
        assert_eq!(count_of(&counts, "world"), 7);
    }

    #[test]
    fn test_vocab_counts_skip_malformed_lines() {
        let dir = TempDir::new().expect("tempdir should be creatable");
        write_file(
            dir.path(),
            "vocab.csv",
            "hello,3\nno-comma-here\nworld,7\nbadcount,xx\n",
        );

        let counts = vocab_token_counts(&pattern(&dir, "vocab.csv"), None)
            .expect("vocab should be readable");
        assert_eq!(counts.len(), 2);
        assert_eq!(count_of(&counts, "hello"), 3);
        assert_eq!(count_of(&counts, "world"), 7);
        assert!(!counts.contains_key("no-comma-here"));
        assert!(!counts.contains_key("badcount"));
    }

    #[test]
    fn test_vocab_counts_split_on_last_comma() {
        let dir = TempDir::new().expect("tempdir should be creatable");
        write_file(dir.path(), "vocab.csv", ", ,11\na,b,5\n");

        let counts = vocab_token_counts(&pattern(&dir, "vocab.csv"), None)
            .expect("vocab should be readable");
        // tokens may contain commas; only the trailing field is the count
        assert_eq!(count_of(&counts, "a,b"), 5);
        assert_eq!(count_of(&counts, ", "), 11);
    }

    #[test]
    fn test_vocab_counts_duplicate_token_overwrites() {
        let dir = TempDir::new().expect("tempdir should be creatable");
        write_file(dir.path(), "vocab.csv", "hello,3\nhello,5\n");

        let counts = vocab_token_counts(&pattern(&dir, "vocab.csv"), None)
            .expect("vocab should be readable");
        assert_eq!(count_of(&counts, "hello"), 5);
    }

    #[test]
    fn test_vocab_counts_respect_max_lines() {
        let dir = TempDir::new().expect("tempdir should be creatable");
        write_file(dir.path(), "vocab.csv", "hello,3\nworld,7\nlate,1\n");

        let counts = vocab_token_counts(&pattern(&dir, "vocab.csv"), Some(2))
            .expect("vocab should be readable");
        assert_eq!(counts.len(), 2);
        assert!(!counts.contains_key("late"));
    }
}
