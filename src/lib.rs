//! Reversible Unicode word tokenizer with corpus and vocab counting.
//!
//! The tokenizer splits text into maximal runs of alphanumeric
//! (Unicode Letter or Number category) and non-alphanumeric characters,
//! and can rebuild the original text from those runs. On top of it sit
//! a lazy glob-driven file reader and two counting passes: token
//! frequencies over raw corpus files, and `token,count` vocab files
//! read back into a frequency map.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(unused_must_use)]

mod classifier;
mod counts;
mod error;
mod reader;
mod tokenizer;
mod types;

pub use classifier::is_alphanumeric;
pub use counts::{corpus_token_counts, vocab_token_counts};
pub use error::{CountError, DecodeError, ReadError};
pub use reader::FilePatternReader;
pub use tokenizer::{decode, encode};
pub use types::{TokenCount, TokenCounts};
