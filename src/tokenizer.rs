//! Reversible split/join between text and word-like tokens.
//!
//! `encode` walks the input once and cuts a token wherever the
//! alphanumeric classification flips between adjacent characters.
//! An interior run consisting of a single space is suppressed, because
//! `decode` reinserts exactly one space between two adjacent
//! alphanumeric tokens. The two functions together round-trip ordinary
//! text; see [`decode`] for the known boundary cases.

use crate::{classifier::is_alphanumeric, error::DecodeError};

/// Encode a text string as a list of tokens.
///
/// Tokens are maximal runs of consecutive characters that are either all
/// alphanumeric or all non-alphanumeric. A run equal to a single literal
/// space is dropped unless it starts the text; the final run is always
/// emitted, even when it is a lone space.
///
/// # Arguments
///
/// * `text` - Input text to segment.
///
/// # Returns
///
/// Tokens in left-to-right order, borrowed from `text`. Empty input
/// yields an empty list.
///
/// # Examples
///
/// ```
/// use unitok::encode;
///
/// assert_eq!(encode("abc def"), vec!["abc", "def"]);
/// assert_eq!(encode("hello, world!"), vec!["hello", ", ", "world", "!"]);
/// ```
pub fn encode(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut tokens = Vec::new();
    // byte offset where the current run began
    let mut token_start = 0;
    let mut prev_alnum = None;

    for (pos, ch) in text.char_indices() {
        let alnum = is_alphanumeric(ch);
        if let Some(prev) = prev_alnum {
            if alnum != prev {
                let token = &text[token_start..pos];
                // a lone interior space is restored by decode, so drop it;
                // a leading one has no alphanumeric left neighbor and is kept
                if token != " " || token_start == 0 {
                    tokens.push(token);
                }
                token_start = pos;
            }
        }
        prev_alnum = Some(alnum);
    }

    // trailing run, emitted unconditionally
    tokens.push(&text[token_start..]);
    tokens
}

/// Decode a list of tokens back into a text string.
///
/// Each token is classified by its first character only. A single space
/// is inserted between two consecutive tokens that are both
/// alphanumeric-classified; everything else is concatenated verbatim.
///
/// Round-trip with [`encode`] holds for ordinary text. Inputs mixing
/// lone-space runs adjacent to non-alphanumeric runs sit on the policy
/// boundary (the final run is emitted unconditionally while interior
/// lone spaces are suppressed) and are not guaranteed to reproduce
/// byte-for-byte.
///
/// # Arguments
///
/// * `tokens` - Token sequence to join, in left-to-right order.
///
/// # Returns
///
/// The reconstructed text.
///
/// # Errors
///
/// Returns [`DecodeError::EmptyToken`] if any token has length zero:
/// there is no character to classify, so the case is rejected rather
/// than silently mis-joined.
///
/// # Examples
///
/// ```
/// use unitok::decode;
///
/// assert_eq!(decode(&["abc", "def"]).unwrap(), "abc def");
/// ```
pub fn decode<S: AsRef<str>>(tokens: &[S]) -> Result<String, DecodeError> {
    let mut ret = String::new();
    let mut prev_alnum = false;

    for (index, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        let first = token
            .chars()
            .next()
            .ok_or(DecodeError::EmptyToken { index })?;
        let alnum = is_alphanumeric(first);
        if index > 0 && prev_alnum && alnum {
            ret.push(' ');
        }
        ret.push_str(token);
        prev_alnum = alnum;
    }

    Ok(ret)
}
