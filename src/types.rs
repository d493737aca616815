//! Type aliases shared by corpus counting and vocab reading.
//!
//! These type aliases provide semantic clarity throughout the codebase.

use std::collections::HashMap;

/// Frequency count for a single token.
///
/// Corpus counts are non-negative by construction; a vocab-file count
/// field that does not parse as this type is treated as malformed.
pub type TokenCount = u64;

/// Mapping from token string to its frequency.
///
/// Built fresh per counting run. Iteration order is not significant;
/// accumulation merges by summing counts per token.
pub type TokenCounts = HashMap<String, TokenCount>;
