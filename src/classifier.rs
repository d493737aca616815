//! Unicode character classification used for token boundary detection.
//!
//! A code point counts as "alphanumeric" when its Unicode general category
//! is in the Letter family (Lu, Ll, Lt, Lm, Lo) or the Number family
//! (Nd, Nl, No). The check consults the standard library's bundled Unicode
//! tables directly rather than materializing a membership set over the
//! full scalar-value range.

/// Returns `true` iff `ch` belongs to a Letter or Number general category.
///
/// Total over all of `char`; there is no error path.
#[inline]
pub fn is_alphanumeric(ch: char) -> bool {
    ch.is_alphabetic() || ch.is_numeric()
}
