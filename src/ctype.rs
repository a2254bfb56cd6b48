//! Byte predicates and case operations backed by the lookup tables.
//!
//! Each predicate is a single table load and mask test. Composite classes
//! such as [`is_alnum`] match when the byte carries any of the underlying
//! flags.
//!
//! ```
//! use bytetype::ctype;
//!
//! assert!(ctype::is_xdigit(b'e'));
//! assert!(!ctype::is_xdigit(b'g'));
//! assert!(ctype::is_utf8_lead("å".as_bytes()[0]));
//! assert_eq!(ctype::to_upper(b'q'), b'Q');
//! ```

use crate::{data::CASEFOLD_TABLE, CtypeFlags, CTYPE_TABLE};
use std::cmp::Ordering;

/// Returns true if the byte carries any of the flags in `mask`
#[inline]
pub fn is_ctype(b: u8, mask: CtypeFlags) -> bool {
    CTYPE_TABLE[usize::from(b)].intersects(mask)
}

/// 7-bit ASCII byte
#[inline]
pub fn is_ascii(b: u8) -> bool {
    is_ctype(b, CtypeFlags::ASCII)
}

/// Control character, including DEL
#[inline]
pub fn is_cntrl(b: u8) -> bool {
    is_ctype(b, CtypeFlags::CNTRL)
}

/// Tab, line feed, vertical tab, form feed, carriage return, and space
#[inline]
pub fn is_space(b: u8) -> bool {
    is_ctype(b, CtypeFlags::SPACE)
}

/// ASCII punctuation mark
#[inline]
pub fn is_punct(b: u8) -> bool {
    is_ctype(b, CtypeFlags::PUNCT)
}

/// Decimal digit
#[inline]
pub fn is_digit(b: u8) -> bool {
    is_ctype(b, CtypeFlags::DIGIT)
}

/// Uppercase ASCII letter
#[inline]
pub fn is_upper(b: u8) -> bool {
    is_ctype(b, CtypeFlags::UPPER)
}

/// Lowercase ASCII letter
#[inline]
pub fn is_lower(b: u8) -> bool {
    is_ctype(b, CtypeFlags::LOWER)
}

/// ASCII letter of either case
#[inline]
pub fn is_alpha(b: u8) -> bool {
    is_ctype(b, CtypeFlags::ALPHA)
}

/// ASCII letter or decimal digit
#[inline]
pub fn is_alnum(b: u8) -> bool {
    is_ctype(b, CtypeFlags::ALNUM)
}

/// Hexadecimal digit
#[inline]
pub fn is_xdigit(b: u8) -> bool {
    is_ctype(b, CtypeFlags::XDIGIT)
}

/// Visible ASCII character: punctuation, letter, or digit
#[inline]
pub fn is_graph(b: u8) -> bool {
    is_ctype(b, CtypeFlags::GRAPH)
}

/// Visible characters plus all whitespace. Note that this includes the
/// whitespace control characters such as tab.
#[inline]
pub fn is_print(b: u8) -> bool {
    is_ctype(b, CtypeFlags::PRINT)
}

/// Byte that starts a multi-byte UTF-8 sequence
#[inline]
pub fn is_utf8_lead(b: u8) -> bool {
    is_ctype(b, CtypeFlags::UTF8LEAD)
}

/// Continuation byte of a multi-byte UTF-8 sequence
#[inline]
pub fn is_utf8_cont(b: u8) -> bool {
    is_ctype(b, CtypeFlags::UTF8CONT)
}

/// Lead or continuation byte of a multi-byte UTF-8 sequence
#[inline]
pub fn is_utf8_mbc(b: u8) -> bool {
    is_ctype(b, CtypeFlags::UTF8MBC)
}

/// Byte that may appear somewhere in UTF-8 text
#[inline]
pub fn is_utf8(b: u8) -> bool {
    is_ctype(b, CtypeFlags::UTF8)
}

/// Converts an uppercase ASCII letter to lowercase. Every other byte is
/// returned unchanged.
#[inline]
pub fn to_lower(b: u8) -> u8 {
    if is_upper(b) {
        CASEFOLD_TABLE[usize::from(b)]
    } else {
        b
    }
}

/// Converts a lowercase ASCII letter to uppercase. Every other byte is
/// returned unchanged.
#[inline]
pub fn to_upper(b: u8) -> u8 {
    if is_lower(b) {
        CASEFOLD_TABLE[usize::from(b)]
    } else {
        b
    }
}

/// Compares two bytes ignoring ASCII case
///
/// ```
/// use bytetype::ctype::casecmp;
/// use std::cmp::Ordering;
/// assert_eq!(casecmp(b'a', b'A'), Ordering::Equal);
/// assert_eq!(casecmp(b'a', b'B'), Ordering::Less);
/// // '_' sits between the cases, so the comparison happens on lowercase
/// assert_eq!(casecmp(b'_', b'A'), Ordering::Less);
/// ```
#[inline]
pub fn casecmp(a: u8, b: u8) -> Ordering {
    to_lower(a).cmp(&to_lower(b))
}

/// Lexicographically compares two byte strings ignoring ASCII case. A string
/// that is a prefix of the other sorts first.
pub fn casecmp_bytes(a: &[u8], b: &[u8]) -> Ordering {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| casecmp(*x, *y))
        .find(|ord| ord.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

/// Returns true if both byte strings are equal ignoring ASCII case
pub fn eq_ignore_case(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| to_lower(*x) == to_lower(*y))
}
