/*!

Compile time byte classification and ASCII case-fold tables.

Parsers, validators, and escaping routines frequently need to ask the same
questions of a byte: is it whitespace, a hex digit, punctuation, the start of
a UTF-8 sequence? This crate answers them with two 256 entry tables that are
computed at compile time and indexed directly by the byte:

- [`CTYPE_TABLE`]: the [`CtypeFlags`] of every byte
- [`CASEFOLD_TABLE`]: the opposite case of every ASCII letter, or
  [`NO_FOLD`] for everything else

## Quick Start

```rust
use bytetype::{classify_byte, casefold, CtypeFlags};

assert_eq!(
    classify_byte(b'A'),
    CtypeFlags::ASCII | CtypeFlags::UPPER | CtypeFlags::XALPHA
);
assert_eq!(classify_byte(0x80), CtypeFlags::UTF8CONT);
assert_eq!(casefold(b'A'), Some(b'a'));
assert_eq!(casefold(b'0'), None);
```

The [`ctype`] module wraps the tables in the familiar predicates:

```rust
use bytetype::ctype;

let data = b"  key = 0xfF";
let start = data.iter().position(|&b| !ctype::is_space(b)).unwrap();
assert_eq!(start, 2);
assert!(data[10..].iter().all(|&b| ctype::is_xdigit(b)));
assert!(ctype::eq_ignore_case(b"0XFF", &data[8..]));
```

## Classification Rules

Bytes below 128 are `ASCII`. Among them, bytes below 32 and DEL are
`CNTRL`; tab, LF, VT, FF, CR, and space are `SPACE`; and each byte is at
most one of `PUNCT`, `DIGIT`, `UPPER`, or `LOWER`. The hex letters `A-F` and
`a-f` are additionally `XALPHA`.

Bytes from 128 upward are never `ASCII`. They are `UTF8LEAD` when above
`0xC0` and below `0xFE` (excluding `0xE0`, `0xF0`, `0xF8`, and `0xFC`),
`UTF8CONT` when their top two bits are `10`, and otherwise carry no flag.
Multi-byte sequences are not validated.

## Rendering

[`TableListing`] writes the tables as an annotated listing for embedding in
other sources. With the `json` feature, the [`json`](crate::json) module
exports them with serde.

*/

pub mod ctype;
mod data;
mod errors;
mod flags;
#[cfg(feature = "json")]
pub mod json;
mod listing;
mod names;

pub use self::data::{
    casefold, classify, classify_byte, fold, CASEFOLD_TABLE, CTYPE_TABLE, NO_FOLD,
};
pub use self::errors::*;
pub use self::flags::{parse_flags, CtypeFlags};
pub use self::listing::{ListingOptions, TableListing};
pub use self::names::{ascii_name, CodeName};
