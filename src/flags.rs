use crate::FlagsParseError;
use bitflags::bitflags;
use std::{fmt, str::FromStr};

bitflags! {
    /// The character classes a byte belongs to.
    ///
    /// Every entry of the classification table is a union of these bits. The
    /// two UTF-8 bits never appear alongside `ASCII` or any of the ASCII
    /// range classes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct CtypeFlags: u16 {
        /// Byte is in the 7-bit ASCII range
        const ASCII = 0x0001;

        /// Control character, including DEL
        const CNTRL = 0x0002;

        /// Whitespace: tab, LF, VT, FF, CR and space
        const SPACE = 0x0004;

        /// Punctuation mark
        const PUNCT = 0x0008;

        /// Decimal digit
        const DIGIT = 0x0010;

        /// Uppercase letter
        const UPPER = 0x0020;

        /// Lowercase letter
        const LOWER = 0x0040;

        /// Letter that is also a hexadecimal digit
        const XALPHA = 0x0080;

        /// Byte that starts a multi-byte UTF-8 sequence
        const UTF8LEAD = 0x0100;

        /// Byte that continues a multi-byte UTF-8 sequence
        const UTF8CONT = 0x0200;
    }
}

impl CtypeFlags {
    /// Letters of either case
    pub const ALPHA: CtypeFlags = CtypeFlags::UPPER.union(CtypeFlags::LOWER);

    /// Letters and decimal digits
    pub const ALNUM: CtypeFlags = CtypeFlags::ALPHA.union(CtypeFlags::DIGIT);

    /// Hexadecimal digits
    pub const XDIGIT: CtypeFlags = CtypeFlags::DIGIT.union(CtypeFlags::XALPHA);

    /// Visible characters
    pub const GRAPH: CtypeFlags = CtypeFlags::PUNCT.union(CtypeFlags::ALNUM);

    /// Visible characters and whitespace
    pub const PRINT: CtypeFlags = CtypeFlags::GRAPH.union(CtypeFlags::SPACE);

    /// Any byte that is part of a multi-byte UTF-8 sequence
    pub const UTF8MBC: CtypeFlags = CtypeFlags::UTF8LEAD.union(CtypeFlags::UTF8CONT);

    /// Any byte that may appear in UTF-8 text
    pub const UTF8: CtypeFlags = CtypeFlags::ASCII.union(CtypeFlags::UTF8MBC);
}

const COMPOSITES: [(&str, CtypeFlags); 7] = [
    ("ALPHA", CtypeFlags::ALPHA),
    ("ALNUM", CtypeFlags::ALNUM),
    ("XDIGIT", CtypeFlags::XDIGIT),
    ("GRAPH", CtypeFlags::GRAPH),
    ("PRINT", CtypeFlags::PRINT),
    ("UTF8MBC", CtypeFlags::UTF8MBC),
    ("UTF8", CtypeFlags::UTF8),
];

/// Writes the flag names joined by ` | ` in bit order, or `0` when no flag
/// is set.
///
/// ```
/// use bytetype::CtypeFlags;
/// let flags = CtypeFlags::ASCII | CtypeFlags::UPPER | CtypeFlags::XALPHA;
/// assert_eq!(flags.to_string(), "ASCII | UPPER | XALPHA");
/// assert_eq!(CtypeFlags::empty().to_string(), "0");
/// ```
impl fmt::Display for CtypeFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("0");
        }

        for (i, (name, _)) in self.iter_names().enumerate() {
            if i != 0 {
                f.write_str(" | ")?;
            }
            f.write_str(name)?;
        }

        Ok(())
    }
}

/// Same as [`parse_flags`]
///
/// ```
/// use bytetype::CtypeFlags;
/// let flags: CtypeFlags = "ASCII | UPPER".parse().unwrap();
/// assert_eq!(flags, CtypeFlags::ASCII | CtypeFlags::UPPER);
/// ```
impl FromStr for CtypeFlags {
    type Err = FlagsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_flags(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CtypeFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Parses a flag expression such as `ASCII | UPPER` into a set of flags.
///
/// Both single flags and the composite classes (`ALPHA`, `ALNUM`, `XDIGIT`,
/// `GRAPH`, `PRINT`, `UTF8MBC`, `UTF8`) are accepted. A lone `0` denotes
/// the empty set, so the output of `Display` parses back.
///
/// ```
/// use bytetype::{parse_flags, CtypeFlags};
/// assert_eq!(parse_flags("DIGIT | XALPHA").unwrap(), CtypeFlags::XDIGIT);
/// assert_eq!(parse_flags("alpha").unwrap(), CtypeFlags::ALPHA);
/// assert!(parse_flags("VOWEL").is_err());
/// ```
pub fn parse_flags(input: &str) -> Result<CtypeFlags, FlagsParseError> {
    let input = input.trim();
    if input == "0" {
        return Ok(CtypeFlags::empty());
    }

    let mut result = CtypeFlags::empty();
    for token in input.split('|') {
        let name = token.trim();
        if name.is_empty() {
            return Err(FlagsParseError::Empty);
        }

        result |= flag_by_name(name)
            .ok_or_else(|| FlagsParseError::UnknownFlag(name.to_string()))?;
    }

    Ok(result)
}

fn flag_by_name(name: &str) -> Option<CtypeFlags> {
    let upper = name.to_ascii_uppercase();
    CtypeFlags::from_name(&upper).or_else(|| {
        COMPOSITES
            .iter()
            .find(|(composite, _)| *composite == upper)
            .map(|(_, flags)| *flags)
    })
}
