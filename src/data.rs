use crate::CtypeFlags;

/// Case-fold table entry for bytes without a case partner (the NUL byte)
pub const NO_FOLD: u8 = 0;

/// Computes the classification of a single byte.
///
/// The ASCII half receives `ASCII`, the `CNTRL` and `SPACE` bits where
/// applicable, and at most one of `PUNCT`, `DIGIT`, `UPPER`, or `LOWER`
/// (letters `A-F` and `a-f` also receive `XALPHA`). The upper half receives
/// either `UTF8LEAD`, `UTF8CONT`, or nothing.
///
/// ```
/// use bytetype::{classify, CtypeFlags};
/// assert_eq!(classify(b'0'), CtypeFlags::ASCII | CtypeFlags::DIGIT);
/// assert_eq!(classify(0xC2), CtypeFlags::UTF8LEAD);
/// assert_eq!(classify(0xC0), CtypeFlags::empty());
/// ```
pub const fn classify(v: u8) -> CtypeFlags {
    if v < 128 {
        classify_ascii(v)
    } else {
        classify_multibyte(v)
    }
}

const fn classify_ascii(v: u8) -> CtypeFlags {
    let mut flags = CtypeFlags::ASCII;

    if v < 32 || v == 127 {
        flags = flags.union(CtypeFlags::CNTRL);
    }

    // tab, LF, VT, FF, CR, space
    if matches!(v, 9..=13 | 32) {
        flags = flags.union(CtypeFlags::SPACE);
    }

    let class = match v {
        33..=47 | 58..=64 | 91..=96 | 123..=126 => CtypeFlags::PUNCT,
        48..=57 => CtypeFlags::DIGIT,
        65..=70 => CtypeFlags::UPPER.union(CtypeFlags::XALPHA),
        71..=90 => CtypeFlags::UPPER,
        97..=102 => CtypeFlags::LOWER.union(CtypeFlags::XALPHA),
        103..=122 => CtypeFlags::LOWER,
        _ => CtypeFlags::empty(),
    };

    flags.union(class)
}

const fn classify_multibyte(v: u8) -> CtypeFlags {
    if v > 0xC0 && v < 0xFE && !is_excluded_lead(v) {
        CtypeFlags::UTF8LEAD
    } else if v & 0xC0 == 0x80 {
        CtypeFlags::UTF8CONT
    } else {
        CtypeFlags::empty()
    }
}

/// Lead shaped bytes that never start a sequence accepted by the table
const fn is_excluded_lead(v: u8) -> bool {
    matches!(v, 0xE0 | 0xF0 | 0xF8 | 0xFC | 0xFE | 0xFF)
}

/// Computes the case partner of a single byte: lowercase for an uppercase
/// ASCII letter, uppercase for a lowercase one, and [`NO_FOLD`] for anything
/// else.
pub const fn fold(v: u8) -> u8 {
    match v {
        b'A'..=b'Z' => v + 32,
        b'a'..=b'z' => v - 32,
        _ => NO_FOLD,
    }
}

const fn create_ctype_table() -> [CtypeFlags; 256] {
    let mut table = [CtypeFlags::empty(); 256];
    let mut i = 0usize;
    while i < 256 {
        table[i] = classify(i as u8);
        i += 1;
    }
    table
}

const fn create_casefold_table() -> [u8; 256] {
    let mut table = [NO_FOLD; 256];
    let mut i = 0usize;
    while i < 256 {
        table[i] = fold(i as u8);
        i += 1;
    }
    table
}

/// Classification of every byte value, indexed by the byte.
///
/// Kept as a single table so that every predicate shares the same cache
/// lines.
pub static CTYPE_TABLE: [CtypeFlags; 256] = create_ctype_table();

/// Case partner of every byte value, indexed by the byte. Entries without a
/// partner hold [`NO_FOLD`].
pub static CASEFOLD_TABLE: [u8; 256] = create_casefold_table();

/// Looks up the classification of a byte in [`CTYPE_TABLE`]
#[inline]
pub fn classify_byte(b: u8) -> CtypeFlags {
    CTYPE_TABLE[usize::from(b)]
}

/// Looks up the case partner of a byte in [`CASEFOLD_TABLE`]
///
/// ```
/// use bytetype::casefold;
/// assert_eq!(casefold(b'A'), Some(b'a'));
/// assert_eq!(casefold(b'a'), Some(b'A'));
/// assert_eq!(casefold(b'0'), None);
/// ```
#[inline]
pub fn casefold(b: u8) -> Option<u8> {
    match CASEFOLD_TABLE[usize::from(b)] {
        NO_FOLD => None,
        x => Some(x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    const TIERS: CtypeFlags = CtypeFlags::PUNCT
        .union(CtypeFlags::DIGIT)
        .union(CtypeFlags::UPPER)
        .union(CtypeFlags::LOWER);

    const ASCII_CLASSES: CtypeFlags = CtypeFlags::ASCII
        .union(CtypeFlags::CNTRL)
        .union(CtypeFlags::SPACE)
        .union(CtypeFlags::XALPHA)
        .union(TIERS);

    #[rstest]
    #[case(b'0', CtypeFlags::ASCII | CtypeFlags::DIGIT)]
    #[case(b'A', CtypeFlags::ASCII | CtypeFlags::UPPER | CtypeFlags::XALPHA)]
    #[case(b'G', CtypeFlags::ASCII | CtypeFlags::UPPER)]
    #[case(b'f', CtypeFlags::ASCII | CtypeFlags::LOWER | CtypeFlags::XALPHA)]
    #[case(b'z', CtypeFlags::ASCII | CtypeFlags::LOWER)]
    #[case(b'~', CtypeFlags::ASCII | CtypeFlags::PUNCT)]
    #[case(b' ', CtypeFlags::ASCII | CtypeFlags::SPACE)]
    #[case(b'\t', CtypeFlags::ASCII | CtypeFlags::CNTRL | CtypeFlags::SPACE)]
    #[case(0x0b, CtypeFlags::ASCII | CtypeFlags::CNTRL | CtypeFlags::SPACE)]
    #[case(0x00, CtypeFlags::ASCII | CtypeFlags::CNTRL)]
    #[case(0x7f, CtypeFlags::ASCII | CtypeFlags::CNTRL)]
    #[case(0x80, CtypeFlags::UTF8CONT)]
    #[case(0xbf, CtypeFlags::UTF8CONT)]
    #[case(0xc0, CtypeFlags::empty())]
    #[case(0xc1, CtypeFlags::UTF8LEAD)]
    #[case(0xc2, CtypeFlags::UTF8LEAD)]
    #[case(0xe0, CtypeFlags::empty())]
    #[case(0xe1, CtypeFlags::UTF8LEAD)]
    #[case(0xf0, CtypeFlags::empty())]
    #[case(0xf8, CtypeFlags::empty())]
    #[case(0xfc, CtypeFlags::empty())]
    #[case(0xfd, CtypeFlags::UTF8LEAD)]
    #[case(0xfe, CtypeFlags::empty())]
    #[case(0xff, CtypeFlags::empty())]
    fn test_classify(#[case] input: u8, #[case] expected: CtypeFlags) {
        assert_eq!(classify(input), expected);
        assert_eq!(classify_byte(input), expected);
    }

    #[rstest]
    #[case(b'A', b'a')]
    #[case(b'Z', b'z')]
    #[case(b'a', b'A')]
    #[case(b'z', b'Z')]
    #[case(b'0', NO_FOLD)]
    #[case(b'@', NO_FOLD)]
    #[case(b'[', NO_FOLD)]
    #[case(b'`', NO_FOLD)]
    #[case(b'{', NO_FOLD)]
    #[case(0xc1, NO_FOLD)]
    fn test_fold(#[case] input: u8, #[case] expected: u8) {
        assert_eq!(fold(input), expected);
        assert_eq!(CASEFOLD_TABLE[usize::from(input)], expected);
    }

    #[test]
    fn test_tables_are_positional() {
        for (i, (flags, folded)) in CTYPE_TABLE.iter().zip(CASEFOLD_TABLE.iter()).enumerate() {
            assert_eq!(*flags, classify(i as u8));
            assert_eq!(*folded, fold(i as u8));
        }
    }

    #[test]
    fn test_ascii_half() {
        for b in 0..=255u8 {
            let flags = classify(b);
            assert_eq!(flags.contains(CtypeFlags::ASCII), b < 128);
            if b < 128 {
                assert!(ASCII_CLASSES.contains(flags));
            } else {
                assert!(CtypeFlags::UTF8MBC.contains(flags));
            }
        }
    }

    #[test]
    fn test_control_and_space_bits() {
        for b in 0..=255u8 {
            let flags = classify(b);
            assert_eq!(flags.contains(CtypeFlags::CNTRL), b < 32 || b == 127);
            assert_eq!(
                flags.contains(CtypeFlags::SPACE),
                [9, 10, 11, 12, 13, 32].contains(&b)
            );
        }
    }

    #[test]
    fn test_xalpha_only_on_hex_letters() {
        for b in 0..=255u8 {
            let hex_letter = matches!(b, b'A'..=b'F' | b'a'..=b'f');
            assert_eq!(classify(b).contains(CtypeFlags::XALPHA), hex_letter);
        }
    }

    #[test]
    fn test_at_most_one_tier() {
        for b in 0..=255u8 {
            let tiers = classify(b).intersection(TIERS);
            assert!(tiers.bits().count_ones() <= 1, "byte {:#04x}: {}", b, tiers);
        }
    }

    #[test]
    fn test_utf8_roles_are_exclusive() {
        for b in 0..=255u8 {
            let flags = classify(b);
            assert!(!flags.contains(CtypeFlags::UTF8MBC), "byte {:#04x}", b);
            assert!(
                !(flags.contains(CtypeFlags::ASCII) && flags.intersects(CtypeFlags::UTF8MBC)),
                "byte {:#04x}",
                b
            );
        }
    }

    #[test]
    fn test_fold_never_maps_to_itself() {
        for b in 0..=255u8 {
            assert_ne!(casefold(b), Some(b));
        }
    }

    #[test]
    fn test_fold_swaps_letters() {
        for b in 0..=255u8 {
            match casefold(b) {
                Some(x) => {
                    assert!(b.is_ascii_alphabetic());
                    assert_eq!(fold(x), b);
                    assert!(x.eq_ignore_ascii_case(&b));
                }
                None => assert!(!b.is_ascii_alphabetic()),
            }
        }
    }
}
