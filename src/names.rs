use std::fmt;

#[rustfmt::skip]
static ASCII_NAMES: [&str; 128] = [
    "nul", "soh", "stx", "etx", "eot", "enq", "ack", "bel",
    "bs",  "ht",  "nl",  "vt",  "np",  "cr",  "so",  "si",
    "dle", "dc1", "dc2", "dc3", "dc4", "nak", "syn", "etb",
    "can", "em",  "sub", "esc", "fs",  "gs",  "rs",  "us",
    "sp",  "!",   "\"",  "#",   "$",   "%",   "&",   "'",
    "(",   ")",   "*",   "+",   ",",   "-",   ".",   "/",
    "0",   "1",   "2",   "3",   "4",   "5",   "6",   "7",
    "8",   "9",   ":",   ";",   "<",   "=",   ">",   "?",
    "@",   "A",   "B",   "C",   "D",   "E",   "F",   "G",
    "H",   "I",   "J",   "K",   "L",   "M",   "N",   "O",
    "P",   "Q",   "R",   "S",   "T",   "U",   "V",   "W",
    "X",   "Y",   "Z",   "[",   "\\",  "]",   "^",   "_",
    "`",   "a",   "b",   "c",   "d",   "e",   "f",   "g",
    "h",   "i",   "j",   "k",   "l",   "m",   "n",   "o",
    "p",   "q",   "r",   "s",   "t",   "u",   "v",   "w",
    "x",   "y",   "z",   "{",   "|",   "}",   "~",   "del",
];

/// Returns the mnemonic of an ASCII byte: the control character name, `sp`
/// for space, or the character itself.
///
/// ```
/// use bytetype::ascii_name;
/// assert_eq!(ascii_name(0), Some("nul"));
/// assert_eq!(ascii_name(b'A'), Some("A"));
/// assert_eq!(ascii_name(0x80), None);
/// ```
pub fn ascii_name(b: u8) -> Option<&'static str> {
    ASCII_NAMES.get(usize::from(b)).copied()
}

/// Three column label for a byte, used to annotate table rows.
///
/// Single character names are centered, longer mnemonics are left aligned,
/// and bytes above the ASCII range are written as `x` followed by two hex
/// digits.
///
/// ```
/// use bytetype::CodeName;
/// assert_eq!(CodeName(b'A').to_string(), " A ");
/// assert_eq!(CodeName(b' ').to_string(), "sp ");
/// assert_eq!(CodeName(0x7f).to_string(), "del");
/// assert_eq!(CodeName(0xc2).to_string(), "xc2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeName(pub u8);

impl fmt::Display for CodeName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match ascii_name(self.0) {
            Some(name) if name.len() == 1 => write!(f, "{:^3}", name),
            Some(name) => write!(f, "{:<3}", name),
            None => write!(f, "x{:02x}", self.0),
        }
    }
}
