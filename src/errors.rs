use std::{error, fmt};

/// An error that can occur when parsing a flag expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagsParseError {
    /// The expression, or one of its `|` separated terms, was empty
    Empty,

    /// A term did not name a known flag or composite class
    UnknownFlag(String),
}

impl fmt::Display for FlagsParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FlagsParseError::Empty => write!(f, "empty flag expression"),
            FlagsParseError::UnknownFlag(x) => write!(f, "unknown flag: {}", x),
        }
    }
}

impl error::Error for FlagsParseError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
