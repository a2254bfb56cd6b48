//! Exports the tables as JSON
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let json = bytetype::json::to_string(false)?;
//! let value: serde_json::Value = serde_json::from_str(&json)?;
//! assert_eq!(value["ctype"][65], "ASCII | UPPER | XALPHA");
//! assert_eq!(value["casefold"][65], 97);
//! assert!(value["casefold"][48].is_null());
//! # Ok(())
//! # }
//! ```

use crate::{casefold, CtypeFlags, CTYPE_TABLE};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct Tables<'a> {
    ctype: &'a [CtypeFlags],
    casefold: Vec<Option<u8>>,
}

impl Tables<'static> {
    fn new() -> Self {
        Tables {
            ctype: &CTYPE_TABLE,
            casefold: (0..=255u8).map(casefold).collect(),
        }
    }
}

/// Serializes both tables into a JSON string
pub fn to_string(pretty: bool) -> serde_json::Result<String> {
    let tables = Tables::new();
    if pretty {
        serde_json::to_string_pretty(&tables)
    } else {
        serde_json::to_string(&tables)
    }
}

/// Serializes both tables as JSON into the writer
pub fn to_writer<W>(writer: W, pretty: bool) -> serde_json::Result<()>
where
    W: Write,
{
    let tables = Tables::new();
    if pretty {
        serde_json::to_writer_pretty(writer, &tables)
    } else {
        serde_json::to_writer(writer, &tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_have_every_byte() {
        let value: serde_json::Value = serde_json::from_str(&to_string(true).unwrap()).unwrap();
        assert_eq!(value["ctype"].as_array().unwrap().len(), 256);
        assert_eq!(value["casefold"].as_array().unwrap().len(), 256);
        assert_eq!(value["ctype"][0xc0], "0");
        assert_eq!(value["ctype"][0x80], "UTF8CONT");
        assert_eq!(value["casefold"][97], 65);
    }

    #[test]
    fn test_writer_matches_string() {
        let mut out = Vec::new();
        to_writer(&mut out, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), to_string(false).unwrap());
    }
}
