use crate::{data::CASEFOLD_TABLE, CodeName, CtypeFlags, CTYPE_TABLE, NO_FOLD};
use std::io::{self, Write};

const BANNER: &str = "/* **** DO NOT EDIT! ****
   This table was generated by bytetype, make changes there. */";

/// Customizes how the tables are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingOptions {
    /// Number of spaces in front of each row
    indent: u8,

    /// Write raw numbers instead of flag names and character literals
    numeric: bool,
}

impl ListingOptions {
    /// Creates the structure with default options
    pub fn new() -> Self {
        ListingOptions::default()
    }

    /// Sets the number of spaces each row is indented by
    pub fn with_indent(mut self, indent: u8) -> ListingOptions {
        self.indent = indent;
        self
    }

    /// Sets if entries are written as numbers (`0x0031`, `97`) rather than
    /// symbolic names (`ASCII | DIGIT`, `'a'`)
    pub fn with_numeric(mut self, numeric: bool) -> ListingOptions {
        self.numeric = numeric;
        self
    }
}

impl Default for ListingOptions {
    fn default() -> Self {
        ListingOptions {
            indent: 4,
            numeric: false,
        }
    }
}

/// Writes the classification and case-fold tables as annotated listings,
/// one row per byte value.
///
/// ```
/// use bytetype::TableListing;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut listing = TableListing::new(Vec::new());
/// listing.write_ctype_table()?;
/// let out = String::from_utf8(listing.into_inner())?;
/// assert!(out.contains("    /*  A  */ ASCII | UPPER | XALPHA,\n"));
/// assert!(out.contains("    /* xc0 */ 0,\n"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TableListing<W> {
    writer: W,
    options: ListingOptions,
}

impl<W> TableListing<W>
where
    W: Write,
{
    /// Creates a listing writer with default options
    pub fn new(writer: W) -> Self {
        TableListing::with_options(writer, ListingOptions::default())
    }

    /// Creates a listing writer with the given options
    pub fn with_options(writer: W, options: ListingOptions) -> Self {
        TableListing { writer, options }
    }

    /// Returns the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Writes the classification table followed by the case-fold table
    pub fn write_tables(&mut self) -> io::Result<()> {
        self.write_ctype_table()?;
        self.write_casefold_table()
    }

    /// Writes the classification table
    pub fn write_ctype_table(&mut self) -> io::Result<()> {
        self.write_banner()?;
        for (i, flags) in CTYPE_TABLE.iter().enumerate() {
            self.write_label(i as u8)?;
            self.write_flags(*flags)?;
            self.writer.write_all(b",\n")?;
        }
        Ok(())
    }

    /// Writes the case-fold table
    pub fn write_casefold_table(&mut self) -> io::Result<()> {
        self.write_banner()?;
        for (i, folded) in CASEFOLD_TABLE.iter().enumerate() {
            self.write_label(i as u8)?;
            self.write_fold(*folded)?;
            self.writer.write_all(b",\n")?;
        }
        Ok(())
    }

    fn write_banner(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\n")?;
        for line in BANNER.lines() {
            self.write_indent()?;
            self.writer.write_all(line.as_bytes())?;
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    fn write_indent(&mut self) -> io::Result<()> {
        for _ in 0..self.options.indent {
            self.writer.write_all(b" ")?;
        }
        Ok(())
    }

    fn write_label(&mut self, b: u8) -> io::Result<()> {
        self.write_indent()?;
        write!(self.writer, "/* {} */ ", CodeName(b))
    }

    fn write_flags(&mut self, flags: CtypeFlags) -> io::Result<()> {
        if self.options.numeric {
            write!(self.writer, "0x{:04x}", flags.bits())
        } else {
            write!(self.writer, "{}", flags)
        }
    }

    fn write_fold(&mut self, folded: u8) -> io::Result<()> {
        if self.options.numeric {
            self.write_decimal(folded)
        } else if folded == NO_FOLD {
            self.writer.write_all(b"'\\0'")
        } else {
            write!(self.writer, "'{}'", char::from(folded))
        }
    }

    #[cfg(feature = "faster_writer")]
    fn write_decimal(&mut self, value: u8) -> io::Result<()> {
        let mut buffer = itoa::Buffer::new();
        self.writer.write_all(buffer.format(value).as_bytes())
    }

    #[cfg(not(feature = "faster_writer"))]
    fn write_decimal(&mut self, value: u8) -> io::Result<()> {
        write!(self.writer, "{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(options: ListingOptions) -> String {
        let mut listing = TableListing::with_options(Vec::new(), options);
        listing.write_tables().unwrap();
        String::from_utf8(listing.into_inner()).unwrap()
    }

    #[test]
    fn test_one_row_per_byte() {
        let out = render(ListingOptions::new());
        let rows = out.lines().filter(|x| x.trim_end().ends_with(',')).count();
        assert_eq!(rows, 512);
        assert_eq!(out.matches("DO NOT EDIT").count(), 2);
    }

    #[test]
    fn test_symbolic_rows() {
        let out = render(ListingOptions::new());
        assert!(out.contains("    /* nul */ ASCII | CNTRL,\n"));
        assert!(out.contains("    /* ht  */ ASCII | CNTRL | SPACE,\n"));
        assert!(out.contains("    /* sp  */ ASCII | SPACE,\n"));
        assert!(out.contains("    /*  0  */ ASCII | DIGIT,\n"));
        assert!(out.contains("    /* x80 */ UTF8CONT,\n"));
        assert!(out.contains("    /* xc2 */ UTF8LEAD,\n"));
        assert!(out.contains("    /*  A  */ 'a',\n"));
        assert!(out.contains("    /*  a  */ 'A',\n"));
        assert!(out.contains("    /*  0  */ '\\0',\n"));
    }

    #[test]
    fn test_numeric_rows() {
        let out = render(ListingOptions::new().with_numeric(true).with_indent(0));
        assert!(out.contains("/*  0  */ 0x0011,\n"));
        assert!(out.contains("/* xc0 */ 0x0000,\n"));
        assert!(out.contains("/*  A  */ 97,\n"));
        assert!(out.contains("/* xff */ 0,\n"));
        assert!(!out.contains("\n    /*"));
    }
}
