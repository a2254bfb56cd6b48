use bytetype::{parse_flags, CodeName, ListingOptions, TableListing, CTYPE_TABLE};
use std::env;
use std::error;
use std::io::{self, BufWriter, Write};

fn main() -> Result<(), Box<dyn error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match args.first().map(String::as_str) {
        None => TableListing::new(&mut out).write_tables()?,
        Some("--numeric") => {
            let options = ListingOptions::new().with_numeric(true);
            TableListing::with_options(&mut out, options).write_tables()?
        }
        Some("--json") => write_json(&mut out)?,
        Some("--select") => {
            let expr = args.get(1).ok_or("--select requires a flag expression")?;
            let mask = parse_flags(expr)?;
            for (i, flags) in CTYPE_TABLE.iter().enumerate() {
                if flags.intersects(mask) {
                    writeln!(out, "0x{:02x} {} {}", i, CodeName(i as u8), flags)?;
                }
            }
        }
        Some(x) => return Err(format!("unrecognized argument: {}", x).into()),
    }

    out.flush()?;
    Ok(())
}

#[cfg(feature = "json")]
fn write_json<W: Write>(mut out: W) -> Result<(), Box<dyn error::Error>> {
    bytetype::json::to_writer(&mut out, true)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(not(feature = "json"))]
fn write_json<W: Write>(_out: W) -> Result<(), Box<dyn error::Error>> {
    Err("json output requires the json feature".into())
}
