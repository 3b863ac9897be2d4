use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::table::codes::{ScanCodeTable, TABLE_SIZE};

pub const SLOTS_PER_LINE: usize = 10;

// Emits all 256 slots in index order, `'g', ` for a mapped code and `0, `
// for the sentinel, breaking the line after every 10th slot. The last line
// carries the trailing 6 slots and no terminator, so the text can be pasted
// straight into an array initializer.
pub fn write_array(table: &ScanCodeTable, out: &mut impl Write) -> io::Result<()> {
    for code in 0..TABLE_SIZE {
        match table.glyph(code) {
            Some(glyph) => write!(out, "'{}', ", glyph)?,
            None => write!(out, "0, ")?,
        }
        if (code + 1) % SLOTS_PER_LINE == 0 {
            writeln!(out)?;
        }
    }
    Ok(())
}

// Normalized dump of the filtered table: one `code, glyph` line per mapped
// slot, decimal code, ascending.
pub fn write_pairs(table: &ScanCodeTable, out: &mut impl Write) -> io::Result<()> {
    for (code, glyph) in table.entries() {
        writeln!(out, "{}, {}", code, glyph)?;
    }
    Ok(())
}

pub fn write_array_file(table: &ScanCodeTable, path: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_array(table, &mut out)?;
    out.flush()
}

pub fn write_pairs_file(table: &ScanCodeTable, path: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_pairs(table, &mut out)?;
    out.flush()
}
