use std::path::Path;

use anyhow::{Context, Result};

use crate::emit;
use crate::table::classify::Classifier;
use crate::table::codes::ScanCodeTable;
use crate::table::loader;

// One pass: load rows, keep the qualifying ones, then serialize the table
// as the driver array plus the normalized pairs dump.
pub fn run(table_path: &Path, array_path: &Path, pairs_path: &Path) -> Result<()> {
    let classifier = Classifier::new();
    let mut table = ScanCodeTable::new();

    let rows = loader::read_rows(table_path)
        .with_context(|| format!("Failed to open scan code table {:?}", table_path))?;
    for row in rows {
        let row =
            row.with_context(|| format!("Failed to read scan code table {:?}", table_path))?;
        if let Some((code, glyph)) = classifier.classify(&row) {
            table.insert(code, glyph);
        }
    }

    emit::write_array_file(&table, array_path)
        .with_context(|| format!("Failed to write array to {:?}", array_path))?;
    emit::write_pairs_file(&table, pairs_path)
        .with_context(|| format!("Failed to write pairs listing to {:?}", pairs_path))?;

    Ok(())
}
