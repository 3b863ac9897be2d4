use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

// A row as it appears in the source table: comma-split fields, untrimmed,
// any field count. Deciding whether a row is usable belongs to the
// classifier, not the loader.
pub struct RawRow {
    pub fields: Vec<String>,
}

pub struct Rows<R> {
    lines: io::Lines<R>,
}

impl<R: BufRead> Rows<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for Rows<R> {
    type Item = io::Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        Some(line.map(|line| RawRow {
            fields: split_fields(&line),
        }))
    }
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(str::to_string).collect()
}

pub fn read_rows(path: &Path) -> io::Result<Rows<BufReader<File>>> {
    let file = File::open(path)?;
    Ok(Rows::new(BufReader::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn rows_of(input: &str) -> Vec<RawRow> {
        Rows::new(Cursor::new(input))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn splits_on_commas_without_trimming() {
        let rows = rows_of("1E, A pressed\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].fields, vec!["1E", " A pressed"]);
    }

    #[test]
    fn preserves_source_order() {
        let rows = rows_of("1E, A pressed\n30, B pressed\n");
        assert_eq!(rows[0].fields[0], "1E");
        assert_eq!(rows[1].fields[0], "30");
    }

    #[test]
    fn passes_odd_field_counts_through() {
        let rows = rows_of("just one field\nA, B, C\n\n");
        assert_eq!(rows[0].fields.len(), 1);
        assert_eq!(rows[1].fields.len(), 3);
        assert_eq!(rows[2].fields, vec![""]);
    }

    #[test]
    fn open_fails_on_missing_file() {
        assert!(read_rows(Path::new("no_such_table.csv")).is_err());
    }
}
