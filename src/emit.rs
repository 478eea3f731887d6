use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// Output schema, in CSV column order.
pub const COLUMNS: [&str; 15] = [
    "year", "code", "title", "street", "city", "state", "zip", "phone", "tag", "staff",
    "doctorates", "numTechsAndAuxs", "fields", "note", "leftover",
];

/// One parsed directory entry. Field order is the column order; every field
/// defaults to empty except `year`, which is fixed per document run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub year: String,
    pub code: String,
    pub title: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub tag: String,
    pub staff: String,
    pub doctorates: String,
    #[serde(rename = "numTechsAndAuxs")]
    pub num_techs_and_auxs: String,
    pub fields: String,
    pub note: String,
    pub leftover: String,
}

impl Record {
    pub fn with_year(year: &str) -> Self {
        Record {
            year: year.to_string(),
            ..Default::default()
        }
    }
}

/// Write records to a CSV file: one header row, one row per record, in input
/// order. Empty fields become empty cells; an empty batch still gets the
/// header row.
pub fn write_csv(path: &Path, records: &[Record]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    if records.is_empty() {
        writer.write_record(COLUMNS)?;
    }
    for record in records {
        writer.serialize(record)?;
    }

    writer
        .flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_matches_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let rec = Record {
            year: "1975".into(),
            code: "A1".into(),
            title: "WIDGET CO.".into(),
            ..Default::default()
        };
        write_csv(&path, &[rec]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header, COLUMNS.join(","));
    }

    #[test]
    fn empty_batch_still_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        write_csv(&path, &[]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim(), COLUMNS.join(","));
    }

    #[test]
    fn embedded_commas_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quoted.csv");
        let rec = Record {
            year: "1975".into(),
            fields: "Widgets, Gadgets".into(),
            ..Default::default()
        };
        write_csv(&path, &[rec]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"Widgets, Gadgets\""));

        // Round-trips through a reader without losing the comma
        let mut reader = csv::Reader::from_path(&path).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[12], "Widgets, Gadgets");
    }

    #[test]
    fn rows_preserve_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("order.csv");
        let records: Vec<Record> = (0..5)
            .map(|i| Record {
                year: "1975".into(),
                code: format!("A{}", i),
                ..Default::default()
            })
            .collect();
        write_csv(&path, &records).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let codes: Vec<String> = reader
            .records()
            .map(|r| r.unwrap()[1].to_string())
            .collect();
        assert_eq!(codes, vec!["A0", "A1", "A2", "A3", "A4"]);
    }
}
