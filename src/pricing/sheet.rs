//! Price sheet loading
//!
//! The channel partner calculator is maintained as a spreadsheet and exported
//! to CSV. The export starts with a few title lines before the real header
//! row, is Latin-1 encoded, and sometimes carries stray lines with more cells
//! than the header. Those lines are skipped rather than failing the load.

use crate::core::{Error, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Column holding the item description
pub const DESCRIPTION_COLUMN: &str = "Description";
/// Column holding the per-unit monthly price
pub const UNIT_MONTHLY_COLUMN: &str = "Unit Monthly";

/// A single data row of the price sheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSheetRow {
    /// Item description, `None` when the cell is empty
    pub description: Option<String>,
    /// Raw text of the unit monthly cell, `None` when the cell is empty
    pub unit_monthly: Option<String>,
}

impl PriceSheetRow {
    pub fn new(description: Option<&str>, unit_monthly: Option<&str>) -> Self {
        Self {
            description: description.map(str::to_string),
            unit_monthly: unit_monthly.map(str::to_string),
        }
    }

    /// The unit monthly price, if the cell holds a real number.
    ///
    /// Infinities parse (and are rejected later by rate coercion); NaN does not
    /// count as a number.
    pub fn unit_monthly_value(&self) -> Option<f64> {
        self.unit_monthly
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|v| !v.is_nan())
    }
}

/// Parsed price sheet
#[derive(Debug, Clone, Default)]
pub struct PriceSheet {
    rows: Vec<PriceSheetRow>,
    skipped: usize,
}

impl PriceSheet {
    /// Load a price sheet export from disk
    pub fn from_path(path: &Path, header_row: usize) -> Result<Self> {
        if !path.exists() {
            return Err(Error::PriceSheet(format!(
                "price sheet not found at {}",
                path.display()
            )));
        }

        let file = fs::File::open(path)?;
        Self::from_reader(file, header_row)
    }

    /// Parse a price sheet export.
    ///
    /// `header_row` is the zero-based index of the header record; blank lines
    /// are not counted.
    pub fn from_reader<R: Read>(mut reader: R, header_row: usize) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = decode_latin1(&bytes);

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut records = csv_reader.records();
        let mut index = 0;
        let header = loop {
            match records.next() {
                Some(Ok(record)) if index == header_row => break record,
                Some(Ok(_)) => index += 1,
                Some(Err(e)) => {
                    log::debug!("Skipping unreadable preamble line: {}", e);
                    index += 1;
                }
                None => {
                    return Err(Error::PriceSheet(format!(
                        "header row {} not found, sheet has only {} records",
                        header_row, index
                    )))
                }
            }
        };

        let headers: Vec<String> = header.iter().map(|h| h.trim().to_string()).collect();
        let description_idx = column_index(&headers, DESCRIPTION_COLUMN)?;
        let unit_monthly_idx = column_index(&headers, UNIT_MONTHLY_COLUMN)?;

        let mut rows = Vec::new();
        let mut skipped = 0;
        for record in records {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    log::debug!("Skipping unreadable price sheet line: {}", e);
                    skipped += 1;
                    continue;
                }
            };

            if record.len() > headers.len() {
                skipped += 1;
                continue;
            }

            rows.push(PriceSheetRow {
                description: non_empty(record.get(description_idx)),
                unit_monthly: non_empty(record.get(unit_monthly_idx)),
            });
        }

        if skipped > 0 {
            log::warn!("Skipped {} malformed line(s) in price sheet", skipped);
        }

        Ok(Self { rows, skipped })
    }

    /// Build a sheet from rows that were parsed elsewhere
    pub fn from_rows(rows: Vec<PriceSheetRow>) -> Self {
        Self { rows, skipped: 0 }
    }

    pub fn rows(&self) -> &[PriceSheetRow] {
        &self.rows
    }

    /// Number of malformed lines dropped while parsing
    pub fn skipped_lines(&self) -> usize {
        self.skipped
    }

    /// Distinct non-empty descriptions in sheet order
    pub fn descriptions(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for desc in self.rows.iter().filter_map(|r| r.description.as_deref()) {
            if !seen.contains(&desc) {
                seen.push(desc);
            }
        }
        seen
    }
}

fn column_index(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| Error::PriceSheet(format!("missing column '{}'", name)))
}

fn non_empty(cell: Option<&str>) -> Option<String> {
    cell.map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}

// Every Latin-1 byte maps to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Leka Link Channel Partner,,,
VDC Calculator,,,
,,,
Prices exclude VAT,,,
 Description , Qty ,Unit Monthly ,Total
Virtual Data Centre Resource Pool,1,864.35,864.35
vStorage NVMe (per GB),1,0.85,0.85
,,,
Internet Bandwidth (per Mbps),1,7.50,7.50
";

    #[test]
    fn test_parse_after_preamble() {
        let sheet = PriceSheet::from_reader(SAMPLE.as_bytes(), 4).unwrap();
        let rows = sheet.rows();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].description.as_deref(), Some("Virtual Data Centre Resource Pool"));
        assert_eq!(rows[0].unit_monthly_value(), Some(864.35));
        assert_eq!(rows[2], PriceSheetRow::default());
        assert_eq!(rows[3].unit_monthly.as_deref(), Some("7.50"));
    }

    #[test]
    fn test_missing_column_is_error() {
        let data = "Item,Price\nVM,10\n";
        let err = PriceSheet::from_reader(data.as_bytes(), 0).unwrap_err();
        assert!(err.to_string().contains("Description"));
    }

    #[test]
    fn test_header_row_past_end() {
        let data = "Description,Unit Monthly\n";
        assert!(PriceSheet::from_reader(data.as_bytes(), 4).is_err());
    }

    #[test]
    fn test_overlong_lines_are_skipped() {
        let data = "Description,Unit Monthly\nVM,10\nStorage,1,extra,cells\nBandwidth,5\n";
        let sheet = PriceSheet::from_reader(data.as_bytes(), 0).unwrap();

        assert_eq!(sheet.rows().len(), 2);
        assert_eq!(sheet.skipped_lines(), 1);
        assert_eq!(sheet.rows()[1].description.as_deref(), Some("Bandwidth"));
    }

    #[test]
    fn test_latin1_descriptions() {
        let mut data = b"Description,Unit Monthly\n".to_vec();
        data.extend_from_slice(b"R\xe9seau Bandwidth,7.5\n");
        let sheet = PriceSheet::from_reader(data.as_slice(), 0).unwrap();

        assert_eq!(sheet.rows()[0].description.as_deref(), Some("R\u{e9}seau Bandwidth"));
    }

    #[test]
    fn test_unit_monthly_value() {
        assert_eq!(PriceSheetRow::new(None, Some(" 12.5 ")).unit_monthly_value(), Some(12.5));
        assert_eq!(PriceSheetRow::new(None, Some("R12.50")).unit_monthly_value(), None);
        assert_eq!(PriceSheetRow::new(None, Some("NaN")).unit_monthly_value(), None);
        assert_eq!(PriceSheetRow::new(None, None).unit_monthly_value(), None);
        assert_eq!(PriceSheetRow::new(None, Some("-3")).unit_monthly_value(), Some(-3.0));
        assert!(PriceSheetRow::new(None, Some("inf")).unit_monthly_value().is_some());
    }

    #[test]
    fn test_descriptions_are_distinct() {
        let sheet = PriceSheet::from_rows(vec![
            PriceSheetRow::new(Some("VM"), Some("1")),
            PriceSheetRow::new(None, Some("2")),
            PriceSheetRow::new(Some("VM"), Some("3")),
            PriceSheetRow::new(Some("SSD"), None),
        ]);
        assert_eq!(sheet.descriptions(), vec!["VM", "SSD"]);
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("cloudcost-no-such-sheet.csv");
        assert!(matches!(
            PriceSheet::from_path(&path, 4),
            Err(Error::PriceSheet(_))
        ));
    }
}
