//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use crate::payload::{PayloadValue, SheetPayload};

/// CSV file reader
///
/// A CSV source is a single anonymous table, so the resulting
/// [`SheetPayload`] takes the conventional "Sheet1" name.
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a payload
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<SheetPayload> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a payload
    ///
    /// Records may have differing lengths; the import step pads them.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<SheetPayload> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut payload = SheetPayload::new("Sheet1");

        for result in csv_reader.records() {
            let record = result?;

            let row = record
                .iter()
                .map(|field| {
                    if options.auto_detect_types {
                        Self::detect_type(field)
                    } else {
                        PayloadValue::text(field)
                    }
                })
                .collect();

            payload.push_row(row);
        }

        Ok(payload)
    }

    /// Detect the type of a field value
    ///
    /// Only exact lexical matches are promoted; anything else stays text
    /// byte-for-byte, so detection never mangles a field it cannot fully
    /// claim.
    fn detect_type(field: &str) -> PayloadValue {
        if field.is_empty() {
            return PayloadValue::Empty;
        }

        if field.eq_ignore_ascii_case("true") {
            return PayloadValue::Boolean(true);
        }
        if field.eq_ignore_ascii_case("false") {
            return PayloadValue::Boolean(false);
        }

        if let Ok(n) = field.parse::<f64>() {
            return PayloadValue::Number(n);
        }

        PayloadValue::text(field)
    }
}
