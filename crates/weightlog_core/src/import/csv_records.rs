//! CSV parsing into records.

use super::{ImportError, ImportResult};
use crate::model::metric::Metric;
use crate::model::record::Record;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{error, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

const DATE_COLUMN: &str = "date";
const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Date,
    Value(Metric),
}

/// Parses CSV text whose first row names the record fields.
///
/// Header names are matched case-insensitively; unknown columns are ignored
/// and missing metric columns leave those fields absent. Rows with every
/// cell blank are skipped.
///
/// # Errors
/// - `EmptyFile` when there is no header row.
/// - `MissingColumn("date")` when the header has no date column.
/// - `Csv` for malformed input (for example invalid UTF-8).
pub fn parse_records_csv<R: Read>(reader: R) -> ImportResult<Vec<Record>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.iter().all(|name| normalize_header(name).is_empty()) {
        return Err(ImportError::EmptyFile);
    }
    let columns = map_columns(&headers);
    if !columns.contains(&Some(Column::Date)) {
        return Err(ImportError::MissingColumn(DATE_COLUMN));
    }

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        if row.iter().all(str::is_empty) {
            continue;
        }
        records.push(to_record(&columns, &row));
    }
    Ok(records)
}

/// Opens `path` and parses it with [`parse_records_csv`].
///
/// # Side effects
/// - Emits `records_import` logging events with duration, status and count.
pub fn import_records_from_path(path: impl AsRef<Path>) -> ImportResult<Vec<Record>> {
    let started_at = Instant::now();
    info!("event=records_import module=import status=start source=file");

    let result = File::open(path)
        .map_err(ImportError::from)
        .and_then(parse_records_csv);

    match &result {
        Ok(records) => info!(
            "event=records_import module=import status=ok source=file duration_ms={} count={}",
            started_at.elapsed().as_millis(),
            records.len()
        ),
        Err(err) => error!(
            "event=records_import module=import status=error source=file duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

fn normalize_header(name: &str) -> String {
    name.trim_start_matches(BYTE_ORDER_MARK)
        .trim()
        .to_ascii_lowercase()
}

fn map_columns(headers: &StringRecord) -> Vec<Option<Column>> {
    headers
        .iter()
        .map(|name| {
            let normalized = normalize_header(name);
            if normalized == DATE_COLUMN {
                return Some(Column::Date);
            }
            normalized.parse::<Metric>().ok().map(Column::Value)
        })
        .collect()
}

fn to_record(columns: &[Option<Column>], row: &StringRecord) -> Record {
    let mut record = Record::default();
    for (column, cell) in columns.iter().zip(row.iter()) {
        match column {
            Some(Column::Date) if !cell.is_empty() => record.date = Some(cell.to_string()),
            Some(Column::Value(metric)) => record.set(*metric, Some(cell.to_string())),
            _ => {}
        }
    }
    record
}
