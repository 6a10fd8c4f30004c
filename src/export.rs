//! CSV export of recorded preferences.

use crate::error::StorageError;
use crate::store::Record;
use chrono::SecondsFormat;
use std::io::Write;

/// Column order of the export.
pub const CSV_HEADER: [&str; 5] = ["timestamp", "A", "B", "choice", "metadata"];

/// Write `records` as CSV, header first, in store order.
pub fn write_csv<W: Write>(records: &[Record], writer: W) -> Result<(), StorageError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER).map_err(export_error)?;

    for record in records {
        let timestamp = record
            .recorded_at
            .to_rfc3339_opts(SecondsFormat::AutoSi, false);
        let item_a = record.item_a.to_string_lossy();
        let item_b = record.item_b.to_string_lossy();
        let metadata = serde_json::to_string(&record.metadata)?;
        csv_writer
            .write_record([
                timestamp.as_str(),
                &*item_a,
                &*item_b,
                record.choice.as_str(),
                metadata.as_str(),
            ])
            .map_err(export_error)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Render `records` as a CSV string.
pub fn to_csv_string(records: &[Record]) -> Result<String, StorageError> {
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| StorageError::Export(e.to_string()))
}

fn export_error(err: csv::Error) -> StorageError {
    StorageError::Export(err.to_string())
}
