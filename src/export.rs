//! CSV export of record sets.
//!
//! The flat tabular format is the only wire format in the system: a header
//! row with the record attribute names, one row per record, empty cells for
//! an absent month or approver, RFC 3339 submission dates.

use crate::entities::record;
use crate::errors::Result;
use std::io::Write;

const HEADER: [&str; 14] = [
    "id",
    "location",
    "division",
    "year",
    "month",
    "category",
    "input_value",
    "input_unit",
    "standard_value",
    "standard_unit",
    "status",
    "submitted_by",
    "approved_by",
    "submission_date",
];

/// Writes the records as CSV to `writer`, header row included.
pub fn write_csv<W: Write>(records: &[record::Model], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for record in records {
        csv_writer.write_record([
            record.id.to_string(),
            record.location.clone(),
            record.division.clone(),
            record.year.to_string(),
            record.month.map(|m| m.to_string()).unwrap_or_default(),
            record.category.clone(),
            record.input_value.to_string(),
            record.input_unit.clone(),
            record.standard_value.to_string(),
            record.standard_unit.clone(),
            record.status.as_str().to_string(),
            record.submitted_by.clone(),
            record.approved_by.clone().unwrap_or_default(),
            record.submission_date.to_rfc3339(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Convenience wrapper returning the CSV as an owned string.
pub fn records_to_csv_string(records: &[record::Model]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| crate::errors::Error::Config {
        message: format!("CSV output was not valid UTF-8: {e}"),
    })
}
