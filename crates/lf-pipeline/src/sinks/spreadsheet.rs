//! Spreadsheet sink: XLSX export of the record set.

use std::path::Path;

use rust_xlsxwriter::Workbook;

use lf_records::LogRecord;

use crate::error::PipelineResult;

const HEADERS: [&str; 8] = [
    "timestamp",
    "level",
    "category",
    "message",
    "generalized_message",
    "source_file",
    "line_number",
    "raw_line",
];

/// Write the full record set as a single-sheet workbook with a header row.
pub fn write(path: &Path, records: &[LogRecord]) -> PipelineResult<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("logs")?;

    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    for (idx, record) in records.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string(row, 0, record.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string())?;
        sheet.write_string(row, 1, record.level.as_str())?;
        sheet.write_string(row, 2, record.category.as_str())?;
        sheet.write_string(row, 3, record.message.as_str())?;
        sheet.write_string(row, 4, record.generalized_message.as_deref().unwrap_or(""))?;
        sheet.write_string(row, 5, record.source_file.as_str())?;
        sheet.write_number(row, 6, record.line_number as f64)?;
        sheet.write_string(row, 7, record.raw_line.as_str())?;
    }

    workbook.save(path)?;
    Ok(())
}
