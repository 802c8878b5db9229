//! Delimited-file sink: UTF-8 CSV with a byte-order mark.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use lf_records::LogRecord;

use crate::error::PipelineResult;

/// UTF-8 BOM; spreadsheet applications need it to detect the encoding.
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write the full record set as CSV with a header row.
pub fn write(path: &Path, records: &[LogRecord]) -> PipelineResult<()> {
    let mut file = File::create(path)?;
    file.write_all(BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
