use std::fs::File;
use std::io::Write;
use std::path::Path;

use pipeline::ResultTable;

use crate::cells::text_row;
use crate::ExportError;

/// UTF-8 byte-order mark; spreadsheet applications use it to detect the encoding.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub(crate) fn write_csv(table: &ResultTable, path: &Path) -> Result<(), ExportError> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(ResultTable::COLUMNS)?;
    for row in table.rows() {
        writer.write_record(text_row(row))?;
    }
    writer.flush()?;
    Ok(())
}
