use std::path::Path;

use pipeline::ResultTable;
use rust_xlsxwriter::{Format, Workbook};
use tracing::warn;

use crate::cells::text_row;
use crate::ExportError;

/// Name of the single worksheet in the exported workbook.
pub const SHEET_NAME: &str = "Results";

/// Longest string an xlsx cell can hold, in characters.
const MAX_CELL_CHARS: usize = 32_767;

// Columns written as numbers rather than text.
const DURATION_COLUMN: u16 = 2;
const CITATION_COUNT_COLUMN: u16 = 4;

pub(crate) fn write_workbook(table: &ResultTable, path: &Path) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, name) in (0u16..).zip(ResultTable::COLUMNS) {
        sheet.write_string_with_format(0, col, name, &header)?;
    }

    for (row, result) in (1u32..).zip(table.rows()) {
        for (col, text) in (0u16..).zip(text_row(result)) {
            match col {
                DURATION_COLUMN => {
                    sheet.write_number(row, col, result.duration_seconds())?;
                }
                CITATION_COUNT_COLUMN => {
                    sheet.write_number(row, col, result.citation_count() as f64)?;
                }
                _ => {
                    sheet.write_string(row, col, fit_cell(text, row, col))?;
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn fit_cell(text: String, row: u32, col: u16) -> String {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => {
            warn!(row, col, "cell exceeds xlsx limit; truncating");
            text[..end].to_owned()
        }
        None => text,
    }
}
