//! Result table export.
//!
//! Writes one [`pipeline::ResultTable`] to a pair of timestamped files in the
//! same directory:
//!
//! - `gpt5_web_search_results_<YYYYMMDD_HHMMSS>.csv`, UTF-8 with a byte-order
//!   mark, header row first;
//! - `gpt5_web_search_results_<YYYYMMDD_HHMMSS>.xlsx`, a single sheet named
//!   [`SHEET_NAME`] holding the same rows.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** File formats and naming live here; the [`pipeline`]
//! crate never touches the file system.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use pipeline::ResultTable;
use thiserror::Error;
use tracing::info;

mod cells;
mod csv_file;
mod workbook;

pub use workbook::SHEET_NAME;

/// Common stem of both output file names.
pub const FILE_STEM: &str = "gpt5_web_search_results";

/// Failure while writing either output file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX write failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Locations of the two files produced by one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub csv: PathBuf,
    pub xlsx: PathBuf,
}

/// Exports `table` into `dir`, stamping the file names with the current local time.
pub fn export_results(table: &ResultTable, dir: &Path) -> Result<ExportPaths, ExportError> {
    export_results_at(table, dir, Local::now().naive_local())
}

/// Exports `table` into `dir` using `at` for the file-name timestamp.
pub fn export_results_at(
    table: &ResultTable,
    dir: &Path,
    at: NaiveDateTime,
) -> Result<ExportPaths, ExportError> {
    let stem = format!("{FILE_STEM}_{}", at.format("%Y%m%d_%H%M%S"));
    let paths = ExportPaths {
        csv: dir.join(format!("{stem}.csv")),
        xlsx: dir.join(format!("{stem}.xlsx")),
    };

    csv_file::write_csv(table, &paths.csv)?;
    workbook::write_workbook(table, &paths.xlsx)?;

    info!(
        rows = table.len(),
        csv = %paths.csv.display(),
        xlsx = %paths.xlsx.display(),
        "results exported"
    );
    Ok(paths)
}
