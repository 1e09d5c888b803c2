use crate::error::Result;
use crate::schema::{FiscalRecord, COLUMNS, SHEET_NAME};
use calamine::{open_workbook, Data, Reader, Xlsx};
use log::{debug, warn};
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Append-only text table backing the fiscal record sheet.
///
/// Columns are fixed to [`COLUMNS`]; reconciliation against files written
/// with a different layout happens once at load, never on reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetTable {
    rows: Vec<[String; 11]>,
}

impl SheetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the backing workbook, or starts empty.
    ///
    /// A missing file is a normal first run. A file that cannot be opened or
    /// that lacks the expected sheet is recovered into an empty table with a
    /// returned warning; nothing here is fatal.
    pub fn load_or_init(path: &Path) -> (SheetTable, Option<String>) {
        if !path.exists() {
            debug!("no backing file at {}, starting empty", path.display());
            return (SheetTable::new(), None);
        }

        let mut workbook: Xlsx<_> = match open_workbook(path) {
            Ok(wb) => wb,
            Err(e) => {
                warn!("failed to open {}: {e}", path.display());
                return (
                    SheetTable::new(),
                    Some(format!(
                        "Arquivo existente não pôde ser lido; será criado um novo. ({e})"
                    )),
                );
            }
        };

        let range = match workbook.worksheet_range(SHEET_NAME) {
            Ok(range) => range,
            Err(e) => {
                warn!("sheet {SHEET_NAME:?} missing in {}: {e}", path.display());
                return (
                    SheetTable::new(),
                    Some("Arquivo existente não possui a aba esperada; será criado um novo.".to_string()),
                );
            }
        };

        let mut rows_iter = range.rows();
        let headers: Vec<String> = match rows_iter.next() {
            Some(header_row) => header_row.iter().map(cell_text).collect(),
            None => return (SheetTable::new(), None),
        };

        // One-shot schema reconciliation: expected columns picked out by
        // header, missing ones filled empty, extras dropped, order forced.
        let positions: Vec<Option<usize>> = COLUMNS
            .iter()
            .map(|expected| headers.iter().position(|h| h.trim() == *expected))
            .collect();

        let rows = rows_iter
            .map(|row| {
                std::array::from_fn(|i| {
                    positions[i]
                        .and_then(|p| row.get(p))
                        .map(cell_text)
                        .unwrap_or_default()
                })
            })
            .collect::<Vec<[String; 11]>>();

        debug!("loaded {} rows from {}", rows.len(), path.display());
        (SheetTable { rows }, None)
    }

    /// Appends one record as the last row. Insertion order is the only
    /// ordering guarantee; duplicates are permitted and not detected.
    pub fn append(&mut self, record: &FiscalRecord) {
        self.rows.push(record.to_row());
    }

    pub fn rows(&self) -> &[[String; 11]] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rewrites the whole backing sheet from the current table contents.
    pub fn persist(&self, path: &Path) -> Result<()> {
        let mut workbook = self.to_workbook()?;
        workbook.save(path)?;
        debug!("persisted {} rows to {}", self.rows.len(), path.display());
        Ok(())
    }

    /// Serializes the table to an in-memory workbook buffer with the same
    /// schema, without touching the backing file.
    pub fn export_bytes(&self) -> Result<Vec<u8>> {
        let mut workbook = self.to_workbook()?;
        Ok(workbook.save_to_buffer()?)
    }

    fn to_workbook(&self) -> Result<Workbook> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;

        for (col, header) in COLUMNS.iter().enumerate() {
            sheet.write_string(0, col as u16, *header)?;
        }
        for (row, cells) in self.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                sheet.write_string(row as u32 + 1, col as u16, cell)?;
            }
        }

        Ok(workbook)
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
