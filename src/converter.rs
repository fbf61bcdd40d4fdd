use crate::{
    error::{ConvertError, Result},
    format::{source_extension, TargetFormat},
};
use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};
use umya_spreadsheet::Worksheet;
use uuid::Uuid;

/// One extension-to-extension transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    CsvToXlsx,
}

impl Handler {
    /// Exact match on the (source extension, target) pair.
    pub fn lookup(source_ext: &str, target: TargetFormat) -> Option<Handler> {
        match (source_ext, target) {
            (".csv", TargetFormat::Xlsx) => Some(Handler::CsvToXlsx),
            _ => None,
        }
    }

    pub fn run(self, source: &Path) -> Result<PathBuf> {
        match self {
            Handler::CsvToXlsx => csv_to_xlsx(source),
        }
    }
}

/// Converts `source` into `target` next to it, returning the written path.
pub fn convert(source: &Path, target: TargetFormat) -> Result<PathBuf> {
    let source_ext = source_extension(source);
    let handler = match source_ext.as_deref() {
        Some(ext) => Handler::lookup(ext, target),
        None => None,
    };

    let Some(handler) = handler else {
        return Err(ConvertError::Unsupported {
            source_ext,
            target: target.extension(),
        });
    };

    log::info!("running {handler:?} on {}", source.display());
    handler.run(source)
}

/// Writes the csv at `source` as a single-sheet workbook with the `.xlsx`
/// extension. The first record becomes the header row; no index column is added.
/// Rows shorter than the header are padded with blank cells.
pub fn csv_to_xlsx(source: &Path) -> Result<PathBuf> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(source)?;

    let mut book = umya_spreadsheet::new_file();
    let sheet = book
        .get_sheet_mut(&0)
        .expect("New workbook has no default sheet.");

    let mut records = reader.records();
    let header = records
        .next()
        .transpose()?
        .ok_or_else(|| ConvertError::EmptyInput(source.to_path_buf()))?;
    for (col, name) in header.iter().enumerate() {
        sheet
            .get_cell_mut((col as u32 + 1, 1))
            .set_value_string(name);
    }

    let mut row = 1;
    for record in records {
        let record = record?;
        row += 1;
        if record.len() > header.len() {
            return Err(ConvertError::RowTooLong {
                row,
                expected: header.len(),
                found: record.len(),
            });
        }
        for (col, field) in record.iter().enumerate() {
            write_field(sheet, (col as u32 + 1, row), field);
        }
    }
    log::debug!("read {} data rows from {}", row - 1, source.display());

    let target = source.with_extension("xlsx");
    replace_with(&target, |writer| {
        umya_spreadsheet::writer::xlsx::write_writer(&book, writer)?;
        Ok(())
    })?;

    Ok(target)
}

/// Runs `write` against a hidden sibling of `target` and renames it over
/// `target` only once every byte reached the disk. On failure `target` is left
/// untouched and the sibling is removed.
fn replace_with<F>(target: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let staging = staging_path(target);
    let written = write_staging(&staging, write).and_then(|_| {
        fs::rename(&staging, target)?;
        Ok(())
    });

    if written.is_err() && staging.exists() {
        if let Err(err) = fs::remove_file(&staging) {
            log::warn!("couldn't remove {}: {err}", staging.display());
        }
    }
    written
}

fn write_staging<F>(staging: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let mut writer = BufWriter::new(File::create(staging)?);
    write(&mut writer)?;

    let file = writer.into_inner().map_err(|err| err.into_error())?;
    file.sync_all()?;
    Ok(())
}

// Markers read as missing values; they become blank cells.
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn write_field(sheet: &mut Worksheet, coordinate: (u32, u32), field: &str) {
    if MISSING_MARKERS.contains(&field) {
        return;
    }

    let cell = sheet.get_cell_mut(coordinate);
    match parse_number(field) {
        Some(number) => cell.set_value_number(number),
        None => cell.set_value_string(field),
    };
}

fn parse_number(field: &str) -> Option<f64> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

// Hidden sibling of `target`, renamed over it once fully written.
fn staging_path(target: &Path) -> PathBuf {
    let file_name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    target.with_file_name(format!(".{file_name}.{}.tmp", Uuid::new_v4().simple()))
}
