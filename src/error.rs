use std::{io, path::PathBuf};
use thiserror::Error;
use umya_spreadsheet::structs::XlsxError;

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(
        "no handler converts {} files to {target}",
        .source_ext.as_deref().unwrap_or("extensionless")
    )]
    Unsupported {
        source_ext: Option<String>,
        target: &'static str,
    },

    #[error("{} has no header row", .0.display())]
    EmptyInput(PathBuf),

    #[error("row {row} has {found} fields but the header has {expected}")]
    RowTooLong {
        row: u32,
        expected: usize,
        found: usize,
    },

    #[error("failed to read csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write spreadsheet: {0}")]
    Xlsx(#[from] XlsxError),

    #[error(transparent)]
    Io(#[from] io::Error),
}
