use std::path::Path;

/// Extensions offered in the target type list, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFormat {
    Csv,
    Txt,
    Xlsx,
}

impl TargetFormat {
    pub const ALL: [TargetFormat; 3] = [TargetFormat::Csv, TargetFormat::Txt, TargetFormat::Xlsx];

    pub fn extension(self) -> &'static str {
        match self {
            TargetFormat::Csv => ".csv",
            TargetFormat::Txt => ".txt",
            TargetFormat::Xlsx => ".xlsx",
        }
    }
}

/// Extension of `path` with its leading dot, as shown to the user.
pub fn source_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
}
