use crate::format::TargetFormat;

/// Static settings of the converter window.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: &'static str,
    pub size: (i32, i32),
    pub dialog_title: &'static str,
    /// Folder the file dialog opens in.
    pub initial_dir: String,
    /// Filters in the file dialog's `Name(pattern)|Name(pattern)` syntax.
    pub filters: &'static str,
    pub formats: &'static [TargetFormat],
    pub default_format: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            title: "File Converter",
            size: (500, 300),
            dialog_title: "Select a file",
            initial_dir: file_system_root(),
            filters: "Text files(*.txt)|All files(*.*)",
            formats: &TargetFormat::ALL,
            default_format: 0,
        }
    }
}

impl AppConfig {
    /// Labels of the target type list, in list order.
    pub fn format_labels(&self) -> Vec<String> {
        self.formats
            .iter()
            .map(|format| format.extension().to_owned())
            .collect()
    }
}

/// Root of the system drive, e.g. `C:\` on Windows.
#[cfg(windows)]
fn file_system_root() -> String {
    let drive = std::env::var("SystemDrive").unwrap_or_else(|_| "C:".to_owned());
    format!("{drive}\\")
}

#[cfg(not(windows))]
fn file_system_root() -> String {
    "/".to_owned()
}
