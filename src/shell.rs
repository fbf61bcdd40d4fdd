use crate::{config::AppConfig, converter, error::ConvertError, format::TargetFormat};
use std::path::{Path, PathBuf};

const NO_FILE_LABEL: &str = "Choose file";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Idle,
    FileChosen,
    Converting,
    Done,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Result of one convert request, shown to the user as a modal notice.
#[derive(Debug)]
pub enum Outcome {
    NoFileSelected,
    NoTypeSelected,
    Converted(PathBuf),
    Failed(ConvertError),
}

impl Outcome {
    pub fn kind(&self) -> NoticeKind {
        match self {
            Outcome::NoFileSelected | Outcome::NoTypeSelected => NoticeKind::Error,
            Outcome::Converted(_) | Outcome::Failed(_) => NoticeKind::Info,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::NoFileSelected => "Please select a file!",
            Outcome::NoTypeSelected => "Please select an option!",
            Outcome::Converted(_) => "Conversion successfully done!",
            Outcome::Failed(_) => "Conversion not successfully done!",
        }
    }
}

/// Selection state behind the converter window, independent of any toolkit.
#[derive(Debug)]
pub struct ConverterShell {
    formats: &'static [TargetFormat],
    path: Option<PathBuf>,
    selection: Option<usize>,
    state: ShellState,
}

impl ConverterShell {
    pub fn new(config: &AppConfig) -> ConverterShell {
        ConverterShell {
            formats: config.formats,
            path: None,
            selection: Some(config.default_format),
            state: ShellState::Idle,
        }
    }

    /// Replaces the chosen file. An empty or missing path clears the choice.
    pub fn choose_file(&mut self, path: Option<PathBuf>) {
        self.path = path.filter(|path| !path.as_os_str().is_empty());
        self.state = match self.path {
            Some(_) => ShellState::FileChosen,
            None => ShellState::Idle,
        };
    }

    pub fn select_type(&mut self, index: Option<usize>) {
        self.selection = index;
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn selected_format(&self) -> Option<TargetFormat> {
        self.selection
            .and_then(|index| self.formats.get(index))
            .copied()
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    /// Text for the file label: the chosen file's name.
    pub fn file_label(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| NO_FILE_LABEL.to_owned())
    }

    pub fn convert(&mut self) -> Outcome {
        let Some(path) = self.path.clone() else {
            log::warn!("convert requested without a file");
            return Outcome::NoFileSelected;
        };
        let Some(format) = self.selected_format() else {
            log::warn!("convert requested without a target type");
            return Outcome::NoTypeSelected;
        };

        self.state = ShellState::Converting;
        match converter::convert(&path, format) {
            Ok(output) => {
                log::info!("converted {} to {}", path.display(), output.display());
                self.state = ShellState::Done;
                Outcome::Converted(output)
            }
            Err(err) => {
                log::error!("failed to convert {}: {err}", path.display());
                self.state = ShellState::Failed;
                Outcome::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn shell() -> ConverterShell {
        ConverterShell::new(&AppConfig::default())
    }

    #[test]
    fn starts_idle_with_first_type_selected() {
        let shell = shell();
        assert_eq!(shell.state(), ShellState::Idle);
        assert_eq!(shell.path(), None);
        assert_eq!(shell.selected_format(), Some(TargetFormat::Csv));
        assert_eq!(shell.file_label(), "Choose file");
    }

    #[test]
    fn browsing_sets_and_clears_the_file() {
        let mut shell = shell();
        shell.choose_file(Some(PathBuf::from("/home/user/data.csv")));
        assert_eq!(shell.state(), ShellState::FileChosen);
        assert_eq!(shell.file_label(), "data.csv");

        shell.choose_file(Some(PathBuf::new()));
        assert_eq!(shell.state(), ShellState::Idle);
        assert_eq!(shell.path(), None);
        assert_eq!(shell.file_label(), "Choose file");
    }

    #[test]
    fn convert_without_file_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell();
        shell.select_type(Some(2));

        let outcome = shell.convert();
        assert!(matches!(outcome, Outcome::NoFileSelected));
        assert_eq!(outcome.kind(), NoticeKind::Error);
        assert_eq!(outcome.message(), "Please select a file!");
        assert_eq!(shell.state(), ShellState::Idle);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn convert_without_type_reports_it() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("data.csv");
        fs::write(&source, "a,b\n1,2\n").unwrap();

        let mut shell = shell();
        shell.choose_file(Some(source.clone()));
        shell.select_type(None);
        let outcome = shell.convert();
        assert!(matches!(outcome, Outcome::NoTypeSelected));
        assert_eq!(outcome.message(), "Please select an option!");

        shell.select_type(Some(7));
        assert!(matches!(shell.convert(), Outcome::NoTypeSelected));
        assert_eq!(shell.state(), ShellState::FileChosen);
        assert!(!dir.path().join("data.xlsx").exists());
    }

    #[test]
    fn csv_to_xlsx_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("data.csv");
        fs::write(&source, "a,b\n1,2\n").unwrap();

        let mut shell = shell();
        shell.choose_file(Some(source));
        shell.select_type(Some(2));

        let outcome = shell.convert();
        assert_eq!(outcome.kind(), NoticeKind::Info);
        assert_eq!(outcome.message(), "Conversion successfully done!");
        match outcome {
            Outcome::Converted(path) => assert_eq!(path, dir.path().join("data.xlsx")),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(shell.state(), ShellState::Done);
        assert!(dir.path().join("data.xlsx").exists());
    }

    #[test]
    fn unsupported_pair_fails_and_shell_stays_usable() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("data.csv");
        fs::write(&source, "a,b\n1,2\n").unwrap();

        let mut shell = shell();
        shell.choose_file(Some(source));

        // default selection is .csv
        let outcome = shell.convert();
        assert!(matches!(
            outcome,
            Outcome::Failed(ConvertError::Unsupported { .. })
        ));
        assert_eq!(outcome.message(), "Conversion not successfully done!");
        assert_eq!(shell.state(), ShellState::Failed);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);

        shell.select_type(Some(2));
        assert!(matches!(shell.convert(), Outcome::Converted(_)));
        assert_eq!(shell.state(), ShellState::Done);
    }

    #[test]
    fn io_failures_share_the_generic_notice() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell();
        shell.choose_file(Some(dir.path().join("missing.csv")));
        shell.select_type(Some(2));

        let outcome = shell.convert();
        assert!(matches!(outcome, Outcome::Failed(ConvertError::Csv(_))));
        assert_eq!(outcome.message(), "Conversion not successfully done!");
    }
}
