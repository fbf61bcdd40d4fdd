//! Logging setup

use env_logger::{Target, WriteStyle};
use log::LevelFilter;
use std::{
    env,
    fs::{self, File, OpenOptions},
    io,
    path::{Path, PathBuf},
};

const APP_FOLDER: &str = "file-converter";
const LOG_FILE: &str = "file-converter.log";

/// Initializes `env_logger`: this crate logs at `Info` unless `RUST_LOG` says otherwise.
///
/// The window has no console, so records go to a log file under
/// `%LOCALAPPDATA%` when that folder is known and to stderr otherwise.
pub fn init_log() -> eyre::Result<()> {
    let mut builder = env_logger::builder();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module("file_converter", LevelFilter::Info)
        .parse_default_env();

    if let Some(app_data) = env::var_os("LOCALAPPDATA") {
        let file = open_log_file(Path::new(&app_data))?;
        builder
            .target(Target::Pipe(Box::new(file)))
            .write_style(WriteStyle::Never);
    }

    builder.try_init()?;
    Ok(())
}

fn log_file_path(app_data: &Path) -> PathBuf {
    app_data.join(APP_FOLDER).join(LOG_FILE)
}

/// Opens the log file for appending, creating its folder on first use.
fn open_log_file(app_data: &Path) -> io::Result<File> {
    let path = log_file_path(app_data);
    if let Some(folder) = path.parent() {
        fs::create_dir_all(folder)?;
    }

    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn log_file_lives_in_app_folder() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = open_log_file(dir.path()).unwrap();
        writeln!(file, "first").unwrap();
        drop(file);

        let mut file = open_log_file(dir.path()).unwrap();
        writeln!(file, "second").unwrap();
        drop(file);

        let path = dir.path().join("file-converter").join("file-converter.log");
        assert_eq!(log_file_path(dir.path()), path);
        assert_eq!(fs::read_to_string(path).unwrap(), "first\nsecond\n");
    }
}
