#![windows_subsystem = "windows"]
#![cfg_attr(not(windows), allow(dead_code))]

use config::AppConfig;

mod config;
mod converter;
mod error;
mod format;
#[cfg(windows)]
mod gui;
mod logging;
mod shell;

fn main() -> eyre::Result<()> {
    logging::init_log()?;

    run(AppConfig::default())
}

#[cfg(windows)]
fn run(config: AppConfig) -> eyre::Result<()> {
    gui::create_gui(config)
}

#[cfg(not(windows))]
fn run(_config: AppConfig) -> eyre::Result<()> {
    eyre::bail!("the converter window is only available on Windows")
}
