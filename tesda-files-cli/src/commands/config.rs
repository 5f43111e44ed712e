use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::settings::{self, DbPathSource, Settings};
use crate::CliError;

/// Show the settings file and the database path that commands will use.
pub(crate) fn run_config_show(settings: &Settings, db_path: &Path, source: DbPathSource) {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "tesda-files Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    match &settings.store.path {
        Some(saved) => log::info!("  Saved db path: {}", saved.display()),
        None => log::info!(
            "  Saved db path: {}",
            "(not set)".if_supports_color(Stdout, |t| t.dimmed())
        ),
    }

    log::info!(
        "  Database:      {} {}",
        db_path.display().if_supports_color(Stdout, |t| t.cyan()),
        format!("(from {source})").if_supports_color(Stdout, |t| t.dimmed()),
    );
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

/// Save the default database path.
pub(crate) fn run_config_set_db(path: PathBuf) -> Result<(), CliError> {
    let path = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut current = settings::load_settings();
    current.store.path = Some(path.clone());
    settings::save_settings(&current)
        .map_err(|e| CliError::config(format!("Failed to save settings: {e}")))?;

    log::info!("Database path set to {}", path.display());
    Ok(())
}

/// Remove the saved database path.
pub(crate) fn run_config_clear_db() -> Result<(), CliError> {
    let mut current = settings::load_settings();
    if current.store.path.take().is_none() {
        log::info!("No database path saved. Nothing to clear.");
        return Ok(());
    }
    settings::save_settings(&current)
        .map_err(|e| CliError::config(format!("Failed to save settings: {e}")))?;

    log::info!(
        "Database path cleared; using {}",
        settings::default_db_path().display()
    );
    Ok(())
}
