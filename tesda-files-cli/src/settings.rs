//! Application settings and database path resolution.
//!
//! Settings live in `~/.config/tesda-files/settings.toml`:
//! ```toml
//! [store]
//! path = "/home/me/files.sqlite"
//! ```

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tesda_files_db::CONTAINER_NAME;

/// Environment variable naming the catalog database file.
pub(crate) const DB_ENV_VAR: &str = "TESDA_FILES_DB";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Settings {
    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct StoreSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Canonical path to the settings file.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("tesda-files").join("settings.toml")
}

/// Default catalog location: `<data dir>/tesda-files/tesda_files_db.sqlite`.
pub(crate) fn default_db_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("tesda-files")
        .join(format!("{CONTAINER_NAME}.sqlite"))
}

/// Load settings, returning defaults if missing or corrupt.
pub(crate) fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

pub(crate) fn load_settings_from(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Failed to parse settings at {}: {}", path.display(), e);
            Settings::default()
        }),
        Err(_) => Settings::default(),
    }
}

pub(crate) fn save_settings(settings: &Settings) -> io::Result<()> {
    save_settings_to(&settings_path(), settings)
}

/// Save settings atomically (write to temp, then rename).
pub(crate) fn save_settings_to(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(settings).map_err(io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, serialized)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Where the resolved database path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DbPathSource {
    Flag,
    Env,
    Settings,
    Default,
}

impl fmt::Display for DbPathSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Flag => "--db flag",
            Self::Env => DB_ENV_VAR,
            Self::Settings => "settings file",
            Self::Default => "default",
        };
        f.write_str(s)
    }
}

/// Resolve the catalog database path using a priority chain:
///
/// 1. `--db` flag
/// 2. `TESDA_FILES_DB` environment variable (ignored when empty)
/// 3. `store.path` in `settings.toml`
/// 4. [`default_db_path`]
pub(crate) fn resolve_db_path(
    flag: Option<PathBuf>,
    env: Option<OsString>,
    settings: &Settings,
) -> (PathBuf, DbPathSource) {
    if let Some(p) = flag {
        return (p, DbPathSource::Flag);
    }
    if let Some(p) = env.filter(|v| !v.is_empty()) {
        return (PathBuf::from(p), DbPathSource::Env);
    }
    if let Some(p) = &settings.store.path {
        return (p.clone(), DbPathSource::Settings);
    }
    (default_db_path(), DbPathSource::Default)
}
