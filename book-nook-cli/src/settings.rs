//! Library file path resolution.
//!
//! Priority: `--file` flag > `BOOK_NOOK_LIBRARY` env var > config file >
//! `./library.json`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_LIBRARY_FILE: &str = "library.json";
pub(crate) const LIBRARY_ENV_VAR: &str = "BOOK_NOOK_LIBRARY";

/// Where the resolved library path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PathSource {
    /// Given on the command line.
    CliFlag,
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Hard-coded default value.
    Default,
}

impl std::fmt::Display for PathSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CliFlag => write!(f, "--file flag"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// TOML config file format.
#[derive(Debug, Deserialize, Serialize)]
struct ConfigFile {
    library: Option<LibraryConfig>,
}

#[derive(Debug, Deserialize, Serialize)]
struct LibraryConfig {
    file: Option<PathBuf>,
}

/// Return the path to the config file.
pub(crate) fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("book-nook").join("config.toml"))
}

fn load_config_file() -> Option<LibraryConfig> {
    let path = config_path()?;
    let content = std::fs::read_to_string(&path).ok()?;
    let config: ConfigFile = toml::from_str(&content).ok()?;
    config.library
}

/// Resolve the library file path and report where it came from.
pub(crate) fn resolve_library_path(flag: Option<PathBuf>) -> (PathBuf, PathSource) {
    if let Some(path) = flag {
        return (path, PathSource::CliFlag);
    }
    if let Ok(path) = std::env::var(LIBRARY_ENV_VAR) {
        return (PathBuf::from(path), PathSource::EnvVar(LIBRARY_ENV_VAR));
    }
    if let Some(file) = load_config_file().and_then(|c| c.file) {
        return (file, PathSource::ConfigFile);
    }
    (PathBuf::from(DEFAULT_LIBRARY_FILE), PathSource::Default)
}
