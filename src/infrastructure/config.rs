//! Optional defaults file

use crate::error::{PuddingError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the current directory when `PUDDING_CONFIG` is unset
pub const CONFIG_FILE_NAME: &str = ".pudding.toml";

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "PUDDING_CONFIG";

/// Defaults that apply when the matching command-line option is absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Comment symbol used by target files
    pub comment: Option<String>,
    /// Back up the target before changing it
    pub safe: Option<bool>,
    /// Patch file used when none is given on the command line
    pub patch: Option<PathBuf>,
}

impl Settings {
    /// Load from `$PUDDING_CONFIG`, else `.pudding.toml` in `dir`.
    ///
    /// A missing default file yields empty settings; a missing file named by
    /// the environment variable is an error.
    pub fn discover(dir: &Path) -> Result<Self> {
        if let Ok(explicit) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(explicit);
            if !path.is_file() {
                return Err(PuddingError::Config(format!(
                    "{} is set to '{}' but that file doesn't exist",
                    CONFIG_ENV,
                    path.display()
                )));
            }
            return Self::load_from_file(&path);
        }

        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load_from_file(&path)
        } else {
            Ok(Settings::default())
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| {
            PuddingError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}
