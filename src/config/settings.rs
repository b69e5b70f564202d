//! User settings for the expense tracker
//!
//! Persisted as `config.json` in the base directory. Missing fields fall back
//! to their defaults so older files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency code applied when an expense is added without one
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Symbol used when printing money amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// File name used by `export` when no destination is given
    #[serde(default = "default_export_filename")]
    pub export_filename: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_export_filename() -> String {
    "expenses_export.csv".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_currency: default_currency(),
            currency_symbol: default_currency_symbol(),
            export_filename: default_export_filename(),
        }
    }
}

impl Settings {
    /// Load settings from disk, writing the defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let to_config = |e: ExpenseError| match e {
            ExpenseError::Storage(msg) => ExpenseError::Config(msg),
            other => other,
        };

        if paths.settings_file().exists() {
            return read_json(paths.settings_file()).map_err(to_config);
        }

        let settings = Self::default();
        settings.save(paths).map_err(to_config)?;
        tracing::info!(path = %paths.settings_file().display(), "wrote default settings");
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
