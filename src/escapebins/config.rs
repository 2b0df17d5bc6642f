use crate::error::{EscapeBinsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "bins_json/gtfobins.json";
const DEFAULT_REPORT_FILE: &str = "gtfobins_report.md";
const DEFAULT_WIDTH: usize = 80;

/// Environment variable overriding the data file location.
pub const DATA_ENV: &str = "ESCAPEBINS_DATA";
/// Environment variable overriding the directory `config.json` is read from.
pub const CONFIG_DIR_ENV: &str = "ESCAPEBINS_CONFIG_DIR";

/// Configuration for escapebins, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EscapeBinsConfig {
    /// Path to the JSON knowledge base, relative paths resolve against the working directory
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Default report output when `--output` is not given
    #[serde(default = "default_report_file")]
    pub report_file: String,

    /// Columns assumed when the terminal width cannot be read
    #[serde(default = "default_width")]
    pub default_width: usize,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_report_file() -> String {
    DEFAULT_REPORT_FILE.to_string()
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}

impl Default for EscapeBinsConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            report_file: default_report_file(),
            default_width: DEFAULT_WIDTH,
        }
    }
}

impl EscapeBinsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: EscapeBinsConfig = serde_json::from_str(&content).map_err(|e| {
            EscapeBinsError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        Ok(config)
    }

    /// Applies environment overrides on top of the file values.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(DATA_ENV).filter(|v| !v.is_empty()) {
            self.data_file = PathBuf::from(path);
        }
        self
    }

    /// Width to lay out against when the terminal does not report one. Never zero.
    pub fn fallback_width(&self) -> usize {
        self.default_width.max(1)
    }
}
