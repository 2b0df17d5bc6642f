use super::DataSource;
use crate::error::{EscapeBinsError, Result};
use crate::model::{Catalog, Entry};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Loads the catalog from a JSON file keyed by binary name.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for JsonFileSource {
    fn load(&self) -> Result<Catalog> {
        if !self.path.is_file() {
            return Err(EscapeBinsError::DataUnavailable(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            log::debug!("failed to read {}: {}", self.path.display(), e);
            EscapeBinsError::DataUnavailable(self.path.clone())
        })?;

        let raw: BTreeMap<String, Entry> =
            serde_json::from_str(&content).map_err(|source| EscapeBinsError::DataMalformed {
                path: self.path.clone(),
                source,
            })?;

        let catalog = Catalog::from_map(raw);
        log::debug!(
            "loaded {} binaries from {}",
            catalog.len(),
            self.path.display()
        );
        Ok(catalog)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
