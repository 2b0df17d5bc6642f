use super::DataSource;
use crate::error::Result;
use crate::model::Catalog;

/// Serves a catalog that already lives in memory. Used by tests.
#[derive(Default)]
pub struct InMemorySource {
    catalog: Catalog,
}

impl InMemorySource {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl DataSource for InMemorySource {
    fn load(&self) -> Result<Catalog> {
        Ok(self.catalog.clone())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
