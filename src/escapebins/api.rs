//! # API Facade
//!
//! The single entry point for every escapebins operation, whatever the UI.
//!
//! The facade:
//! - **Loads** the [`Catalog`] from its [`DataSource`], exactly once per call
//! - **Dispatches** to the matching command in [`crate::commands`]
//! - **Returns structured types** (`Result<CmdResult>`), never strings for the terminal
//!
//! A missing data file is reported as an error message on the result, not as an `Err`: the
//! caller prints it and exits normally. A malformed data file is returned as an `Err` since
//! nothing useful can be done without the catalog.
//!
//! `EscapeBinsApi<S: DataSource>` is generic over the source:
//! - Production: `EscapeBinsApi<JsonFileSource>`
//! - Testing: `EscapeBinsApi<InMemorySource>`

use crate::commands;
use crate::error::Result;
use crate::model::Catalog;
use crate::store::DataSource;
use chrono::{Local, NaiveDateTime};

pub use crate::commands::list::{CatalogGroup, ColumnLayout, GroupKey, LaidOutGroup, Listing};
pub use crate::commands::report::{MarkdownReport, ReportStats};
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct EscapeBinsApi<S: DataSource> {
    source: S,
}

impl<S: DataSource> EscapeBinsApi<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Render-ready data for one binary, or a not-found message.
    pub fn lookup(&self, name: &str) -> Result<CmdResult> {
        self.with_catalog(|catalog| Ok(commands::lookup::run(catalog, name)))
    }

    /// Grouped catalog, optionally restricted to the group `filter` selects.
    pub fn list(&self, filter: Option<char>, display_width: usize) -> Result<CmdResult> {
        self.with_catalog(|catalog| Ok(commands::list::run(catalog, filter, display_width)))
    }

    /// Writes a Markdown report for `names` to `output`, stamped with the local time.
    pub fn report(&self, names: &[String], output: &str) -> Result<CmdResult> {
        self.report_at(names, output, Local::now().naive_local())
    }

    pub fn report_at(
        &self,
        names: &[String],
        output: &str,
        generated_at: NaiveDateTime,
    ) -> Result<CmdResult> {
        self.with_catalog(|catalog| commands::report::run(catalog, names, output, generated_at))
    }

    fn with_catalog<F>(&self, f: F) -> Result<CmdResult>
    where
        F: FnOnce(&Catalog) -> Result<CmdResult>,
    {
        match self.source.load() {
            Ok(catalog) => f(&catalog),
            Err(e) if e.is_recoverable() => {
                log::debug!("data source {} unavailable", self.source.describe());
                Ok(CmdResult::default().with_message(CmdMessage::error(e.to_string())))
            }
            Err(e) => Err(e),
        }
    }
}
