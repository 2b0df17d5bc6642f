//! # Data Source
//!
//! The knowledge base is a read-only mapping from binary name to [`Entry`](crate::model::Entry).
//! The [`DataSource`] trait hides where that mapping comes from:
//!
//! - [`fs::JsonFileSource`]: production source, one JSON file on local disk
//! - [`memory::InMemorySource`]: a prebuilt [`Catalog`] for tests
//!
//! A source is loaded in full, once per operation. There is no caching and no lazy or partial
//! loading: every lookup happens against the complete in-memory [`Catalog`].
//!
//! Failure modes:
//! - the backing file is missing or unreadable: [`EscapeBinsError::DataUnavailable`](crate::error::EscapeBinsError::DataUnavailable)
//! - the content does not parse into the expected shape: [`EscapeBinsError::DataMalformed`](crate::error::EscapeBinsError::DataMalformed)

use crate::error::Result;
use crate::model::Catalog;

pub mod fs;
pub mod memory;

/// Abstract interface for loading the knowledge base.
pub trait DataSource {
    /// Reads the whole catalog into memory.
    fn load(&self) -> Result<Catalog>;

    /// Human readable description of where the data comes from.
    fn describe(&self) -> String;
}
