//! # escapebins Architecture
//!
//! escapebins looks up a binary in a local GTFOBins-style knowledge base and shows the
//! techniques that abuse it: shells, file reads and writes, sudo and SUID tricks and so on.
//! It can also list every known binary and export a Markdown report for a chosen set.
//!
//! The crate is a UI-agnostic library with a thin terminal client on top.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, styles and highlights output           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Loads the catalog once per operation                     │
//! │  - Dispatches to commands, returns `Result<CmdResult>`      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Lookup, grouping + column layout, report statistics      │
//! │  - No I/O assumptions beyond writing the report file        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data Source (store/)                                       │
//! │  - `DataSource` trait                                       │
//! │  - JsonFileSource (production), InMemorySource (testing)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr, calls `std::process::exit`, or
//! assumes a terminal. Styling and terminal width are the CLI's business and reach the
//! layout code only as plain values.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Lookup, listing and report logic
//! - [`store`]: Data Source abstraction and implementations
//! - [`model`]: `Catalog`, `Entry`, `Category`, `Function`
//! - [`config`]: Configuration (data file location, defaults)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
