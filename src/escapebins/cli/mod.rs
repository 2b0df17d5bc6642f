//! # CLI Behavior
//!
//! One invocation runs exactly one mode, picked in this order:
//!
//! 1. **List** (`-l [CHAR]`): every binary grouped by first character, or one group.
//! 2. **Report** (`-r NAME...`): Markdown report written to `-o PATH` (default from config).
//! 3. **Lookup** (`BINARY`): every technique stored for that binary, shell code highlighted.
//! 4. **Help**: no arguments prints usage and reads nothing.
//!
//! ## Output
//!
//! Output goes through minijinja templates in `templates/` with named styles from
//! [`styles`]. Colors are used when stdout supports them and `--no-color` is absent; the
//! banner is only printed to an interactive terminal.
//!
//! ## Configuration
//!
//! Later sources win:
//!
//! 1. `config.json` in the platform config dir (or `$ESCAPEBINS_CONFIG_DIR`)
//! 2. `$ESCAPEBINS_DATA`
//! 3. `--data PATH`

mod commands;
mod highlight;
mod render;
mod setup;
mod styles;
mod templates;
mod terminal;

pub use commands::run;
