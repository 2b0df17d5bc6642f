//! # CLI Layer
//!
//! This module is **one possible UI client** for escapebins. The library underneath knows
//! nothing about terminals.
//!
//! The CLI layer is the **only** place that:
//! - Parses arguments
//! - Resolves configuration from files, environment and flags
//! - Writes to stdout and stderr
//! - Decides about colors, the banner and terminal width
//!
//! ## Flow
//!
//! 1. `run()` parses the arguments into a [`Mode`]. Help is printed right away, without
//!    touching configuration or data.
//! 2. `init_context()` builds the [`AppContext`]: resolved config, the API over the JSON data
//!    file and the renderer.
//! 3. One `handle_*()` function calls the API and prints the result.
//!
//! Not-found conditions come back as messages and are printed; the process still exits 0.
//! Only errors returned from the API (malformed data, unwritable report) reach `main`.

use super::render::Renderer;
use super::setup::{help_text, parse_cli, Cli, Mode};
use super::styles::StyleConfig;
use super::terminal::{resolve_width, TerminalWidth};
use console::Term;
use directories::ProjectDirs;
use escapebins::api::{CmdResult, EscapeBinsApi};
use escapebins::config::{EscapeBinsConfig, CONFIG_DIR_ENV};
use escapebins::error::Result;
use escapebins::store::fs::JsonFileSource;
use std::path::PathBuf;

struct AppContext {
    api: EscapeBinsApi<JsonFileSource>,
    config: EscapeBinsConfig,
    renderer: Renderer,
    interactive: bool,
}

pub fn run() -> Result<()> {
    let cli = parse_cli();

    let mode = cli.mode();
    if mode == Mode::Help {
        print!("{}", help_text());
        return Ok(());
    }

    let ctx = init_context(&cli)?;

    match mode {
        Mode::List(filter) => handle_list(&ctx, filter),
        Mode::Report(names) => handle_report(&ctx, &names, cli.output.as_deref()),
        Mode::Lookup(binary) => handle_lookup(&ctx, &binary),
        Mode::Help => Ok(()),
    }
}

fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "escapebins", "escapebins").map(|dirs| dirs.config_dir().to_path_buf())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = match config_dir() {
        Some(dir) => EscapeBinsConfig::load(&dir)?,
        None => EscapeBinsConfig::default(),
    };
    let mut config = config.with_env_overrides(|key| std::env::var(key).ok());
    if let Some(path) = &cli.data {
        config.data_file = path.clone();
    }
    log::debug!("using data file {}", config.data_file.display());

    let api = EscapeBinsApi::new(JsonFileSource::new(&config.data_file));
    let renderer = Renderer::new(StyleConfig::detect(cli.no_color));

    Ok(AppContext {
        api,
        config,
        renderer,
        interactive: Term::stdout().is_term(),
    })
}

fn print_banner(ctx: &AppContext) {
    if ctx.interactive {
        print!("{}", ctx.renderer.render_banner());
    }
}

fn print_messages(ctx: &AppContext, result: &CmdResult) {
    print!("{}", ctx.renderer.render_messages(&result.messages));
}

fn handle_lookup(ctx: &AppContext, binary: &str) -> Result<()> {
    print_banner(ctx);
    let result = ctx.api.lookup(binary)?;
    if let Some(entry) = &result.entry {
        print!("{}", ctx.renderer.render_entry(entry));
    }
    print_messages(ctx, &result);
    Ok(())
}

fn handle_list(ctx: &AppContext, filter: Option<char>) -> Result<()> {
    print_banner(ctx);
    let width = resolve_width(&TerminalWidth, ctx.config.fallback_width());
    let result = ctx.api.list(filter, width)?;
    if let Some(listing) = &result.listing {
        print!("{}", ctx.renderer.render_listing(listing));
    }
    print_messages(ctx, &result);
    Ok(())
}

fn handle_report(ctx: &AppContext, names: &[String], output: Option<&str>) -> Result<()> {
    let output = output.unwrap_or(&ctx.config.report_file);
    let result = ctx.api.report(names, output)?;
    print_messages(ctx, &result);
    Ok(())
}
