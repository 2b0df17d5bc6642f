use clap::{ArgAction, CommandFactory, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "escapebins",
    bin_name = "escapebins",
    version = env!("CARGO_PKG_VERSION"),
    disable_version_flag = true
)]
#[command(
    about = "Command-line tool for searching and displaying GTFOBins entries",
    long_about = None
)]
pub struct Cli {
    /// Binary to look up
    pub binary: Option<String>,

    /// List all binaries, or only those starting with CHAR
    #[arg(short, long, num_args = 0..=1, value_name = "CHAR")]
    pub list: Option<Option<char>>,

    /// Generate a Markdown report for the given binaries
    #[arg(short, long, num_args = 1.., value_name = "NAME")]
    pub report: Option<Vec<String>>,

    /// Output file for --report (".md" is appended when missing)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Use this data file instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}

/// What a single invocation does. Exactly one mode runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    List(Option<char>),
    Report(Vec<String>),
    Lookup(String),
    Help,
}

impl Cli {
    /// Picks the mode: list wins over report, report over lookup, and help is the fallback.
    pub fn mode(&self) -> Mode {
        if let Some(filter) = self.list {
            Mode::List(filter)
        } else if let Some(names) = self.report.as_ref().filter(|n| !n.is_empty()) {
            Mode::Report(names.clone())
        } else if let Some(binary) = &self.binary {
            Mode::Lookup(binary.clone())
        } else {
            Mode::Help
        }
    }
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub fn help_text() -> String {
    Cli::command().render_help().to_string()
}
