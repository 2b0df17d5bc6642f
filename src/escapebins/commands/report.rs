//! Markdown report for a chosen set of binaries.
//!
//! The document layout is a fixed contract (heading levels, emphasis for descriptions,
//! `bash` fences for code):
//!
//! ```text
//! # GTFOBins Analysis Report
//! Generated on: 2024-01-15 14:30:00
//!
//! ## Statistics
//! - Total Binaries: 1
//! - Total Functions: 2
//! - Categories: 2
//!
//! ## Category Distribution
//! shell: 1, sudo: 1
//!
//! ## Detailed Analysis
//!
//! ### Binary: find
//! _description_
//!
//! #### SHELL
//! ...
//! ```
//!
//! [`MarkdownReport`] is a pure function of the selected entries and the generation time, so
//! two builds from the same input differ only in the `Generated on` line.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{EscapeBinsError, Result};
use crate::model::{Catalog, Entry};
use chrono::NaiveDateTime;
use std::fmt;
use std::fs;
use std::path::PathBuf;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const MARKDOWN_EXT: &str = ".md";

/// Aggregate counts over the report set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub total_binaries: usize,
    pub total_functions: usize,
    /// Category name to cumulative function count, in first-seen order.
    pub categories: Vec<(String, usize)>,
}

impl ReportStats {
    pub fn compute(entries: &[Entry]) -> Self {
        let mut stats = ReportStats {
            total_binaries: entries.len(),
            ..Default::default()
        };

        for entry in entries {
            for category in &entry.functions {
                let count = category.functions.len();
                stats.total_functions += count;
                match stats
                    .categories
                    .iter_mut()
                    .find(|(name, _)| *name == category.name)
                {
                    Some((_, total)) => *total += count,
                    None => stats.categories.push((category.name.clone(), count)),
                }
            }
        }

        stats
    }

    /// One-line `name: count` summary, comma separated.
    pub fn distribution(&self) -> String {
        self.categories
            .iter()
            .map(|(name, count)| format!("{}: {}", name, count))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A Markdown document over a set of entries. Render it with `to_string()`.
pub struct MarkdownReport<'a> {
    entries: &'a [Entry],
    stats: ReportStats,
    generated_at: NaiveDateTime,
}

impl<'a> MarkdownReport<'a> {
    pub fn new(entries: &'a [Entry], generated_at: NaiveDateTime) -> Self {
        Self {
            entries,
            stats: ReportStats::compute(entries),
            generated_at,
        }
    }

    fn write_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# GTFOBins Analysis Report")?;
        writeln!(
            f,
            "Generated on: {}",
            self.generated_at.format(TIMESTAMP_FORMAT)
        )?;
        writeln!(f)?;
        writeln!(f, "## Statistics")?;
        writeln!(f, "- Total Binaries: {}", self.stats.total_binaries)?;
        writeln!(f, "- Total Functions: {}", self.stats.total_functions)?;
        writeln!(f, "- Categories: {}", self.stats.categories.len())?;
        writeln!(f)?;
        writeln!(f, "## Category Distribution")?;
        writeln!(f, "{}", self.stats.distribution())?;
        writeln!(f)?;
        writeln!(f, "## Detailed Analysis")
    }

    fn write_entry(f: &mut fmt::Formatter<'_>, entry: &Entry) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "### Binary: {}", entry.name)?;
        if let Some(description) = non_empty(&entry.description) {
            writeln!(f, "_{}_", description)?;
        }

        for category in &entry.functions {
            writeln!(f)?;
            writeln!(f, "#### {}", category.name.to_uppercase())?;
            for function in &category.functions {
                if let Some(description) = non_empty(&function.description) {
                    writeln!(f)?;
                    writeln!(f, "_{}_", description)?;
                }
                writeln!(f)?;
                writeln!(f, "```bash")?;
                writeln!(f, "{}", function.code)?;
                writeln!(f, "```")?;
            }
        }
        Ok(())
    }
}

/// Empty descriptions are left out, as in the terminal view.
fn non_empty(description: &Option<String>) -> Option<&str> {
    description.as_deref().filter(|d| !d.is_empty())
}

impl fmt::Display for MarkdownReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_summary(f)?;
        for entry in self.entries {
            Self::write_entry(f, entry)?;
        }
        Ok(())
    }
}

/// Appends `.md` unless the name already ends with it.
pub fn normalize_output_path(output: &str) -> PathBuf {
    if output.ends_with(MARKDOWN_EXT) {
        PathBuf::from(output)
    } else {
        PathBuf::from(format!("{}{}", output, MARKDOWN_EXT))
    }
}

/// Resolves requested names against the catalog, in request order and without repeats.
/// Returns the matched entries and the names that were not found.
pub fn select_entries(catalog: &Catalog, names: &[String]) -> (Vec<Entry>, Vec<String>) {
    let mut selected: Vec<Entry> = Vec::new();
    let mut missing: Vec<String> = Vec::new();

    for name in names {
        if selected.iter().any(|e| &e.name == name) || missing.contains(name) {
            continue;
        }
        match catalog.get(name) {
            Some(entry) => selected.push(entry.clone()),
            None => missing.push(name.clone()),
        }
    }

    (selected, missing)
}

pub fn run(
    catalog: &Catalog,
    names: &[String],
    output: &str,
    generated_at: NaiveDateTime,
) -> Result<CmdResult> {
    let (entries, missing) = select_entries(catalog, names);

    let mut result = CmdResult::default();
    for name in missing {
        result.add_message(CmdMessage::warning(
            EscapeBinsError::NotFound(name).to_string(),
        ));
    }

    if entries.is_empty() {
        result.add_message(CmdMessage::info(
            "No matching binaries, report not written.",
        ));
        return Ok(result);
    }

    let report = MarkdownReport::new(&entries, generated_at);
    let path = normalize_output_path(output);
    fs::write(&path, report.to_string())?;
    log::debug!(
        "wrote report for {} binaries to {}",
        entries.len(),
        path.display()
    );

    result.add_message(CmdMessage::success(format!(
        "Markdown report generated: {}",
        path.display()
    )));
    Ok(result.with_report_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Function;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn find_entry() -> Entry {
        Entry::new("find")
            .with_description("Find files")
            .with_category(
                "shell",
                vec![Function::new("find . -exec /bin/sh \\; -quit")
                    .with_description("Spawn an interactive shell")],
            )
            .with_category("sudo", vec![Function::new("sudo find . -exec /bin/sh \\; -quit")])
    }

    fn awk_entry() -> Entry {
        Entry::new("awk").with_category(
            "shell",
            vec![
                Function::new("awk 'BEGIN {system(\"/bin/sh\")}'"),
                Function::new("awk -f script.awk"),
            ],
        )
    }

    fn catalog() -> Catalog {
        vec![find_entry(), awk_entry()].into_iter().collect()
    }

    #[test]
    fn test_stats_merge_categories_across_binaries() {
        let stats = ReportStats::compute(&[find_entry(), awk_entry()]);
        assert_eq!(stats.total_binaries, 2);
        assert_eq!(stats.total_functions, 4);
        assert_eq!(
            stats.categories,
            vec![("shell".to_string(), 3), ("sudo".to_string(), 1)]
        );
        let summed: usize = stats.categories.iter().map(|(_, c)| c).sum();
        assert_eq!(summed, stats.total_functions);
        assert_eq!(stats.distribution(), "shell: 3, sudo: 1");
    }

    #[test]
    fn test_stats_empty() {
        let stats = ReportStats::compute(&[]);
        assert_eq!(stats, ReportStats::default());
        assert_eq!(stats.distribution(), "");
    }

    #[test]
    fn test_markdown_golden() {
        let entries = vec![find_entry()];
        let report = MarkdownReport::new(&entries, at(14, 30, 0)).to_string();
        let expected = "# GTFOBins Analysis Report
Generated on: 2024-01-15 14:30:00

## Statistics
- Total Binaries: 1
- Total Functions: 2
- Categories: 2

## Category Distribution
shell: 1, sudo: 1

## Detailed Analysis

### Binary: find
_Find files_

#### SHELL

_Spawn an interactive shell_

```bash
find . -exec /bin/sh \\; -quit
```

#### SUDO

```bash
sudo find . -exec /bin/sh \\; -quit
```
";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_markdown_skips_empty_descriptions() {
        let entries = vec![Entry::new("vi")
            .with_description("")
            .with_category("shell", vec![Function::new("vi -c ':!/bin/sh'").with_description("")])];
        let report = MarkdownReport::new(&entries, at(14, 30, 0)).to_string();
        assert!(!report.contains("__"));
        assert!(report.ends_with("### Binary: vi\n\n#### SHELL\n\n```bash\nvi -c ':!/bin/sh'\n```\n"));
    }

    #[test]
    fn test_markdown_differs_only_in_timestamp() {
        let entries = vec![find_entry(), awk_entry()];
        let first = MarkdownReport::new(&entries, at(10, 0, 0)).to_string();
        let second = MarkdownReport::new(&entries, at(11, 59, 59)).to_string();
        assert_ne!(first, second);

        let strip = |s: &str| {
            s.lines()
                .filter(|l| !l.starts_with("Generated on:"))
                .collect::<Vec<_>>()
                .join("\n")
        };
        assert_eq!(strip(&first), strip(&second));
    }

    #[test]
    fn test_normalize_output_path() {
        assert_eq!(normalize_output_path("foo"), PathBuf::from("foo.md"));
        assert_eq!(normalize_output_path("foo.md"), PathBuf::from("foo.md"));
        assert_eq!(
            normalize_output_path("out/report.txt"),
            PathBuf::from("out/report.txt.md")
        );
    }

    #[test]
    fn test_select_entries_keeps_request_order_and_dedups() {
        let names: Vec<String> = ["find", "nope", "awk", "find", "nope"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let (entries, missing) = select_entries(&catalog(), &names);
        let selected: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(selected, vec!["find", "awk"]);
        assert_eq!(missing, vec!["nope".to_string()]);
    }

    #[test]
    fn test_run_writes_file_and_warns_on_missing() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("report");
        let names = vec!["awk".to_string(), "ghost".to_string()];

        let result = run(&catalog(), &names, output.to_str().unwrap(), at(9, 0, 0)).unwrap();

        let written = dir.path().join("report.md");
        assert_eq!(result.report_path.as_deref(), Some(written.as_path()));
        let content = fs::read_to_string(&written).unwrap();
        assert!(content.contains("### Binary: awk"));
        assert!(!content.contains("ghost"));

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "Binary not found: ghost");
        assert_eq!(result.messages[1].level, MessageLevel::Success);
        assert!(result.messages[1].content.ends_with("report.md"));
    }

    #[test]
    fn test_run_without_matches_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("empty.md");
        let names = vec!["ghost".to_string()];

        let result = run(&catalog(), &names, output.to_str().unwrap(), at(9, 0, 0)).unwrap();

        assert!(result.report_path.is_none());
        assert!(!output.exists());
        assert_eq!(result.messages.len(), 2);
    }
}
