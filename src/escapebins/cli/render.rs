//! # Rendering Module
//!
//! Turns API results into terminal text. Layout work that needs Unicode awareness (column
//! padding) and shell highlighting happen here in Rust; the templates in
//! [`super::templates`] only arrange lines and name styles.
//!
//! Every function takes a [`StyleConfig`], so the same code path produces colored output for
//! a terminal and plain text for pipes and tests.

use super::highlight::highlight;
use super::styles::{names, StyleConfig};
use super::templates::{self, names as tmpl};
use escapebins::api::{CmdMessage, LaidOutGroup, Listing, MessageLevel};
use escapebins::model::Entry;
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Closing line after a lookup or a listing.
pub const SIGNATURE: &str = "Bad SUIDs, good exploits.";
pub const DIVIDER: &str = " - ";
pub const DIVIDER_REPEAT: usize = 10;
/// Indentation of listing rows.
const ROW_INDENT: &str = "  ";
const CELL_GAP: &str = "  ";

#[derive(Serialize)]
struct FunctionData {
    description: Option<String>,
    code: String,
}

#[derive(Serialize)]
struct CategoryData {
    title: String,
    functions: Vec<FunctionData>,
}

#[derive(Serialize)]
struct EntryData {
    description: Option<String>,
    categories: Vec<CategoryData>,
    divider: String,
}

#[derive(Serialize)]
struct GroupData {
    label: String,
    rows: Vec<String>,
}

#[derive(Serialize)]
struct ListingData {
    summary: String,
    total: usize,
    groups: Vec<GroupData>,
}

#[derive(Serialize)]
struct MessageData {
    mark: &'static str,
    mark_style: &'static str,
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct BannerData {
    version: &'static str,
}

/// A minijinja environment with every CLI template and the `style` filter registered.
pub struct Renderer {
    env: Environment<'static>,
    style: StyleConfig,
}

impl Renderer {
    pub fn new(style: StyleConfig) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);

        let filter_style = style.clone();
        env.add_filter("style", move |value: Value, name: String| -> String {
            filter_style.paint(&name, &value.to_string())
        });

        for &(name, source) in templates::ALL {
            if let Err(e) = env.add_template(name, source) {
                log::error!("template {} failed to compile: {}", name, e);
            }
        }

        Self { env, style }
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> String {
        self.env
            .get_template(name)
            .and_then(|t| t.render(data))
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    /// Full view of one binary followed by the signature line.
    pub fn render_entry(&self, entry: &Entry) -> String {
        let categories = entry
            .functions
            .iter()
            .map(|category| CategoryData {
                title: category.name.to_uppercase(),
                functions: category
                    .functions
                    .iter()
                    .map(|f| FunctionData {
                        description: f.description.clone(),
                        code: highlight(f.code.trim(), &self.style),
                    })
                    .collect(),
            })
            .collect();

        let data = EntryData {
            description: entry.description.clone(),
            categories,
            divider: DIVIDER.repeat(DIVIDER_REPEAT),
        };

        let mut out = self.render(tmpl::ENTRY, &data);
        out.push('\n');
        out.push_str(&self.render_signature());
        out
    }

    /// Grouped, column-aligned listing followed by the signature line.
    pub fn render_listing(&self, listing: &Listing) -> String {
        let groups = listing
            .groups
            .iter()
            .map(|LaidOutGroup { group, layout }| GroupData {
                label: group.key.label(),
                rows: layout
                    .rows(&group.names)
                    .map(|row| format_row(row, layout.column_width))
                    .collect(),
            })
            .collect();

        let summary = match listing.filter {
            Some(key) => format!("Available binaries starting with '{}'", key.label()),
            None => "Available binaries".to_string(),
        };

        let data = ListingData {
            summary,
            total: listing.total,
            groups,
        };

        let mut out = self.render(tmpl::LISTING, &data);
        out.push_str(&self.render_signature());
        out
    }

    /// `[ * ] ...` lines for info and success, `[ - ] ...` for warnings and errors.
    pub fn render_messages(&self, messages: &[CmdMessage]) -> String {
        if messages.is_empty() {
            return String::new();
        }
        let data = MessagesData {
            messages: messages.iter().map(message_data).collect(),
        };
        self.render(tmpl::MESSAGES, &data)
    }

    pub fn render_banner(&self) -> String {
        let data = BannerData {
            version: env!("CARGO_PKG_VERSION"),
        };
        self.render(tmpl::BANNER, &data)
    }

    fn render_signature(&self) -> String {
        let mut out = self.render_messages(&[CmdMessage::info(SIGNATURE)]);
        out.push('\n');
        out
    }
}

fn message_data(message: &CmdMessage) -> MessageData {
    let (mark, mark_style, style) = match message.level {
        MessageLevel::Info => ("*", names::MARK_OK, names::INFO),
        MessageLevel::Success => ("*", names::MARK_OK, names::SUCCESS),
        MessageLevel::Warning => ("-", names::MARK_FAIL, names::WARNING),
        MessageLevel::Error => ("-", names::MARK_FAIL, names::ERROR),
    };
    MessageData {
        mark,
        mark_style,
        content: message.content.clone(),
        style,
    }
}

/// One listing row: cells padded to `column_width`, gap separated, no trailing blanks.
fn format_row(names: &[String], column_width: usize) -> String {
    let cells: Vec<String> = names
        .iter()
        .map(|name| {
            let pad = column_width.saturating_sub(name.width());
            format!("{}{}", name, " ".repeat(pad))
        })
        .collect();
    format!("{}{}", ROW_INDENT, cells.join(CELL_GAP))
        .trim_end()
        .to_string()
}
