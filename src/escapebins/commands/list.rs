//! Catalog listing: binaries grouped by first character and laid out in columns.
//!
//! Grouping rules:
//! - names starting with a digit share the synthetic `0-9` group
//! - names starting with a letter are grouped by that letter, lower-cased
//! - anything else lands in a trailing `other` group, so every name is listed exactly once
//!
//! Groups are ordered `0-9`, then letters, then `other`. Names inside a group keep their
//! lexicographic (case-sensitive) order.
//!
//! Each printed group gets its own column grid, sized from its own longest name.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::EscapeBinsError;
use crate::model::Catalog;
use std::collections::BTreeMap;
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Never lay out more than this many columns, however wide the terminal.
pub const MAX_COLUMNS: usize = 4;
/// Extra cells added to the longest name to get the column width.
pub const COLUMN_GAP: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    Digits,
    Letter(char),
    Other,
}

impl GroupKey {
    /// The group a binary name belongs to.
    pub fn of(name: &str) -> Self {
        match name.chars().next() {
            Some(c) => Self::classify(c),
            None => GroupKey::Other,
        }
    }

    /// Normalizes a user supplied filter character to the group it selects.
    pub fn from_filter(c: char) -> Self {
        Self::classify(c)
    }

    fn classify(c: char) -> Self {
        if c.is_ascii_digit() {
            GroupKey::Digits
        } else if c.is_alphabetic() {
            GroupKey::Letter(c.to_lowercase().next().unwrap_or(c))
        } else {
            GroupKey::Other
        }
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Digits => write!(f, "0-9"),
            GroupKey::Letter(c) => write!(f, "{}", c),
            GroupKey::Other => write!(f, "other"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogGroup {
    pub key: GroupKey,
    pub names: Vec<String>,
}

/// Buckets names into groups, sorting names first.
pub fn group_names<S: AsRef<str>>(names: &[S]) -> Vec<CatalogGroup> {
    let mut sorted: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut buckets: BTreeMap<GroupKey, Vec<String>> = BTreeMap::new();
    for name in sorted {
        buckets
            .entry(GroupKey::of(name))
            .or_default()
            .push(name.to_string());
    }

    buckets
        .into_iter()
        .map(|(key, names)| CatalogGroup { key, names })
        .collect()
}

/// Fixed-width column grid for a set of names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub column_width: usize,
    pub columns: usize,
}

impl ColumnLayout {
    /// Sizes columns to the longest name plus [`COLUMN_GAP`] and fits as many as the display
    /// allows, between 1 and [`MAX_COLUMNS`]. Returns `None` for an empty set.
    pub fn fit<'a, I>(names: I, display_width: usize) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let longest = names.into_iter().map(UnicodeWidthStr::width).max()?;
        let column_width = longest + COLUMN_GAP;
        let columns = (display_width / column_width).clamp(1, MAX_COLUMNS);
        Some(Self {
            column_width,
            columns,
        })
    }

    /// Splits names into rows of at most `columns` cells.
    pub fn rows<'a>(&self, names: &'a [String]) -> std::slice::Chunks<'a, String> {
        names.chunks(self.columns)
    }
}

/// A group together with the column grid sized for its own names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaidOutGroup {
    pub group: CatalogGroup,
    pub layout: ColumnLayout,
}

impl LaidOutGroup {
    /// `None` for a group without names.
    pub fn fit(group: CatalogGroup, display_width: usize) -> Option<Self> {
        let layout = ColumnLayout::fit(group.names.iter().map(String::as_str), display_width)?;
        Some(Self { group, layout })
    }
}

/// Everything needed to print a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// The group that was asked for, if any.
    pub filter: Option<GroupKey>,
    /// Number of names across `groups`.
    pub total: usize,
    pub groups: Vec<LaidOutGroup>,
}

pub fn run(catalog: &Catalog, filter: Option<char>, display_width: usize) -> CmdResult {
    let groups = group_names(&catalog.names());
    if groups.is_empty() {
        return CmdResult::default().with_message(CmdMessage::warning("No binaries available."));
    }

    let (filter, groups) = match filter.map(GroupKey::from_filter) {
        Some(key) => match groups.into_iter().find(|g| g.key == key) {
            Some(group) => (Some(key), vec![group]),
            None => {
                let err = EscapeBinsError::EmptyFilterResult(key.label());
                return CmdResult::default().with_message(CmdMessage::error(err.to_string()));
            }
        },
        None => (None, groups),
    };

    let total = groups.iter().map(|g| g.names.len()).sum();
    let groups: Vec<LaidOutGroup> = groups
        .into_iter()
        .filter_map(|group| LaidOutGroup::fit(group, display_width))
        .collect();
    if groups.is_empty() {
        return CmdResult::default().with_message(CmdMessage::warning("No binaries available."));
    }

    CmdResult::default().with_listing(Listing {
        filter,
        total,
        groups,
    })
}
