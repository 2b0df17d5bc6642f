//! Core data types: the [`Catalog`] of known binaries, each binary's [`Entry`], and the
//! [`Function`]s grouped under named [`Category`]s.
//!
//! The on-disk shape is a single JSON object keyed by binary name:
//!
//! ```json
//! {
//!   "find": {
//!     "description": "optional summary",
//!     "functions": {
//!       "shell": [{ "description": "optional", "code": "find . -exec /bin/sh \\; -quit" }],
//!       "sudo":  [{ "code": "sudo find . -exec /bin/sh \\; -quit" }]
//!     }
//!   }
//! }
//! ```
//!
//! Category order is display order, so [`Categories`] keeps the order in which the keys
//! appear in the source instead of going through a hash or sorted map.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// One technique: optional prose plus the command template the user adapts by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub code: String,
}

impl Function {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            description: None,
            code: code.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A named group of functions, e.g. `shell`, `file-read`, `sudo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub functions: Vec<Function>,
}

/// Categories of an entry in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categories(Vec<Category>);

impl Categories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends functions to `name`, creating the category at the end if it is new.
    pub fn push(&mut self, name: impl Into<String>, functions: Vec<Function>) {
        let name = name.into();
        match self.0.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.functions.extend(functions),
            None => self.0.push(Category { name, functions }),
        }
    }

    /// Sets the functions of `name`, replacing earlier ones. A replaced category keeps its
    /// position.
    fn set(&mut self, name: String, functions: Vec<Function>) {
        match self.0.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.functions = functions,
            None => self.0.push(Category { name, functions }),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of functions across all categories.
    pub fn function_count(&self) -> usize {
        self.0.iter().map(|c| c.functions.len()).sum()
    }
}

impl<'a> IntoIterator for &'a Categories {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Categories {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in &self.0 {
            map.serialize_entry(&category.name, &category.functions)?;
        }
        map.end()
    }
}

struct CategoriesVisitor;

impl<'de> Visitor<'de> for CategoriesVisitor {
    type Value = Categories;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map from category name to a list of functions")
    }

    // A repeated key wins over the earlier one, as with repeated binary names.
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut categories = Categories::new();
        while let Some((name, functions)) = access.next_entry::<String, Vec<Function>>()? {
            categories.set(name, functions);
        }
        Ok(categories)
    }
}

impl<'de> Deserialize<'de> for Categories {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CategoriesVisitor)
    }
}

/// Everything known about one binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The lookup key. Not part of the record on disk; filled in from the map key on load.
    #[serde(skip)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub functions: Categories,
}

impl Entry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            functions: Categories::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, name: impl Into<String>, functions: Vec<Function>) -> Self {
        self.functions.push(name, functions);
        self
    }
}

/// The full, read-only knowledge base for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<String, Entry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from raw records, stamping each entry with its key.
    pub fn from_map(raw: BTreeMap<String, Entry>) -> Self {
        let entries = raw
            .into_iter()
            .map(|(name, mut entry)| {
                entry.name = name.clone();
                (name, entry)
            })
            .collect();
        Self { entries }
    }

    pub fn insert(&mut self, entry: Entry) {
        self.entries.insert(entry.name.clone(), entry);
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// All binary names in lexicographic order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Entry> for Catalog {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for entry in iter {
            catalog.insert(entry);
        }
        catalog
    }
}
