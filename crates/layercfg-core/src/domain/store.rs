//! In-memory text store: ordered sections of ordered key/value entries.
//!
//! The store is filled by the line parser ([`crate::parser::load_ini`]) and
//! queried by the typed accessors in [`super::accessors`] and by the settings
//! dispatcher.  It owns every section exclusively; nothing in the store is
//! shared or reference counted.
//!
//! # Ordering and shadowing
//!
//! - Sections are kept in discovery order, so [`ConfigStore::next_section`]
//!   walks them in the order they first appeared in the file.
//! - Entries keep insertion order.  The same key may appear several times in
//!   one section; lookups return the **first** one (first-wins shadowing).

use serde::Serialize;
use thiserror::Error;

/// Errors raised by structural store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A section with this name already exists.
    #[error("duplicated section `{0}`")]
    DuplicateSection(String),
}

/// One `key = value` pair.  The value has already lost one layer of quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

/// A named, ordered group of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<Entry>,
}

impl Section {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    /// The section name as written between the brackets.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All entries in insertion order, duplicates included.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the value of the first entry whose key equals `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }
}

/// Ordered collection of sections built from a configuration stream.
///
/// Construct one per load with [`ConfigStore::new`], hand it to the parser,
/// read it, then release it with [`ConfigStore::clear`] (or drop it).
#[derive(Debug, Default, Clone)]
pub struct ConfigStore {
    sections: Vec<Section>,
}

impl ConfigStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a new section.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateSection`] if `name` is already present.
    pub fn new_section(&mut self, name: &str) -> Result<&mut Section, StoreError> {
        if self.section(name).is_some() {
            return Err(StoreError::DuplicateSection(name.to_string()));
        }
        self.sections.push(Section::new(name));
        let last = self.sections.len() - 1;
        Ok(&mut self.sections[last])
    }

    /// Looks up a section by name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Appends an entry, creating the section on first reference.
    ///
    /// One layer of surrounding double quotes is removed from `value`.
    pub fn add_entry(&mut self, section: &str, key: &str, value: &str) {
        let idx = match self.sections.iter().position(|s| s.name == section) {
            Some(idx) => idx,
            None => {
                self.sections.push(Section::new(section));
                self.sections.len() - 1
            }
        };
        self.sections[idx].entries.push(Entry {
            key: key.to_string(),
            value: strip_quotes(value).to_string(),
        });
    }

    /// Raw lookup of the first value stored under `section`/`key`.
    pub fn get_value(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key)
    }

    /// Returns the name of the section discovered after `section`.
    ///
    /// `None` as input yields the first section.  Returns `None` when the store
    /// is empty, when `section` is the last one, or when it is unknown.
    pub fn next_section(&self, section: Option<&str>) -> Option<&str> {
        let first = self.sections.first()?;
        let Some(current) = section else {
            return Some(first.name());
        };
        let idx = self.sections.iter().position(|s| s.name == current)?;
        self.sections.get(idx + 1).map(Section::name)
    }

    /// Iterates over sections in discovery order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Number of sections currently held.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// `true` when no section has been declared.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Releases every section.  The store can be refilled afterwards.
    pub fn clear(&mut self) {
        self.sections.clear();
    }
}

/// Removes one layer of surrounding double quotes, if both ends carry one.
pub fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
