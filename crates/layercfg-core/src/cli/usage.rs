//! Lazily accumulated usage text.
//!
//! Each option registers itself the first time it is queried, so the help
//! text lists exactly the options the program actually consults, in the order
//! it consults them.

use std::collections::HashSet;

/// Width of the left-hand `key (type)` column.
pub const KEY_COLUMN_WIDTH: usize = 40;

/// Value kind shown next to an option in the usage text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    String,
    List,
    Time,
    Int,
    Double,
    /// Presence-only flag; printed without a type label.
    Flag,
}

impl ArgType {
    /// The label printed in parentheses after the key.
    pub fn label(self) -> &'static str {
        match self {
            ArgType::String => "string",
            ArgType::List => "list",
            ArgType::Time => "time",
            ArgType::Int => "int",
            ArgType::Double => "double",
            ArgType::Flag => "",
        }
    }
}

/// Append-only usage text, one line per distinct option.
#[derive(Debug, Clone, Default)]
pub struct UsageBuilder {
    text: String,
    seen: HashSet<String>,
}

impl UsageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `key` unless it is already listed.
    pub fn append(&mut self, key: &str, kind: ArgType, description: &str) {
        if !self.seen.insert(key.to_string()) {
            return;
        }
        let key_type = match kind.label() {
            "" => key.to_string(),
            label => format!("{key} ({label})"),
        };
        self.text.push_str(&format!(
            "{key_type:<width$} - {description}\n",
            width = KEY_COLUMN_WIDTH
        ));
    }

    /// The accumulated text, `None` until the first option is registered.
    pub fn usage(&self) -> Option<&str> {
        (!self.text.is_empty()).then_some(self.text.as_str())
    }

    /// Number of registered options.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
