//! Custom parsers for vocabulary-backed settings.
//!
//! A registry row of type `Enum`, `SeparatorColor` or `List` names one of
//! the parsers below together with its [`ParserData`].  The parser gets the
//! data and the raw string and returns a [`SettingValue`] or a typed error;
//! it never writes into the settings itself.

use std::fmt::Debug;

use tracing::{debug, warn};

use super::error::SettingError;
use super::table::SettingId;
use super::value::{SettingValue, LIST_SENTINEL};
use crate::domain::convert::split_list;

/// String → discriminant lookup table.
pub type Vocabulary = &'static [(&'static str, i32)];

pub const MARKUP_VOCABULARY: Vocabulary = &[("strip", 0), ("no", 1), ("full", 2), ("yes", 2)];

pub const ALIGNMENT_VOCABULARY: Vocabulary = &[("left", 0), ("center", 1), ("right", 2)];

pub const FOLLOW_VOCABULARY: Vocabulary = &[("none", 0), ("mouse", 1), ("keyboard", 2)];

pub const SEPARATOR_COLOR_VOCABULARY: Vocabulary =
    &[("auto", 0), ("foreground", 1), ("frame", 2), ("none", 3)];

pub const MOUSE_ACTION_VOCABULARY: Vocabulary = &[
    ("none", 0),
    ("do_action", 1),
    ("close_current", 2),
    ("close_all", 3),
];

/// Kinds of list settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    MouseActions,
}

/// Auxiliary data attached to a registry row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserData {
    None,
    Vocabulary(Vocabulary),
    /// Destination for the argument vector split out of a path setting.
    Command(SettingId),
    List {
        kind: ListKind,
        vocabulary: Vocabulary,
    },
}

/// Converts a raw string with the help of a row's [`ParserData`].
pub trait CustomParser: Debug + Sync {
    /// # Errors
    ///
    /// Returns a [`SettingError`] when `raw` is not acceptable; the caller
    /// leaves the destination unchanged.
    fn parse(
        &self,
        setting: &'static str,
        data: &ParserData,
        raw: &str,
    ) -> Result<SettingValue, SettingError>;
}

/// Looks `s` up in `vocabulary`.
pub fn lookup_enum(vocabulary: Vocabulary, s: &str) -> Option<i32> {
    let (name, value) = vocabulary.iter().find(|(name, _)| *name == s)?;
    debug!("Setting enum to {value} ({name})");
    Some(*value)
}

/// Exact match against a single vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumParser;

impl CustomParser for EnumParser {
    fn parse(
        &self,
        setting: &'static str,
        data: &ParserData,
        raw: &str,
    ) -> Result<SettingValue, SettingError> {
        let ParserData::Vocabulary(vocabulary) = data else {
            return Err(SettingError::WrongParserData { setting });
        };
        lookup_enum(vocabulary, raw)
            .map(SettingValue::Enum)
            .ok_or_else(|| SettingError::UnknownValue {
                setting,
                value: raw.to_string(),
            })
    }
}

/// Keyword match, otherwise any non-empty string as a literal colour.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeparatorColorParser;

impl CustomParser for SeparatorColorParser {
    fn parse(
        &self,
        setting: &'static str,
        data: &ParserData,
        raw: &str,
    ) -> Result<SettingValue, SettingError> {
        let ParserData::Vocabulary(vocabulary) = data else {
            return Err(SettingError::WrongParserData { setting });
        };
        if let Some(keyword) = lookup_enum(vocabulary, raw) {
            let color = keyword
                .try_into()
                .map_err(|_| SettingError::WrongParserData { setting })?;
            return Ok(SettingValue::SeparatorColor(color));
        }
        if raw.is_empty() {
            return Err(SettingError::EmptySeparatorColor);
        }
        Ok(SettingValue::SeparatorColor(
            super::value::SeparatorColor::Custom(raw.to_string()),
        ))
    }
}

/// Comma separated list, every item resolved against one vocabulary.
///
/// Any unknown item rejects the whole list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListParser;

impl CustomParser for ListParser {
    fn parse(
        &self,
        setting: &'static str,
        data: &ParserData,
        raw: &str,
    ) -> Result<SettingValue, SettingError> {
        let ParserData::List { kind, vocabulary } = data else {
            return Err(SettingError::WrongParserData { setting });
        };
        debug!("list type {kind:?}");

        let items = split_list(raw);
        let mut values = Vec::with_capacity(items.len() + 1);
        for item in items {
            match lookup_enum(vocabulary, &item) {
                Some(value) => values.push(value),
                None => {
                    warn!("Unknown {kind:?} value: '{item}'");
                    return Err(SettingError::UnknownListItem { item });
                }
            }
        }
        values.push(LIST_SENTINEL);
        Ok(SettingValue::List(values))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
