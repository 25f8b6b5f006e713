//! Typed setting values.
//!
//! [`SettingValue`] is what a conversion produces; the registry's
//! [`SettingType`] tag says which variant a row expects.  The small domain
//! enums below are the targets of the enum-style vocabularies in
//! [`super::parsers`].

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::domain::Geometry;

/// Marks the end of a raw list value produced by the list parser.
pub const LIST_SENTINEL: i32 = -1;

/// Conversion applied to a registry row's string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingType {
    Int,
    Bool,
    String,
    Enum,
    SeparatorColor,
    Path,
    Duration,
    Geometry,
    List,
}

/// A converted value, ready to be stored in [`super::Settings`].
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Int(i32),
    Bool(bool),
    String(String),
    /// Discriminant looked up in a vocabulary.
    Enum(i32),
    SeparatorColor(SeparatorColor),
    Path(PathBuf),
    Duration(Duration),
    Geometry(Geometry),
    /// Vocabulary discriminants followed by [`LIST_SENTINEL`].
    List(Vec<i32>),
    /// Argument vector split out of a path setting; `None` disables the
    /// feature that would run it.
    Command(Option<Vec<String>>),
}

impl SettingValue {
    pub fn into_int(self) -> Option<i32> {
        match self {
            SettingValue::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_bool(self) -> Option<bool> {
        match self {
            SettingValue::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_string(self) -> Option<String> {
        match self {
            SettingValue::String(v) => Some(v),
            _ => None,
        }
    }

    /// Maps an `Enum` discriminant onto its domain enum.
    pub fn into_enum<T: TryFrom<i32>>(self) -> Option<T> {
        match self {
            SettingValue::Enum(v) => T::try_from(v).ok(),
            _ => None,
        }
    }

    pub fn into_separator_color(self) -> Option<SeparatorColor> {
        match self {
            SettingValue::SeparatorColor(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<PathBuf> {
        match self {
            SettingValue::Path(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_duration(self) -> Option<Duration> {
        match self {
            SettingValue::Duration(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_geometry(self) -> Option<Geometry> {
        match self {
            SettingValue::Geometry(v) => Some(v),
            _ => None,
        }
    }

    /// Maps the elements before [`LIST_SENTINEL`] onto a domain enum.  Fails
    /// if any element is not a valid discriminant.
    pub fn into_list<T: TryFrom<i32>>(self) -> Option<Vec<T>> {
        match self {
            SettingValue::List(values) => values
                .into_iter()
                .take_while(|&v| v != LIST_SENTINEL)
                .map(|v| T::try_from(v).ok())
                .collect(),
            _ => None,
        }
    }

    pub fn into_command(self) -> Option<Option<Vec<String>>> {
        match self {
            SettingValue::Command(v) => Some(v),
            _ => None,
        }
    }
}

// ── Domain enums ──────────────────────────────────────────────────────────────

/// How markup in notification bodies is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkupMode {
    Strip,
    #[default]
    No,
    Full,
}

impl TryFrom<i32> for MarkupMode {
    type Error = ();

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MarkupMode::Strip),
            1 => Ok(MarkupMode::No),
            2 => Ok(MarkupMode::Full),
            _ => Err(()),
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl TryFrom<i32> for Alignment {
    type Error = ();

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Alignment::Left),
            1 => Ok(Alignment::Center),
            2 => Ok(Alignment::Right),
            _ => Err(()),
        }
    }
}

/// Which monitor notifications follow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowMode {
    #[default]
    None,
    Mouse,
    Keyboard,
}

impl TryFrom<i32> for FollowMode {
    type Error = ();

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FollowMode::None),
            1 => Ok(FollowMode::Mouse),
            2 => Ok(FollowMode::Keyboard),
            _ => Err(()),
        }
    }
}

/// Action bound to a mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseAction {
    None,
    DoAction,
    CloseCurrent,
    CloseAll,
}

impl TryFrom<i32> for MouseAction {
    type Error = ();

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MouseAction::None),
            1 => Ok(MouseAction::DoAction),
            2 => Ok(MouseAction::CloseCurrent),
            3 => Ok(MouseAction::CloseAll),
            _ => Err(()),
        }
    }
}

/// Colour of the line drawn between notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparatorColor {
    Auto,
    Foreground,
    #[default]
    Frame,
    None,
    /// A literal colour such as `#ff0000`.
    Custom(String),
}

impl TryFrom<i32> for SeparatorColor {
    type Error = ();

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SeparatorColor::Auto),
            1 => Ok(SeparatorColor::Foreground),
            2 => Ok(SeparatorColor::Frame),
            3 => Ok(SeparatorColor::None),
            _ => Err(()),
        }
    }
}
