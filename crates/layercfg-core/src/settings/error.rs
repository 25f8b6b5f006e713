//! Errors produced while converting and dispatching settings.
//!
//! None of these abort a load.  The dispatcher logs them, records them in an
//! [`super::ApplyReport`] and leaves the affected destination as it was.

use thiserror::Error;

use super::shellwords::TokenizeError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingError {
    /// An enum, separator colour or list row was declared without a parser.
    #[error("setting {setting} doesn't have a parser")]
    MissingParser { setting: &'static str },

    /// The row's auxiliary data does not fit its parser.
    #[error("setting {setting} has parser data of the wrong shape")]
    WrongParserData { setting: &'static str },

    /// No vocabulary entry matches the value.
    #[error("unknown {setting} value: '{value}'")]
    UnknownValue { setting: &'static str, value: String },

    /// One element of a list is not in the vocabulary.
    #[error("unknown list item: '{item}'")]
    UnknownListItem { item: String },

    /// A separator colour that is neither a keyword nor a literal.
    #[error("separator color is empty, make sure to quote the value if it's a color")]
    EmptySeparatorColor,

    /// The value does not start with a recognised boolean character.
    #[error("'{value}' is not a boolean")]
    InvalidBool { value: String },

    /// The geometry collaborator rejected the value.
    #[error("invalid geometry: '{value}'")]
    InvalidGeometry { value: String },

    /// A path setting could not be split into an argument vector.
    #[error("unable to parse {setting} command: {source}")]
    CommandParse {
        setting: &'static str,
        #[source]
        source: TokenizeError,
    },

    /// The converted value does not fit the destination field.
    #[error("value type does not match destination of {setting}")]
    TypeMismatch { setting: &'static str },

    /// No registry row carries this name.
    #[error("setting {name} in section {section} doesn't exist")]
    UnknownSetting { name: String, section: String },

    /// The name exists, but only under another section.
    #[error("setting {name} is in the wrong section ({section}, should be {expected})")]
    WrongSection {
        name: String,
        section: String,
        expected: &'static str,
    },

    /// The file has already been applied once.
    #[error("settings have already been resolved")]
    AlreadyResolved,
}
