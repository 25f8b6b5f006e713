//! Settings registry and dispatcher.
//!
//! - **`value`** – [`SettingValue`], the converted value, and the small
//!   domain enums it maps onto.
//! - **`parsers`** – vocabulary-backed custom parsers (enum, separator
//!   colour, list).
//! - **`table`** – the compiled-in [`REGISTRY`] and special section names.
//! - **`resolved`** – [`Settings`], the typed table being filled.
//! - **`dispatch`** – [`Registry::resolve`] and the [`Dispatcher`].
//! - **`shellwords`** – splits path settings into argument vectors.

pub mod dispatch;
pub mod error;
pub mod parsers;
pub mod resolved;
pub mod shellwords;
pub mod table;
pub mod value;

pub use dispatch::{ApplyReport, Dispatcher, Phase, Registry, Resolution, SettingDiagnostic};
pub use error::SettingError;
pub use parsers::{CustomParser, ParserData, Vocabulary};
pub use resolved::Settings;
pub use table::{SettingId, SettingRow, REGISTRY, SPECIAL_SECTIONS};
pub use value::{
    Alignment, FollowMode, MarkupMode, MouseAction, SeparatorColor, SettingType, SettingValue,
    LIST_SENTINEL,
};
