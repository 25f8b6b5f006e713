//! # layercfg-core
//!
//! Settings resolution engine: turns a configuration text stream, the
//! process argument vector and a compiled-in table of defaults into one typed
//! [`Settings`] value.
//!
//! The crate does no file-system access and never installs a logger.  The
//! caller opens the stream and hands it over; diagnostics are emitted through
//! `tracing` and also returned in report values.
//!
//! # Architecture overview (for beginners)
//!
//! Loading a configuration happens in four steps:
//!
//! 1. **`parser`** reads the stream line by line into a [`ConfigStore`]:
//!    ordered sections holding ordered `key = value` entries.  Broken lines
//!    are skipped with a warning; a repeated `[section]` header is the only
//!    fatal error.
//!
//! 2. **`domain`** answers typed queries against the store (`get_int`,
//!    `get_time`, ...), falling back to a caller-supplied default.
//!
//! 3. **`settings`** owns the compiled-in registry.  The [`Dispatcher`]
//!    first applies every default, then walks the store's *special* sections
//!    (`global`, `frame`, `urgency_low`, ...) and converts each entry into
//!    its typed field.  All other sections are rules and are left alone.
//!
//! 4. **`cli`** offers the same typed queries over the argument vector and
//!    records each queried option for the `--help` text.
//!
//! ```rust
//! use layercfg_core::{load_ini_str, ConfigStore, Dispatcher};
//!
//! let mut store = ConfigStore::new();
//! load_ini_str("[global]\nfont = \"Sans 9\"\n", &mut store).unwrap();
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.set_defaults();
//! dispatcher.load_and_apply(&store).unwrap();
//! assert_eq!(dispatcher.settings().global.font, "Sans 9");
//! ```

pub mod cli;
pub mod domain;
pub mod parser;
pub mod settings;

pub use cli::{ArgType, CliContext, CommandLine, UsageBuilder};
pub use domain::{BuiltinParsers, ConfigStore, Entry, Geometry, Section, StoreError, ValueParsers};
pub use parser::{load_ini, load_ini_str, IniError, LineError, ParseReport};
pub use settings::{
    ApplyReport, Dispatcher, Registry, Resolution, SettingError, SettingRow, SettingValue,
    Settings,
};
