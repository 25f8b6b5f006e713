//! Configuration text parsing.
//!
//! Turns a readable stream into [`ConfigStore`](crate::domain::ConfigStore)
//! sections and entries, one line at a time.

pub mod ini;

pub use ini::{
    load_ini, load_ini_str, parse_line, IniError, Line, LineDiagnostic, LineError, ParseReport,
};
