//! Tolerant line-oriented configuration parser.
//!
//! Format:
//! ```text
//! # comment            ; also a comment
//! [section]
//! key = value          # trailing comment
//! key = "value # kept" ; quoted text may hold # and ;
//! ```
//!
//! Each line is classified by [`parse_line`] on its own; [`load_ini`] then
//! applies the result to a [`ConfigStore`].  Malformed lines are reported as
//! [`LineDiagnostic`]s (and logged) and parsing continues.  The one condition
//! that aborts a load is a section header that repeats an earlier one.

use std::io::{self, BufRead, Cursor};

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::store::{ConfigStore, StoreError};

/// Fatal errors that abort a load.
#[derive(Debug, Error)]
pub enum IniError {
    /// A `[section]` header appeared twice.
    #[error("duplicated section `{name}` detected at line {line}")]
    DuplicateSection { name: String, line: usize },

    /// The underlying stream could not be read.
    #[error("failed to read configuration stream: {0}")]
    Io(#[from] io::Error),
}

/// Why a single line was rejected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum LineError {
    #[error("Missing ']'.")]
    MissingBracket,
    #[error("Missing '='.")]
    MissingEquals,
    #[error("Missing '\"'.")]
    MissingQuote,
    #[error("Key value pair without a section.")]
    NoSection,
}

/// A rejected line with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDiagnostic {
    pub line: usize,
    pub error: LineError,
}

/// Summary of a completed load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Number of lines read from the stream.
    pub lines_read: usize,
    /// Rejected lines, in file order.
    pub diagnostics: Vec<LineDiagnostic>,
}

impl ParseReport {
    /// `true` when every line was accepted.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Classification of one configuration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Blank or comment line.
    Skip,
    /// `[name]`
    Section(&'a str),
    /// `key = value`, value trimmed with comments removed but quotes kept.
    Pair { key: &'a str, value: &'a str },
}

/// Classifies a single line without touching any store.
///
/// # Errors
///
/// Returns the [`LineError`] describing why the line is malformed.
///
/// # Examples
///
/// ```rust
/// use layercfg_core::parser::{parse_line, Line};
///
/// assert_eq!(parse_line("  [global] "), Ok(Line::Section("global")));
/// assert_eq!(
///     parse_line("font = Monospace 8 # default"),
///     Ok(Line::Pair { key: "font", value: "Monospace 8" })
/// );
/// ```
pub fn parse_line(raw: &str) -> Result<Line<'_>, LineError> {
    let line = raw.trim();

    if line.is_empty() || line.starts_with(['#', ';']) {
        return Ok(Line::Skip);
    }

    if let Some(rest) = line.strip_prefix('[') {
        let end = rest.find(']').ok_or(LineError::MissingBracket)?;
        return Ok(Line::Section(&rest[..end]));
    }

    // The first character is never the separator, so "=x" has no key.
    let equal = line
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == '=')
        .map(|(idx, _)| idx)
        .ok_or(LineError::MissingEquals)?;

    let key = line[..equal].trim();
    let value = line[equal + 1..].trim();

    // Comments are only searched for after a quoted region.
    let scan_from = match value.find('"') {
        Some(open) => {
            let close = value[open + 1..]
                .find('"')
                .ok_or(LineError::MissingQuote)?;
            open + 1 + close
        }
        None => 0,
    };

    let value = match value[scan_from..].find(['#', ';']) {
        Some(comment) => &value[..scan_from + comment],
        None => value,
    };

    Ok(Line::Pair {
        key,
        value: value.trim(),
    })
}

/// Reads `reader` to the end and appends everything it declares to `store`.
///
/// Invalid UTF-8 is replaced rather than rejected so that one bad byte only
/// affects its own line.
///
/// # Errors
///
/// - [`IniError::DuplicateSection`] when a header repeats an existing section.
/// - [`IniError::Io`] when the stream itself fails.
pub fn load_ini<R: BufRead>(mut reader: R, store: &mut ConfigStore) -> Result<ParseReport, IniError> {
    let mut report = ParseReport::default();
    let mut current_section: Option<String> = None;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        report.lines_read += 1;
        let line_num = report.lines_read;
        let text = String::from_utf8_lossy(&buf);

        let outcome = parse_line(&text).and_then(|line| match line {
            Line::Pair { .. } if current_section.is_none() => Err(LineError::NoSection),
            other => Ok(other),
        });

        match outcome {
            Ok(Line::Skip) => {}
            Ok(Line::Section(name)) => {
                store.new_section(name).map_err(|e| match e {
                    StoreError::DuplicateSection(name) => IniError::DuplicateSection {
                        name,
                        line: line_num,
                    },
                })?;
                debug!("line {line_num}: section [{name}]");
                current_section = Some(name.to_string());
            }
            Ok(Line::Pair { key, value }) => {
                if let Some(section) = current_section.as_deref() {
                    store.add_entry(section, key, value);
                }
            }
            Err(error) => {
                warn!("Invalid config file at line {line_num}: {error}");
                report.diagnostics.push(LineDiagnostic {
                    line: line_num,
                    error,
                });
            }
        }
    }

    Ok(report)
}

/// Convenience wrapper around [`load_ini`] for in-memory text.
///
/// # Errors
///
/// See [`load_ini`].
pub fn load_ini_str(text: &str, store: &mut ConfigStore) -> Result<ParseReport, IniError> {
    load_ini(Cursor::new(text.as_bytes()), store)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
