//! Registry lookup and type-directed application of setting strings.
//!
//! # For beginners
//!
//! The dispatcher is the last step of loading a configuration:
//!
//! ```text
//! ConfigStore ──► Registry::resolve(name, section) ──► SettingRow
//!                                                        │
//!                 raw string ──► Dispatcher::apply ──────┘──► Settings
//! ```
//!
//! It runs in two phases.  `Defaults` is the state right after construction,
//! where [`Dispatcher::set_defaults`] fills every field from the compiled-in
//! rows.  [`Dispatcher::load_and_apply`] consumes the special sections of a
//! store and moves to `Resolved`; from then on the file cannot be applied a
//! second time, although single values (command-line overrides) still can.

use tracing::{debug, error, warn};

use super::error::SettingError;
use super::parsers::ParserData;
use super::resolved::Settings;
use super::shellwords;
use super::table::{SettingRow, REGISTRY, SPECIAL_SECTIONS};
use super::value::{SettingType, SettingValue};
use crate::domain::convert::{expand_path, leading_int, str_to_bool};
use crate::domain::{BuiltinParsers, ConfigStore, ValueParsers};

// ── Registry ──────────────────────────────────────────────────────────────────

/// Outcome of [`Registry::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Index of the matching row.
    Found(usize),
    /// The name exists, but only under `expected`.
    Ambiguous { expected: &'static str },
    NotFound,
}

/// A table of setting rows plus the names of the sections it consumes.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    rows: &'static [SettingRow],
    special_sections: &'static [&'static str],
}

impl Registry {
    pub const fn new(rows: &'static [SettingRow], special_sections: &'static [&'static str]) -> Self {
        Self {
            rows,
            special_sections,
        }
    }

    /// The compiled-in registry.
    pub const fn builtin() -> Self {
        Self::new(REGISTRY, SPECIAL_SECTIONS)
    }

    pub fn rows(&self) -> &'static [SettingRow] {
        self.rows
    }

    pub fn row(&self, index: usize) -> Option<&'static SettingRow> {
        self.rows.get(index)
    }

    /// Finds the row for `name` in `section`.
    ///
    /// When the name only exists under other sections a warning naming one
    /// of them is logged and [`Resolution::Ambiguous`] is returned.
    pub fn resolve(&self, name: &str, section: &str) -> Resolution {
        let mut misplaced = None;
        for (index, row) in self.rows.iter().enumerate() {
            if row.name != name {
                continue;
            }
            if row.section == section {
                return Resolution::Found(index);
            }
            misplaced = Some(row.section);
        }

        match misplaced {
            Some(expected) => {
                warn!("Setting {name} is in the wrong section ({section}, should be {expected})");
                Resolution::Ambiguous { expected }
            }
            None => Resolution::NotFound,
        }
    }

    pub fn is_special(&self, section: &str) -> bool {
        self.special_sections.contains(&section)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

// ── Reports ───────────────────────────────────────────────────────────────────

/// A setting that could not be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingDiagnostic {
    pub section: String,
    pub key: String,
    pub error: SettingError,
}

/// Summary of one `set_defaults` or `load_and_apply` pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Number of values written to the settings.
    pub applied: usize,
    pub diagnostics: Vec<SettingDiagnostic>,
}

impl ApplyReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Counts a success or keeps the failure as a diagnostic.
    pub fn record(&mut self, section: &str, key: &str, result: Result<(), SettingError>) {
        match result {
            Ok(()) => self.applied += 1,
            Err(error) => self.diagnostics.push(SettingDiagnostic {
                section: section.to_string(),
                key: key.to_string(),
                error,
            }),
        }
    }
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Defaults,
    Resolved,
}

/// Applies setting strings to a [`Settings`] table.
#[derive(Debug)]
pub struct Dispatcher<P: ValueParsers = BuiltinParsers> {
    registry: Registry,
    parsers: P,
    settings: Settings,
    phase: Phase,
}

impl Dispatcher {
    /// A dispatcher over the compiled-in registry with the built-in value
    /// parsers.  Call [`Dispatcher::set_defaults`] before reading settings.
    pub fn new() -> Self {
        Self::with_parsers(Registry::builtin(), BuiltinParsers)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ValueParsers> Dispatcher<P> {
    pub fn with_parsers(registry: Registry, parsers: P) -> Self {
        Self {
            registry,
            parsers,
            settings: Settings::default(),
            phase: Phase::Defaults,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn into_settings(self) -> Settings {
        self.settings
    }

    /// Converts `raw` according to `row` and stores the result.
    ///
    /// # Errors
    ///
    /// Any [`SettingError`]; a warning has already been logged and the
    /// destination keeps its previous value.  For path rows the path itself
    /// is stored even when splitting it into a command fails.
    pub fn apply(&mut self, row: &SettingRow, raw: &str) -> Result<(), SettingError> {
        debug!("Trying to set {} to {}", row.name, raw);
        let result = self.convert_and_store(row, raw);
        if let Err(err) = &result {
            warn!("{}: {err}", row.name);
        }
        result
    }

    fn convert_and_store(&mut self, row: &SettingRow, raw: &str) -> Result<(), SettingError> {
        let value = match row.kind {
            SettingType::Int => SettingValue::Int(leading_int(raw)),
            SettingType::Bool => {
                let value = str_to_bool(raw).ok_or_else(|| SettingError::InvalidBool {
                    value: raw.to_string(),
                })?;
                SettingValue::Bool(value)
            }
            SettingType::String => SettingValue::String(raw.to_string()),
            SettingType::Enum | SettingType::SeparatorColor | SettingType::List => {
                let parser = row
                    .parser
                    .ok_or(SettingError::MissingParser { setting: row.name })?;
                parser.parse(row.name, &row.data, raw)?
            }
            SettingType::Path => return self.store_path(row, raw),
            SettingType::Duration => SettingValue::Duration(self.parsers.parse_time(raw)),
            SettingType::Geometry => {
                let geometry =
                    self.parsers
                        .parse_geometry(raw)
                        .ok_or_else(|| SettingError::InvalidGeometry {
                            value: raw.to_string(),
                        })?;
                SettingValue::Geometry(geometry)
            }
        };
        self.settings.assign(row.name, row.id, value)
    }

    /// Stores the expanded path, then its argument vector in the companion
    /// field named by the row's [`ParserData::Command`].
    fn store_path(&mut self, row: &SettingRow, raw: &str) -> Result<(), SettingError> {
        let path = expand_path(raw);
        let command = shellwords::split(&path.to_string_lossy());
        self.settings
            .assign(row.name, row.id, SettingValue::Path(path))?;

        let ParserData::Command(target) = row.data else {
            return Ok(());
        };
        match command {
            Ok(argv) => self
                .settings
                .assign(row.name, target, SettingValue::Command(Some(argv))),
            Err(source) => {
                warn!("Unable to parse {} command. Its functionality will be disabled.", row.name);
                self.settings
                    .assign(row.name, target, SettingValue::Command(None))?;
                Err(SettingError::CommandParse {
                    setting: row.name,
                    source,
                })
            }
        }
    }

    /// Applies every row's compiled-in default.
    ///
    /// A failing default is a registry authoring bug: it is logged at error
    /// level and recorded, and the remaining rows are still applied.
    pub fn set_defaults(&mut self) -> ApplyReport {
        let mut report = ApplyReport::default();
        let rows = self.registry.rows();
        for row in rows {
            let result = self.apply(row, row.default_value);
            if result.is_err() {
                error!("Could not set default of setting {}", row.name);
            }
            report.record(row.section, row.name, result);
        }
        report
    }

    /// Applies every entry of every special section in `store`, in store
    /// order.  Other sections are left for the rule interpreter.
    ///
    /// # Errors
    ///
    /// [`SettingError::AlreadyResolved`] when a store has already been
    /// applied.  Per-entry failures do not abort; they are collected in the
    /// returned report.
    pub fn load_and_apply(&mut self, store: &ConfigStore) -> Result<ApplyReport, SettingError> {
        if self.phase == Phase::Resolved {
            return Err(SettingError::AlreadyResolved);
        }

        let mut report = ApplyReport::default();
        for section in store.sections() {
            let section_name = section.name();
            if !self.registry.is_special(section_name) {
                debug!("Section {section_name} is not special, leaving it for the rules");
                continue;
            }

            for entry in section.entries() {
                let result = match self.registry.resolve(&entry.key, section_name) {
                    Resolution::Found(index) => {
                        let row = &self.registry.rows()[index];
                        self.apply(row, &entry.value)
                    }
                    Resolution::Ambiguous { expected } => Err(SettingError::WrongSection {
                        name: entry.key.clone(),
                        section: section_name.to_string(),
                        expected,
                    }),
                    Resolution::NotFound => {
                        warn!("Setting {} in section {section_name} doesn't exist", entry.key);
                        Err(SettingError::UnknownSetting {
                            name: entry.key.clone(),
                            section: section_name.to_string(),
                        })
                    }
                };
                report.record(section_name, &entry.key, result);
            }
        }

        self.phase = Phase::Resolved;
        Ok(report)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
