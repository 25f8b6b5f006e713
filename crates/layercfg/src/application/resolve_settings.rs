//! ResolveSettings use case: the startup configuration pipeline.
//!
//! ```text
//! stream ──► load_ini ──► ConfigStore ─┬─► Dispatcher::load_and_apply
//!                                      └─► rule sections (copied out)
//! defaults ──► Dispatcher::set_defaults        (before the file)
//! argv ──► CommandLine ──► Dispatcher::apply   (after the file, wins)
//! ```
//!
//! The store is cleared once the rule sections have been copied out, so the
//! only things that outlive this call are the typed [`Settings`], the rules
//! and the diagnostics.
//!
//! # Command-line overrides (for beginners)
//!
//! Every registry row with a `cli` alias is looked up on the command line.
//! Valued options (`-font "Sans 9"`) are pushed through the same conversion
//! as the file value.  Boolean options are presence flags: `-shrink` sets
//! `shrink` to true, and leaving it out keeps whatever the file said.

use std::io::BufRead;

use thiserror::Error;
use tracing::{debug, error, info};

use layercfg_core::cli::{ArgType, CommandLine};
use layercfg_core::parser::{load_ini, IniError, ParseReport};
use layercfg_core::settings::{ApplyReport, Dispatcher, Registry, SettingError, SettingType, Settings};
use layercfg_core::{BuiltinParsers, ConfigStore, Entry, ValueParsers};

/// Error type for the resolution pipeline.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The configuration text could not be loaded at all.
    #[error("configuration file is unusable: {0}")]
    Load(#[from] IniError),

    /// The dispatcher refused the file (it was already applied).
    #[error("settings could not be applied: {0}")]
    Dispatch(#[from] SettingError),
}

/// A section the registry does not consume, handed on to rule matching.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RuleSection {
    pub name: String,
    pub entries: Vec<Entry>,
}

/// Everything the pipeline produces.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub settings: Settings,
    pub rules: Vec<RuleSection>,
    pub parse_report: ParseReport,
    pub file_report: ApplyReport,
    pub cli_report: ApplyReport,
}

impl ResolvedConfig {
    /// Total number of diagnostics across the file and command line.
    pub fn problem_count(&self) -> usize {
        self.parse_report.diagnostics.len()
            + self.file_report.diagnostics.len()
            + self.cli_report.diagnostics.len()
    }
}

/// Runs the pipeline with the compiled-in registry and value parsers.
///
/// # Errors
///
/// See [`resolve_with`].
pub fn resolve_settings<R: BufRead>(
    reader: R,
    cli: &mut CommandLine<'_>,
) -> Result<ResolvedConfig, ResolveError> {
    resolve_with(Dispatcher::<BuiltinParsers>::new(), reader, cli)
}

/// Runs the pipeline on a caller-supplied dispatcher.
///
/// # Errors
///
/// - [`ResolveError::Load`] on a repeated section header or a read failure.
/// - [`ResolveError::Dispatch`] when `dispatcher` has already consumed a file.
///
/// Malformed lines and bad values never fail the call; they are logged and
/// returned in the reports.
pub fn resolve_with<P: ValueParsers, R: BufRead>(
    mut dispatcher: Dispatcher<P>,
    reader: R,
    cli: &mut CommandLine<'_>,
) -> Result<ResolvedConfig, ResolveError> {
    let mut store = ConfigStore::new();
    let parse_report = load_ini(reader, &mut store)?;
    debug!(
        "read {} lines into {} sections",
        parse_report.lines_read,
        store.len()
    );

    let defaults = dispatcher.set_defaults();
    if !defaults.is_clean() {
        error!("{} compiled-in defaults failed to apply", defaults.diagnostics.len());
    }

    let file_report = dispatcher.load_and_apply(&store)?;
    let cli_report = apply_command_line(&mut dispatcher, cli);
    let rules = collect_rules(&store, dispatcher.registry());
    store.clear();

    let resolved = ResolvedConfig {
        settings: dispatcher.into_settings(),
        rules,
        parse_report,
        file_report,
        cli_report,
    };
    info!(
        "settings resolved: {} from file, {} from command line, {} rule sections, {} problems",
        resolved.file_report.applied,
        resolved.cli_report.applied,
        resolved.rules.len(),
        resolved.problem_count()
    );
    Ok(resolved)
}

/// Applies every registry row whose command-line alias is present.
pub fn apply_command_line<P: ValueParsers>(
    dispatcher: &mut Dispatcher<P>,
    cli: &mut CommandLine<'_>,
) -> ApplyReport {
    let mut report = ApplyReport::default();
    let rows = dispatcher.registry().rows();

    for row in rows {
        let Some(alias) = row.cli else { continue };

        let raw = if row.kind == SettingType::Bool {
            if !cli.get_bool(alias, false, row.description) {
                continue;
            }
            "true"
        } else {
            match cli.lookup(alias, arg_type(row.kind), row.description) {
                Some(raw) => raw,
                None => continue,
            }
        };

        debug!("command line overrides {}", row.name);
        let result = dispatcher.apply(row, raw);
        report.record("command line", alias, result);
    }
    report
}

/// Copies out every section the registry does not consume, in file order.
pub fn collect_rules(store: &ConfigStore, registry: &Registry) -> Vec<RuleSection> {
    store
        .sections()
        .filter(|section| !registry.is_special(section.name()))
        .map(|section| RuleSection {
            name: section.name().to_string(),
            entries: section.entries().to_vec(),
        })
        .collect()
}

fn arg_type(kind: SettingType) -> ArgType {
    match kind {
        SettingType::Int => ArgType::Int,
        SettingType::Bool => ArgType::Flag,
        SettingType::Duration => ArgType::Time,
        SettingType::List => ArgType::List,
        SettingType::String
        | SettingType::Enum
        | SettingType::SeparatorColor
        | SettingType::Path
        | SettingType::Geometry => ArgType::String,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::time::Duration;

    use layercfg_core::cli::{CliContext, UsageBuilder};
    use layercfg_core::settings::{Alignment, MarkupMode};

    use super::*;

    fn run(text: &str, args: &[&str]) -> Result<ResolvedConfig, ResolveError> {
        let ctx = CliContext::new(args.iter().copied());
        let mut usage = UsageBuilder::new();
        let mut cli = CommandLine::new(&ctx, &mut usage);
        resolve_settings(Cursor::new(text), &mut cli)
    }

    #[test]
    fn test_empty_stream_yields_defaults() {
        // Arrange / Act
        let resolved = run("", &["layercfg"]).expect("resolve");

        // Assert
        assert_eq!(resolved.settings.global.markup, MarkupMode::No);
        assert_eq!(resolved.settings.urgency_normal.timeout, Duration::from_secs(10));
        assert!(resolved.rules.is_empty());
        assert_eq!(resolved.problem_count(), 0);
    }

    #[test]
    fn test_command_line_wins_over_file() {
        let resolved = run(
            "[global]\nalignment = right\ntransparency = 10\n",
            &["layercfg", "-align", "center"],
        )
        .expect("resolve");

        assert_eq!(resolved.settings.global.alignment, Alignment::Center);
        assert_eq!(resolved.settings.global.transparency, 10);
        assert_eq!(resolved.file_report.applied, 2);
        assert_eq!(resolved.cli_report.applied, 1);
    }

    #[test]
    fn test_bool_flag_sets_true_only_when_present() {
        let with_flag = run("[global]\nshrink = no\n", &["layercfg", "-shrink"]).expect("resolve");
        let without = run("[global]\nshrink = no\n", &["layercfg"]).expect("resolve");

        assert!(with_flag.settings.global.shrink);
        assert!(!without.settings.global.shrink);
    }

    #[test]
    fn test_bad_command_line_value_is_reported_not_fatal() {
        let resolved = run("", &["layercfg", "-follow", "sideways"]).expect("resolve");

        assert_eq!(resolved.cli_report.diagnostics.len(), 1);
        assert_eq!(resolved.cli_report.diagnostics[0].key, "-follow");
        assert_eq!(resolved.settings.global.follow, Default::default());
    }

    #[test]
    fn test_rule_sections_are_collected_in_file_order() {
        let resolved = run(
            "[global]\nfont = Sans\n[mute]\nsummary = *\n[urgency_low]\ntimeout = 1\n[ignore]\nappname = x\n",
            &["layercfg"],
        )
        .expect("resolve");

        let names: Vec<&str> = resolved.rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["mute", "ignore"]);
        assert_eq!(resolved.rules[0].entries[0].key, "summary");
    }

    #[test]
    fn test_duplicate_section_is_an_error() {
        let result = run("[global]\n[global]\n", &["layercfg"]);

        assert!(matches!(result, Err(ResolveError::Load(IniError::DuplicateSection { .. }))));
    }

    #[test]
    fn test_arg_type_follows_setting_type() {
        assert_eq!(arg_type(SettingType::Duration), ArgType::Time);
        assert_eq!(arg_type(SettingType::Bool), ArgType::Flag);
        assert_eq!(arg_type(SettingType::Geometry), ArgType::String);
    }
}
