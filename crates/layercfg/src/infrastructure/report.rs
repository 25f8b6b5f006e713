//! Terminal rendering of resolved configuration.
//!
//! `-print` dumps the typed settings and `-rules` dumps the sections left for
//! rule matching, both as pretty-printed JSON on stdout.  Diagnostics are not
//! part of the dump; they have already been logged.

use layercfg_core::settings::{ApplyReport, Settings};

use crate::application::{ResolvedConfig, RuleSection};

/// Pretty JSON for the typed settings table.
///
/// # Errors
///
/// Propagates [`serde_json::Error`]; the settings types only contain plain
/// data, so this does not fail in practice.
pub fn settings_json(settings: &Settings) -> serde_json::Result<String> {
    serde_json::to_string_pretty(settings)
}

/// Pretty JSON for the rule sections, in file order.
///
/// # Errors
///
/// See [`settings_json`].
pub fn rules_json(rules: &[RuleSection]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rules)
}

/// One line per problem found in the file or on the command line, for the
/// end-of-startup summary.
pub fn problem_lines(resolved: &ResolvedConfig) -> Vec<String> {
    let mut lines: Vec<String> = resolved
        .parse_report
        .diagnostics
        .iter()
        .map(|d| format!("line {}: {}", d.line, d.error))
        .collect();
    lines.extend(apply_lines("file", &resolved.file_report));
    lines.extend(apply_lines("command line", &resolved.cli_report));
    lines
}

fn apply_lines<'a>(source: &'a str, report: &'a ApplyReport) -> impl Iterator<Item = String> + 'a {
    report
        .diagnostics
        .iter()
        .map(move |d| format!("{source} [{}] {}: {}", d.section, d.key, d.error))
}
