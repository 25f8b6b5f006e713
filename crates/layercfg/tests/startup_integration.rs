//! Integration tests for the startup pipeline.
//!
//! # Purpose
//!
//! These tests exercise the application through its *public* API in the same
//! way `main.rs` does: open a configuration file through the infrastructure
//! adapter, run `resolve_settings` with a captured argument vector, then
//! render the result.  They verify:
//!
//! - The happy path: file values land in the typed settings and rule
//!   sections are handed on in file order.
//! - Layering: command-line values beat the file, the file beats defaults.
//! - Tolerance: a broken line or an unknown key costs only that one setting.
//! - The usage text lists every option consulted during startup.

use std::path::PathBuf;
use std::time::Duration;

use layercfg::application::{resolve_settings, ResolveError, ResolvedConfig};
use layercfg::infrastructure::{config_file, report};
use layercfg_core::cli::{CliContext, CommandLine, UsageBuilder};
use layercfg_core::settings::{MarkupMode, MouseAction};

const RC: &str = r##"
[global]
    font = "Sans Bold 11"
    markup = yes
    mouse_left_click = do_action
    format = "<b>%s</b>\n%b"   # bold summary
    bogus_key = 1
    word_wrap = perhaps

[shortcuts]
    close = ctrl+space

[urgency_low]
    timeout = 4s

[spotify]
    appname = Spotify
    urgency = low
"##;

fn write_rc(name: &str, text: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("layercfg-it-{}-{name}", std::process::id()));
    std::fs::write(&path, text).expect("write fixture");
    path
}

fn run_with_file(name: &str, args: &[&str]) -> (ResolvedConfig, String) {
    let path = write_rc(name, RC);
    let reader = config_file::open_config(&path).expect("open");
    let ctx = CliContext::new(args.iter().copied());
    let mut usage = UsageBuilder::new();
    let mut cli = CommandLine::new(&ctx, &mut usage);

    let resolved = resolve_settings(reader, &mut cli).expect("resolve");
    let help = cli.usage().unwrap_or_default().to_string();
    let _ = std::fs::remove_file(&path);
    (resolved, help)
}

// ── Happy path ────────────────────────────────────────────────────────────────

/// File values reach the typed table; untouched settings keep defaults.
#[test]
fn test_file_values_are_resolved() {
    // Arrange / Act
    let (resolved, _) = run_with_file("happy", &["layercfg"]);

    // Assert
    let s = &resolved.settings;
    assert_eq!(s.global.font, "Sans Bold 11");
    assert_eq!(s.global.markup, MarkupMode::Full);
    assert_eq!(s.global.mouse_left_click, vec![MouseAction::DoAction]);
    assert_eq!(s.global.format, "<b>%s</b>\\n%b");
    assert_eq!(s.shortcuts.close, "ctrl+space");
    assert_eq!(s.urgency_low.timeout, Duration::from_secs(4));
    assert_eq!(s.urgency_normal.timeout, Duration::from_secs(10));
}

/// Rule sections are handed on untouched.
#[test]
fn test_rule_sections_are_handed_on() {
    let (resolved, _) = run_with_file("rules", &["layercfg"]);

    assert_eq!(resolved.rules.len(), 1);
    let spotify = &resolved.rules[0];
    assert_eq!(spotify.name, "spotify");
    let keys: Vec<&str> = spotify.entries.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["appname", "urgency"]);

    let json = report::rules_json(&resolved.rules).expect("serialize");
    assert!(json.contains("\"Spotify\""));
}

// ── Tolerance ─────────────────────────────────────────────────────────────────

/// An unknown key and an unreadable boolean are reported, nothing else is lost.
#[test]
fn test_bad_entries_cost_only_themselves() {
    let (resolved, _) = run_with_file("tolerance", &["layercfg"]);

    let keys: Vec<&str> = resolved
        .file_report
        .diagnostics
        .iter()
        .map(|d| d.key.as_str())
        .collect();
    assert_eq!(keys, vec!["bogus_key", "word_wrap"]);
    assert!(!resolved.settings.global.word_wrap, "default kept");

    let problems = report::problem_lines(&resolved);
    assert_eq!(problems.len(), 2);
    assert!(problems[0].starts_with("file [global] bogus_key"));
}

// ── Layering ──────────────────────────────────────────────────────────────────

/// Command-line values win over the file, which wins over defaults.
#[test]
fn test_command_line_beats_file() {
    let (resolved, _) = run_with_file(
        "layering",
        &["layercfg", "-font", "Mono 7", "-lto", "1m", "-word_wrap"],
    );

    assert_eq!(resolved.settings.global.font, "Mono 7");
    assert_eq!(resolved.settings.urgency_low.timeout, Duration::from_secs(60));
    assert!(resolved.settings.global.word_wrap);
    assert_eq!(resolved.cli_report.applied, 3);
}

/// The help text is complete once the pipeline has run.
#[test]
fn test_usage_lists_registry_options() {
    let (_, help) = run_with_file("usage", &["layercfg"]);

    assert!(help.contains("-fn/-font (string)"));
    assert!(help.contains("-lto (time)"));
    assert!(help.contains("-monitor") && help.contains("(int)"));
    assert!(help.lines().any(|line| line.starts_with("-shrink ")));
}

// ── Fatal path ────────────────────────────────────────────────────────────────

#[test]
fn test_repeated_section_aborts() {
    let path = write_rc("dup", "[global]\n[frame]\n[global]\n");
    let reader = config_file::open_config(&path).expect("open");
    let ctx = CliContext::new(["layercfg"]);
    let mut usage = UsageBuilder::new();
    let mut cli = CommandLine::new(&ctx, &mut usage);

    let result = resolve_settings(reader, &mut cli);
    let _ = std::fs::remove_file(&path);

    assert!(matches!(result, Err(ResolveError::Load(_))));
}
