//! Integration tests for the full resolution pipeline.
//!
//! # Purpose
//!
//! These tests drive the public API the way an application does at startup:
//!
//! ```text
//! text stream ──► load_ini ──► ConfigStore ──► Dispatcher ──► Settings
//!                                   │
//!                                   └──► rule sections (left untouched)
//! argv ──► CommandLine ──► overrides applied last
//! ```
//!
//! They verify the layering order (defaults, then file, then command line),
//! the tolerance of the line parser, and that the only fatal condition is a
//! repeated section header.

use std::io::Cursor;
use std::time::Duration;

use layercfg_core::cli::{ArgType, CliContext, CommandLine, UsageBuilder};
use layercfg_core::parser::{load_ini, LineError};
use layercfg_core::settings::{FollowMode, MouseAction, Resolution, SeparatorColor, SettingError};
use layercfg_core::{ConfigStore, Dispatcher, IniError};

const CONFIG: &str = r##"
# A typical configuration file.
[global]
    font = "Monospace 10"
    geometry = "300x5-30+20"
    follow = keyboard
    separator_color = "#ff00ff"
    mouse_right_click = close_all, do_action
    idle_threshold = 2m

[urgency_normal]
    timeout = 15s   ; inline comment

[slack]
    appname = Slack
    new_icon = "slack.png"
"##;

fn load(text: &str) -> ConfigStore {
    let mut store = ConfigStore::new();
    let report = load_ini(Cursor::new(text), &mut store).expect("no duplicate sections");
    assert!(report.is_clean(), "{:?}", report.diagnostics);
    store
}

// ── File layer ────────────────────────────────────────────────────────────────

#[test]
fn test_file_values_override_defaults() {
    // Arrange
    let store = load(CONFIG);
    let mut dispatcher = Dispatcher::new();
    dispatcher.set_defaults();

    // Act
    let report = dispatcher.load_and_apply(&store).expect("first load");

    // Assert
    assert!(report.is_clean(), "{:?}", report.diagnostics);
    let settings = dispatcher.settings();
    assert_eq!(settings.global.font, "Monospace 10");
    assert_eq!(settings.global.geometry.width, 300);
    assert_eq!(settings.global.follow, FollowMode::Keyboard);
    assert_eq!(
        settings.global.separator_color,
        SeparatorColor::Custom("#ff00ff".into())
    );
    assert_eq!(
        settings.global.mouse_right_click,
        vec![MouseAction::CloseAll, MouseAction::DoAction]
    );
    assert_eq!(settings.global.idle_threshold, Duration::from_secs(120));
    assert_eq!(settings.urgency_normal.timeout, Duration::from_secs(15));
    // Untouched rows keep their defaults.
    assert_eq!(settings.urgency_low.timeout, Duration::from_secs(10));
    assert_eq!(settings.frame.color, "#888888");
}

#[test]
fn test_rule_sections_stay_in_the_store() {
    let store = load(CONFIG);

    let slack = store.section("slack").expect("rule section kept");
    assert_eq!(slack.get("appname"), Some("Slack"));
    assert_eq!(slack.get("new_icon"), Some("slack.png"));
    assert_eq!(store.next_section(Some("urgency_normal")), Some("slack"));
}

#[test]
fn test_broken_lines_are_skipped_and_reported() {
    // Arrange
    let text = "orphan = 1\n[global]\nfont\nformat = \"%s\n[frame\nwidth = 5\n";
    let mut store = ConfigStore::new();

    // Act
    let report = load_ini(Cursor::new(text), &mut store).expect("not fatal");

    // Assert
    let kinds: Vec<(usize, LineError)> = report
        .diagnostics
        .iter()
        .map(|d| (d.line, d.error))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (1, LineError::NoSection),
            (3, LineError::MissingEquals),
            (4, LineError::MissingQuote),
            (5, LineError::MissingBracket),
        ]
    );
    // The entry after the broken header still belongs to [global].
    assert_eq!(store.get_int("global", "width", 0), 5);
}

#[test]
fn test_duplicate_section_is_fatal() {
    let text = "[global]\nfont = a\n[global]\nfont = b\n";
    let mut store = ConfigStore::new();

    let result = load_ini(Cursor::new(text), &mut store);

    assert!(matches!(
        result,
        Err(IniError::DuplicateSection { ref name, line: 3 }) if name == "global"
    ));
}

#[test]
fn test_misplaced_setting_is_not_applied() {
    let store = load("[frame]\nfont = Sans\n");
    let mut dispatcher = Dispatcher::new();
    dispatcher.set_defaults();

    let report = dispatcher.load_and_apply(&store).expect("first load");

    assert_eq!(
        dispatcher.registry().resolve("font", "frame"),
        Resolution::Ambiguous { expected: "global" }
    );
    assert!(matches!(
        report.diagnostics[0].error,
        SettingError::WrongSection { expected: "global", .. }
    ));
    assert_eq!(dispatcher.settings().global.font, "Monospace 8");
}

// ── Command-line layer ────────────────────────────────────────────────────────

#[test]
fn test_command_line_overrides_file_value() {
    // Arrange
    let store = load(CONFIG);
    let mut dispatcher = Dispatcher::new();
    dispatcher.set_defaults();
    dispatcher.load_and_apply(&store).expect("first load");
    let ctx = CliContext::new(["layercfg", "-fn", "Serif 12", "-nto", "1m"]);
    let mut usage = UsageBuilder::new();
    let mut cli = CommandLine::new(&ctx, &mut usage);

    // Act
    let rows = dispatcher.registry().rows();
    for row in rows {
        let Some(alias) = row.cli else { continue };
        if let Some(raw) = cli.lookup(alias, ArgType::String, row.description) {
            dispatcher.apply(row, raw).expect("valid override");
        }
    }

    // Assert
    assert_eq!(dispatcher.settings().global.font, "Serif 12");
    assert_eq!(
        dispatcher.settings().urgency_normal.timeout,
        Duration::from_secs(60)
    );
    let text = usage.usage().expect("every alias registered");
    assert!(text.starts_with("-fn/-font (string)"));
}

#[test]
fn test_accessors_and_overlay_share_the_same_shape() {
    let store = load(CONFIG);
    let ctx = CliContext::new(["layercfg", "-timeout", "5s"]);
    let mut usage = UsageBuilder::new();
    let mut cli = CommandLine::new(&ctx, &mut usage);

    let from_file = store.get_time("urgency_normal", "timeout", Duration::ZERO);
    let from_cli = cli.get_time("-timeout", from_file, "Timeout override");

    assert_eq!(from_file, Duration::from_secs(15));
    assert_eq!(from_cli, Duration::from_secs(5));
}
