//! The compiled-in settings registry.
//!
//! Every setting the program understands is one [`SettingRow`] in
//! [`REGISTRY`].  A row binds the `(name, section)` identity used in the
//! configuration file to a destination field ([`SettingId`]), a conversion
//! ([`SettingType`]), an optional custom parser and the default string that
//! `set_defaults` applies before the file is read.
//!
//! # For beginners
//!
//! The same name may appear in several sections.  `timeout` exists once per
//! urgency section, so `[urgency_low] timeout = 5s` and
//! `[urgency_critical] timeout = 0` land in different fields, while
//! `[global] timeout = 5s` is reported as a misplaced setting.

use super::parsers::{
    CustomParser, EnumParser, ListKind, ListParser, ParserData, SeparatorColorParser,
    ALIGNMENT_VOCABULARY, FOLLOW_VOCABULARY, MARKUP_VOCABULARY, MOUSE_ACTION_VOCABULARY,
    SEPARATOR_COLOR_VOCABULARY,
};
use super::value::SettingType;

/// Sections consumed by the registry.  Every other section is a rule.
pub const SPECIAL_SECTIONS: &[&str] = &[
    "global",
    "frame",
    "experimental",
    "shortcuts",
    "urgency_low",
    "urgency_normal",
    "urgency_critical",
];

/// Destination field of a setting inside [`super::Settings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingId {
    Font,
    Markup,
    Format,
    Sort,
    IndicateHidden,
    IdleThreshold,
    Monitor,
    Follow,
    Geometry,
    Title,
    Class,
    Shrink,
    LineHeight,
    NotificationHeight,
    SeparatorHeight,
    Padding,
    HorizontalPadding,
    Transparency,
    SeparatorColor,
    Alignment,
    ShowAgeThreshold,
    WordWrap,
    IgnoreNewline,
    StackDuplicates,
    HideDuplicateCount,
    ShowIndicators,
    MaxIconSize,
    IconPath,
    Dmenu,
    DmenuCommand,
    Browser,
    BrowserCommand,
    AlwaysRunScript,
    MouseLeftClick,
    MouseMiddleClick,
    MouseRightClick,
    FrameWidth,
    FrameColor,
    PerMonitorDpi,
    ShortcutClose,
    ShortcutCloseAll,
    ShortcutHistory,
    ShortcutContext,
    LowBackground,
    LowForeground,
    LowTimeout,
    NormalBackground,
    NormalForeground,
    NormalTimeout,
    CriticalBackground,
    CriticalForeground,
    CriticalTimeout,
}

/// One compiled-in setting descriptor.
#[derive(Debug, Clone, Copy)]
pub struct SettingRow {
    pub id: SettingId,
    pub name: &'static str,
    pub section: &'static str,
    pub kind: SettingType,
    pub parser: Option<&'static dyn CustomParser>,
    pub data: ParserData,
    pub default_value: &'static str,
    /// Command-line alias in `-short/-long` form, if the setting has one.
    pub cli: Option<&'static str>,
    pub description: &'static str,
}

impl SettingRow {
    const fn new(
        id: SettingId,
        name: &'static str,
        section: &'static str,
        kind: SettingType,
        default_value: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            section,
            kind,
            parser: None,
            data: ParserData::None,
            default_value,
            cli: None,
            description,
        }
    }

    const fn parsed_by(self, parser: &'static dyn CustomParser, data: ParserData) -> Self {
        Self {
            parser: Some(parser),
            data,
            ..self
        }
    }

    const fn command(self, target: SettingId) -> Self {
        Self {
            data: ParserData::Command(target),
            ..self
        }
    }

    const fn cli(self, alias: &'static str) -> Self {
        Self {
            cli: Some(alias),
            ..self
        }
    }
}

const ENUM: &dyn CustomParser = &EnumParser;
const SEP_COLOR: &dyn CustomParser = &SeparatorColorParser;
const LIST: &dyn CustomParser = &ListParser;

const MOUSE_ACTIONS: ParserData = ParserData::List {
    kind: ListKind::MouseActions,
    vocabulary: MOUSE_ACTION_VOCABULARY,
};

use SettingId as Id;
use SettingType as T;

/// Every setting, in the order defaults are applied.
pub static REGISTRY: &[SettingRow] = &[
    // ── [global] ──────────────────────────────────────────────────────────────
    SettingRow::new(Id::Font, "font", "global", T::String, "Monospace 8", "The font notifications are drawn with")
        .cli("-fn/-font"),
    SettingRow::new(Id::Markup, "markup", "global", T::Enum, "no", "Specify how markup should be handled")
        .parsed_by(ENUM, ParserData::Vocabulary(MARKUP_VOCABULARY))
        .cli("-markup"),
    SettingRow::new(Id::Format, "format", "global", T::String, "%s %b", "The format template for the notifications")
        .cli("-format"),
    SettingRow::new(Id::Sort, "sort", "global", T::Bool, "true", "Sort notifications by urgency and date?")
        .cli("-sort"),
    SettingRow::new(Id::IndicateHidden, "indicate_hidden", "global", T::Bool, "true", "Show how many notifications are hidden")
        .cli("-indicate_hidden"),
    SettingRow::new(Id::IdleThreshold, "idle_threshold", "global", T::Duration, "0", "Don't timeout notifications if user is longer idle than threshold")
        .cli("-idle_threshold"),
    SettingRow::new(Id::Monitor, "monitor", "global", T::Int, "0", "On which monitor should the notifications be displayed")
        .cli("-mon/-monitor"),
    SettingRow::new(Id::Follow, "follow", "global", T::Enum, "none", "Follow mouse, keyboard or none?")
        .parsed_by(ENUM, ParserData::Vocabulary(FOLLOW_VOCABULARY))
        .cli("-follow"),
    SettingRow::new(Id::Geometry, "geometry", "global", T::Geometry, "0x0-30+20", "Geometry for the window")
        .cli("-geom/-geometry"),
    SettingRow::new(Id::Title, "title", "global", T::String, "layercfg", "Define the title of the notification windows")
        .cli("-title"),
    SettingRow::new(Id::Class, "class", "global", T::String, "layercfg", "Define the class of the notification windows")
        .cli("-class"),
    SettingRow::new(Id::Shrink, "shrink", "global", T::Bool, "false", "Shrink window if it's smaller than the width")
        .cli("-shrink"),
    SettingRow::new(Id::LineHeight, "line_height", "global", T::Int, "0", "Add spacing between lines of text")
        .cli("-lh/-line_height"),
    SettingRow::new(Id::NotificationHeight, "notification_height", "global", T::Int, "0", "Define height of the window")
        .cli("-nh/-notification_height"),
    SettingRow::new(Id::SeparatorHeight, "separator_height", "global", T::Int, "2", "height of the separator line")
        .cli("-sep_height/-separator_height"),
    SettingRow::new(Id::Padding, "padding", "global", T::Int, "0", "Padding between text and separator")
        .cli("-padding"),
    SettingRow::new(Id::HorizontalPadding, "horizontal_padding", "global", T::Int, "0", "horizontal padding")
        .cli("-horizontal_padding"),
    SettingRow::new(Id::Transparency, "transparency", "global", T::Int, "0", "Transparency. Range 0-100")
        .cli("-transparency"),
    SettingRow::new(Id::SeparatorColor, "separator_color", "global", T::SeparatorColor, "frame", "Color of the separator line (or 'auto')")
        .parsed_by(SEP_COLOR, ParserData::Vocabulary(SEPARATOR_COLOR_VOCABULARY))
        .cli("-sep_color/-separator_color"),
    SettingRow::new(Id::Alignment, "alignment", "global", T::Enum, "left", "Text alignment left/center/right")
        .parsed_by(ENUM, ParserData::Vocabulary(ALIGNMENT_VOCABULARY))
        .cli("-align/-alignment"),
    SettingRow::new(Id::ShowAgeThreshold, "show_age_threshold", "global", T::Duration, "60", "When should the age of the notification be displayed?")
        .cli("-show_age_threshold"),
    SettingRow::new(Id::WordWrap, "word_wrap", "global", T::Bool, "false", "Truncating long lines or do word wrap")
        .cli("-word_wrap"),
    SettingRow::new(Id::IgnoreNewline, "ignore_newline", "global", T::Bool, "false", "Ignore newline characters in notifications")
        .cli("-ignore_newline"),
    SettingRow::new(Id::StackDuplicates, "stack_duplicates", "global", T::Bool, "true", "Stack together notifications with the same content")
        .cli("-stack_duplicates"),
    SettingRow::new(Id::HideDuplicateCount, "hide_duplicate_count", "global", T::Bool, "false", "Hide the count of stacked notifications with the same content")
        .cli("-hide_duplicate_count"),
    SettingRow::new(Id::ShowIndicators, "show_indicators", "global", T::Bool, "true", "Show indicators for actions \"(A)\" and URLs \"(U)\"")
        .cli("-show_indicators"),
    SettingRow::new(Id::MaxIconSize, "max_icon_size", "global", T::Int, "0", "Scale larger icons down to this size, set to 0 to disable")
        .cli("-max_icon_size"),
    SettingRow::new(Id::IconPath, "icon_path", "global", T::String, "/usr/share/icons/gnome/16x16/status/:/usr/share/icons/gnome/16x16/devices/", "paths to default icons")
        .cli("-icon_path"),
    SettingRow::new(Id::Dmenu, "dmenu", "global", T::Path, "/usr/bin/dmenu -p layercfg:", "path to dmenu")
        .command(Id::DmenuCommand)
        .cli("-dmenu"),
    SettingRow::new(Id::Browser, "browser", "global", T::Path, "/usr/bin/sensible-browser", "path to browser")
        .command(Id::BrowserCommand)
        .cli("-browser"),
    SettingRow::new(Id::AlwaysRunScript, "always_run_script", "global", T::Bool, "true", "Always run rule-defined scripts, even if the notification is suppressed with format = \"\".")
        .cli("-always_run_script"),
    SettingRow::new(Id::MouseLeftClick, "mouse_left_click", "global", T::List, "close_current", "Action of left click event")
        .parsed_by(LIST, MOUSE_ACTIONS)
        .cli("-mouse_left_click"),
    SettingRow::new(Id::MouseMiddleClick, "mouse_middle_click", "global", T::List, "do_action, close_current", "Action of middle click event")
        .parsed_by(LIST, MOUSE_ACTIONS)
        .cli("-mouse_middle_click"),
    SettingRow::new(Id::MouseRightClick, "mouse_right_click", "global", T::List, "close_all", "Action of right click event")
        .parsed_by(LIST, MOUSE_ACTIONS)
        .cli("-mouse_right_click"),
    // ── [frame] ───────────────────────────────────────────────────────────────
    SettingRow::new(Id::FrameWidth, "width", "frame", T::Int, "3", "Width of frame around the window")
        .cli("-frame_width"),
    SettingRow::new(Id::FrameColor, "color", "frame", T::String, "#888888", "Color of the frame around the window")
        .cli("-frame_color"),
    // ── [experimental] ────────────────────────────────────────────────────────
    SettingRow::new(Id::PerMonitorDpi, "per_monitor_dpi", "experimental", T::Bool, "false", "Use a different DPI per monitor"),
    // ── [shortcuts] ───────────────────────────────────────────────────────────
    SettingRow::new(Id::ShortcutClose, "close", "shortcuts", T::String, "none", "Shortcut for closing one notification")
        .cli("-key"),
    SettingRow::new(Id::ShortcutCloseAll, "close_all", "shortcuts", T::String, "none", "Shortcut for closing all notifications")
        .cli("-all_key"),
    SettingRow::new(Id::ShortcutHistory, "history", "shortcuts", T::String, "none", "Shortcut to pop the last notification from history")
        .cli("-history_key"),
    SettingRow::new(Id::ShortcutContext, "context", "shortcuts", T::String, "none", "Shortcut for context menu")
        .cli("-context_key"),
    // ── [urgency_*] ───────────────────────────────────────────────────────────
    SettingRow::new(Id::LowBackground, "background", "urgency_low", T::String, "#222222", "Background color for notifications with low urgency")
        .cli("-lb"),
    SettingRow::new(Id::LowForeground, "foreground", "urgency_low", T::String, "#888888", "Foreground color for notifications with low urgency")
        .cli("-lf"),
    SettingRow::new(Id::LowTimeout, "timeout", "urgency_low", T::Duration, "10s", "Timeout for notifications with low urgency")
        .cli("-lto"),
    SettingRow::new(Id::NormalBackground, "background", "urgency_normal", T::String, "#285577", "Background color for notifications with normal urgency")
        .cli("-nb"),
    SettingRow::new(Id::NormalForeground, "foreground", "urgency_normal", T::String, "#ffffff", "Foreground color for notifications with normal urgency")
        .cli("-nf"),
    SettingRow::new(Id::NormalTimeout, "timeout", "urgency_normal", T::Duration, "10s", "Timeout for notifications with normal urgency")
        .cli("-nto"),
    SettingRow::new(Id::CriticalBackground, "background", "urgency_critical", T::String, "#900000", "Background color for notifications with critical urgency")
        .cli("-cb"),
    SettingRow::new(Id::CriticalForeground, "foreground", "urgency_critical", T::String, "#ffffff", "Foreground color for notifications with critical urgency")
        .cli("-cf"),
    SettingRow::new(Id::CriticalTimeout, "timeout", "urgency_critical", T::Duration, "0", "Timeout for notifications with critical urgency")
        .cli("-cto"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_name_section_pairs_are_unique() {
        let mut seen = HashSet::new();
        for row in REGISTRY {
            assert!(
                seen.insert((row.name, row.section)),
                "duplicate row {}/{}",
                row.name,
                row.section
            );
        }
    }

    #[test]
    fn test_every_row_lives_in_a_special_section() {
        for row in REGISTRY {
            assert!(SPECIAL_SECTIONS.contains(&row.section), "{}", row.section);
        }
    }

    #[test]
    fn test_vocabulary_rows_carry_a_parser() {
        for row in REGISTRY {
            let needs_parser = matches!(
                row.kind,
                SettingType::Enum | SettingType::SeparatorColor | SettingType::List
            );
            assert_eq!(row.parser.is_some(), needs_parser, "{}", row.name);
        }
    }

    #[test]
    fn test_command_line_aliases_are_unique() {
        let mut seen = HashSet::new();
        for alias in REGISTRY.iter().filter_map(|row| row.cli) {
            for part in alias.split('/') {
                assert!(seen.insert(part), "alias {part} used twice");
            }
        }
    }
}
