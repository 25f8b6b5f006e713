//! The resolved, typed settings table.
//!
//! [`Settings`] groups fields by the section they come from.  It starts out
//! zeroed; the dispatcher fills it with the compiled-in defaults, then with
//! whatever the configuration file and command line override.

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use super::error::SettingError;
use super::table::SettingId;
use super::value::{Alignment, FollowMode, MarkupMode, MouseAction, SeparatorColor, SettingValue};
use crate::domain::Geometry;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GlobalSettings {
    pub font: String,
    pub markup: MarkupMode,
    pub format: String,
    pub sort: bool,
    pub indicate_hidden: bool,
    pub idle_threshold: Duration,
    pub monitor: i32,
    pub follow: FollowMode,
    pub geometry: Geometry,
    pub title: String,
    pub class: String,
    pub shrink: bool,
    pub line_height: i32,
    pub notification_height: i32,
    pub separator_height: i32,
    pub padding: i32,
    pub horizontal_padding: i32,
    pub transparency: i32,
    pub separator_color: SeparatorColor,
    pub alignment: Alignment,
    pub show_age_threshold: Duration,
    pub word_wrap: bool,
    pub ignore_newline: bool,
    pub stack_duplicates: bool,
    pub hide_duplicate_count: bool,
    pub show_indicators: bool,
    pub max_icon_size: i32,
    pub icon_path: String,
    pub dmenu: PathBuf,
    /// `dmenu` split into an argument vector; `None` when it could not be
    /// split, which disables the context menu.
    pub dmenu_command: Option<Vec<String>>,
    pub browser: PathBuf,
    pub browser_command: Option<Vec<String>>,
    pub always_run_script: bool,
    pub mouse_left_click: Vec<MouseAction>,
    pub mouse_middle_click: Vec<MouseAction>,
    pub mouse_right_click: Vec<MouseAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrameSettings {
    pub width: i32,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExperimentalSettings {
    pub per_monitor_dpi: bool,
}

/// Key bindings, kept as the raw strings the user wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShortcutSettings {
    pub close: String,
    pub close_all: String,
    pub history: String,
    pub context: String,
}

/// Colours and timeout for one urgency level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UrgencySettings {
    pub background: String,
    pub foreground: String,
    pub timeout: Duration,
}

/// Every setting known to the registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Settings {
    pub global: GlobalSettings,
    pub frame: FrameSettings,
    pub experimental: ExperimentalSettings,
    pub shortcuts: ShortcutSettings,
    pub urgency_low: UrgencySettings,
    pub urgency_normal: UrgencySettings,
    pub urgency_critical: UrgencySettings,
}

impl Settings {
    /// Stores `value` in the field named by `id`.
    ///
    /// # Errors
    ///
    /// [`SettingError::TypeMismatch`] when the value's variant does not fit
    /// the field.  The field is left untouched in that case.
    pub fn assign(
        &mut self,
        setting: &'static str,
        id: SettingId,
        value: SettingValue,
    ) -> Result<(), SettingError> {
        use SettingId as Id;

        let mismatch = || SettingError::TypeMismatch { setting };
        let g = &mut self.global;

        match id {
            Id::Font => g.font = value.into_string().ok_or_else(mismatch)?,
            Id::Markup => g.markup = value.into_enum().ok_or_else(mismatch)?,
            Id::Format => g.format = value.into_string().ok_or_else(mismatch)?,
            Id::Sort => g.sort = value.into_bool().ok_or_else(mismatch)?,
            Id::IndicateHidden => g.indicate_hidden = value.into_bool().ok_or_else(mismatch)?,
            Id::IdleThreshold => g.idle_threshold = value.into_duration().ok_or_else(mismatch)?,
            Id::Monitor => g.monitor = value.into_int().ok_or_else(mismatch)?,
            Id::Follow => g.follow = value.into_enum().ok_or_else(mismatch)?,
            Id::Geometry => g.geometry = value.into_geometry().ok_or_else(mismatch)?,
            Id::Title => g.title = value.into_string().ok_or_else(mismatch)?,
            Id::Class => g.class = value.into_string().ok_or_else(mismatch)?,
            Id::Shrink => g.shrink = value.into_bool().ok_or_else(mismatch)?,
            Id::LineHeight => g.line_height = value.into_int().ok_or_else(mismatch)?,
            Id::NotificationHeight => {
                g.notification_height = value.into_int().ok_or_else(mismatch)?
            }
            Id::SeparatorHeight => g.separator_height = value.into_int().ok_or_else(mismatch)?,
            Id::Padding => g.padding = value.into_int().ok_or_else(mismatch)?,
            Id::HorizontalPadding => {
                g.horizontal_padding = value.into_int().ok_or_else(mismatch)?
            }
            Id::Transparency => g.transparency = value.into_int().ok_or_else(mismatch)?,
            Id::SeparatorColor => {
                g.separator_color = value.into_separator_color().ok_or_else(mismatch)?
            }
            Id::Alignment => g.alignment = value.into_enum().ok_or_else(mismatch)?,
            Id::ShowAgeThreshold => {
                g.show_age_threshold = value.into_duration().ok_or_else(mismatch)?
            }
            Id::WordWrap => g.word_wrap = value.into_bool().ok_or_else(mismatch)?,
            Id::IgnoreNewline => g.ignore_newline = value.into_bool().ok_or_else(mismatch)?,
            Id::StackDuplicates => g.stack_duplicates = value.into_bool().ok_or_else(mismatch)?,
            Id::HideDuplicateCount => {
                g.hide_duplicate_count = value.into_bool().ok_or_else(mismatch)?
            }
            Id::ShowIndicators => g.show_indicators = value.into_bool().ok_or_else(mismatch)?,
            Id::MaxIconSize => g.max_icon_size = value.into_int().ok_or_else(mismatch)?,
            Id::IconPath => g.icon_path = value.into_string().ok_or_else(mismatch)?,
            Id::Dmenu => g.dmenu = value.into_path().ok_or_else(mismatch)?,
            Id::DmenuCommand => g.dmenu_command = value.into_command().ok_or_else(mismatch)?,
            Id::Browser => g.browser = value.into_path().ok_or_else(mismatch)?,
            Id::BrowserCommand => {
                g.browser_command = value.into_command().ok_or_else(mismatch)?
            }
            Id::AlwaysRunScript => g.always_run_script = value.into_bool().ok_or_else(mismatch)?,
            Id::MouseLeftClick => g.mouse_left_click = value.into_list().ok_or_else(mismatch)?,
            Id::MouseMiddleClick => {
                g.mouse_middle_click = value.into_list().ok_or_else(mismatch)?
            }
            Id::MouseRightClick => g.mouse_right_click = value.into_list().ok_or_else(mismatch)?,

            Id::FrameWidth => self.frame.width = value.into_int().ok_or_else(mismatch)?,
            Id::FrameColor => self.frame.color = value.into_string().ok_or_else(mismatch)?,

            Id::PerMonitorDpi => {
                self.experimental.per_monitor_dpi = value.into_bool().ok_or_else(mismatch)?
            }

            Id::ShortcutClose => self.shortcuts.close = value.into_string().ok_or_else(mismatch)?,
            Id::ShortcutCloseAll => {
                self.shortcuts.close_all = value.into_string().ok_or_else(mismatch)?
            }
            Id::ShortcutHistory => {
                self.shortcuts.history = value.into_string().ok_or_else(mismatch)?
            }
            Id::ShortcutContext => {
                self.shortcuts.context = value.into_string().ok_or_else(mismatch)?
            }

            Id::LowBackground => {
                self.urgency_low.background = value.into_string().ok_or_else(mismatch)?
            }
            Id::LowForeground => {
                self.urgency_low.foreground = value.into_string().ok_or_else(mismatch)?
            }
            Id::LowTimeout => {
                self.urgency_low.timeout = value.into_duration().ok_or_else(mismatch)?
            }
            Id::NormalBackground => {
                self.urgency_normal.background = value.into_string().ok_or_else(mismatch)?
            }
            Id::NormalForeground => {
                self.urgency_normal.foreground = value.into_string().ok_or_else(mismatch)?
            }
            Id::NormalTimeout => {
                self.urgency_normal.timeout = value.into_duration().ok_or_else(mismatch)?
            }
            Id::CriticalBackground => {
                self.urgency_critical.background = value.into_string().ok_or_else(mismatch)?
            }
            Id::CriticalForeground => {
                self.urgency_critical.foreground = value.into_string().ok_or_else(mismatch)?
            }
            Id::CriticalTimeout => {
                self.urgency_critical.timeout = value.into_duration().ok_or_else(mismatch)?
            }
        }
        Ok(())
    }
}
