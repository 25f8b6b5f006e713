//! Typed command-line lookups with usage registration.
//!
//! [`CommandLine`] pairs a read-only [`CliContext`] with the
//! [`UsageBuilder`] that records every option the program asks for.  It
//! exposes the same `get_*` shape as the store accessors, with one extra
//! `description` argument for the help text.
//!
//! Conventions:
//!
//! - `--key value` for valued options: the value is the next argument.  An
//!   option given as the very last argument has no value; a warning is logged
//!   and the default is used.
//! - `--key` alone for flags ([`CommandLine::get_bool`]).  A flag found at
//!   index 0 (the program name slot) does not count.

use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use super::context::CliContext;
use super::usage::{ArgType, UsageBuilder};
use crate::domain::convert::{expand_path, leading_double, leading_int, parse_time, split_list};

/// Command-line overlay over a captured argument vector.
#[derive(Debug)]
pub struct CommandLine<'a> {
    ctx: &'a CliContext,
    usage: &'a mut UsageBuilder,
}

impl<'a> CommandLine<'a> {
    pub fn new(ctx: &'a CliContext, usage: &'a mut UsageBuilder) -> Self {
        Self { ctx, usage }
    }

    /// Registers `key` in the usage text and returns the raw value that
    /// follows it, if any.
    pub fn lookup(&mut self, key: &str, kind: ArgType, description: &str) -> Option<&'a str> {
        self.usage.append(key, kind, description);
        self.value(key)
    }

    pub fn get_string(&mut self, key: &str, default: &str, description: &str) -> String {
        self.lookup(key, ArgType::String, description)
            .unwrap_or(default)
            .to_string()
    }

    pub fn get_path(&mut self, key: &str, default: &str, description: &str) -> PathBuf {
        expand_path(self.lookup(key, ArgType::String, description).unwrap_or(default))
    }

    pub fn get_list(&mut self, key: &str, default: &str, description: &str) -> Vec<String> {
        split_list(self.lookup(key, ArgType::List, description).unwrap_or(default))
    }

    pub fn get_time(&mut self, key: &str, default: Duration, description: &str) -> Duration {
        self.lookup(key, ArgType::Time, description)
            .map_or(default, parse_time)
    }

    pub fn get_int(&mut self, key: &str, default: i32, description: &str) -> i32 {
        self.lookup(key, ArgType::Int, description)
            .map_or(default, leading_int)
    }

    pub fn get_double(&mut self, key: &str, default: f64, description: &str) -> f64 {
        self.lookup(key, ArgType::Double, description)
            .map_or(default, leading_double)
    }

    /// Presence check for a flag.  The following argument is not consumed.
    pub fn get_bool(&mut self, key: &str, default: bool, description: &str) -> bool {
        self.usage.append(key, ArgType::Flag, description);
        match self.ctx.find_option(key) {
            Some(idx) if idx > 0 => true,
            _ => default,
        }
    }

    /// `true` when `key` is present and followed by a value.
    pub fn is_set(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// The usage text accumulated so far.
    pub fn usage(&self) -> Option<&str> {
        self.usage.usage()
    }

    fn value(&self, key: &str) -> Option<&'a str> {
        let idx = self.ctx.find_option(key)?;
        let ctx: &'a CliContext = self.ctx;
        match ctx.arg(idx + 1) {
            Some(value) => Some(value),
            None => {
                warn!("{key}: Missing argument. Ignoring.");
                None
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
