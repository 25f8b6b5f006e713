//! Typed read accessors over a [`ConfigStore`].
//!
//! Every accessor takes `(section, key, default)` and returns `default` when
//! the key is absent.  Absence is never an error.  Values that are present
//! but malformed follow the lenient conversions in [`super::convert`]: a
//! non-numeric integer reads as `0`, while an unrecognised boolean falls back
//! to `default`.

use std::path::PathBuf;
use std::time::Duration;

use super::convert::{
    expand_path, leading_double, leading_int, parse_time, split_list, str_to_bool,
};
use super::store::ConfigStore;

impl ConfigStore {
    /// Returns the stored string, or `default` when absent.
    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.get_value(section, key).unwrap_or(default).to_string()
    }

    /// Like [`ConfigStore::get_string`], then expands a leading `~`.
    pub fn get_path(&self, section: &str, key: &str, default: &str) -> PathBuf {
        expand_path(self.get_value(section, key).unwrap_or(default))
    }

    /// Reads an integer.  A present but non-numeric value reads as `0`.
    pub fn get_int(&self, section: &str, key: &str, default: i32) -> i32 {
        self.get_value(section, key).map_or(default, leading_int)
    }

    /// Reads a floating point number.  A present but non-numeric value reads
    /// as `0.0`.
    pub fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.get_value(section, key).map_or(default, leading_double)
    }

    /// Reads a boolean by its first character; unknown values yield `default`.
    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.get_value(section, key)
            .and_then(str_to_bool)
            .unwrap_or(default)
    }

    /// Reads a time value such as `10s` or `250ms`.
    pub fn get_time(&self, section: &str, key: &str, default: Duration) -> Duration {
        self.get_value(section, key).map_or(default, parse_time)
    }

    /// Reads a comma separated list.  `default` is split the same way.
    pub fn get_list(&self, section: &str, key: &str, default: &str) -> Vec<String> {
        split_list(self.get_value(section, key).unwrap_or(default))
    }

    /// `true` when `key` has at least one entry in `section`.
    pub fn is_set(&self, section: &str, key: &str) -> bool {
        self.get_value(section, key).is_some()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(entries: &[(&str, &str)]) -> ConfigStore {
        let mut store = ConfigStore::new();
        for (key, value) in entries {
            store.add_entry("s", key, value);
        }
        store
    }

    #[test]
    fn test_get_int_present_and_missing() {
        let store = store_with(&[("bar", "1"), ("junk", "abc")]);

        assert_eq!(store.get_int("s", "bar", 0), 1);
        assert_eq!(store.get_int("s", "missing", 7), 7);
        assert_eq!(store.get_int("s", "junk", 7), 0);
        assert_eq!(store.get_int("nosection", "bar", 3), 3);
    }

    #[test]
    fn test_get_bool_invalid_falls_back_to_default() {
        let store = store_with(&[("a", "yes"), ("b", "F"), ("c", "maybe")]);

        assert!(store.get_bool("s", "a", false));
        assert!(!store.get_bool("s", "b", true));
        assert!(store.get_bool("s", "c", true));
        assert!(!store.get_bool("s", "c", false));
        assert!(store.get_bool("s", "absent", true));
    }

    #[test]
    fn test_get_double_best_effort() {
        let store = store_with(&[("ratio", "0.75"), ("bad", "x")]);
        assert_eq!(store.get_double("s", "ratio", 1.0), 0.75);
        assert_eq!(store.get_double("s", "bad", 1.0), 0.0);
        assert_eq!(store.get_double("s", "missing", 1.0), 1.0);
    }

    #[test]
    fn test_get_string_and_is_set() {
        let store = store_with(&[("font", "Monospace 8")]);
        assert_eq!(store.get_string("s", "font", "Sans"), "Monospace 8");
        assert_eq!(store.get_string("s", "title", "Notify"), "Notify");
        assert!(store.is_set("s", "font"));
        assert!(!store.is_set("s", "title"));
    }

    #[test]
    fn test_get_time_and_list() {
        let store = store_with(&[("timeout", "250ms"), ("actions", "open, close")]);

        assert_eq!(
            store.get_time("s", "timeout", Duration::ZERO),
            Duration::from_millis(250)
        );
        assert_eq!(
            store.get_time("s", "missing", Duration::from_secs(3)),
            Duration::from_secs(3)
        );
        assert_eq!(store.get_list("s", "actions", ""), vec!["open", "close"]);
        assert_eq!(store.get_list("s", "missing", "a,b"), vec!["a", "b"]);
    }

    #[test]
    fn test_get_path_returns_stored_path() {
        let store = store_with(&[("browser", "/usr/bin/firefox")]);
        assert_eq!(
            store.get_path("s", "browser", "/bin/false"),
            PathBuf::from("/usr/bin/firefox")
        );
        assert_eq!(
            store.get_path("s", "missing", "/bin/false"),
            PathBuf::from("/bin/false")
        );
    }
}
