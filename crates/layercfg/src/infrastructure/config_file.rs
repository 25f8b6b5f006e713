//! Locating and opening the configuration file.
//!
//! The default file lives in the platform-appropriate config directory:
//! - Linux:    `$XDG_CONFIG_HOME/layercfg/layercfgrc` (or `~/.config/...`)
//! - macOS:    `~/Library/Application Support/layercfg/layercfgrc`
//! - Windows:  `%APPDATA%\layercfg\layercfgrc`
//!
//! A missing file is not an error.  The caller gets an empty stream and the
//! compiled-in defaults apply unchanged.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

/// File name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "layercfgrc";

/// Error type for configuration file access.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error other than "not found" occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigFileError::NoPlatformConfigDir`] when the base directory
/// cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigFileError> {
    platform_config_dir().ok_or(ConfigFileError::NoPlatformConfigDir)
}

/// Resolves the full path to the default config file.
///
/// # Errors
///
/// See [`config_dir`].
pub fn default_config_path() -> Result<PathBuf, ConfigFileError> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Opens `path` for line-by-line reading.
///
/// Returns an empty stream (with a warning) when the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigFileError::Io`] for any other open failure, such as a
/// permission error.
pub fn open_config(path: &Path) -> Result<Box<dyn BufRead>, ConfigFileError> {
    match File::open(path) {
        Ok(file) => {
            info!("reading configuration from {}", path.display());
            Ok(Box::new(BufReader::new(file)))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(
                "no configuration file at {}, using compiled-in defaults",
                path.display()
            );
            Ok(empty_config())
        }
        Err(source) => Err(ConfigFileError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// A stream with no lines.
pub fn empty_config() -> Box<dyn BufRead> {
    Box::new(io::empty())
}

/// Resolves the platform config base directory including the `layercfg`
/// subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("layercfg"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("layercfg"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("layercfg")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
