//! Infrastructure layer.
//!
//! Contains the OS-facing adapters: locating and opening the configuration
//! file, and rendering resolved settings for the terminal.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `layercfg_core`, but MUST NOT be imported by the `application` layer.

pub mod config_file;
pub mod report;
