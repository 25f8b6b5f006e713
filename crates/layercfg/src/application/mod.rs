//! Application layer use cases.
//!
//! # What is the "application" layer? (for beginners)
//!
//! The application layer sits between the settings engine in
//! `layercfg-core` (pure parsing and conversion) and the infrastructure
//! (files, terminal output).  It decides the *order* in which the layers are
//! combined, but performs no I/O of its own: the caller opens the stream and
//! captures the argument vector.
//!
//! # Sub-modules
//!
//! - **`resolve_settings`** – the startup pipeline: parse the stream, apply
//!   defaults, apply the file, apply command-line overrides, hand the rule
//!   sections on and release the text store.

pub mod resolve_settings;

pub use resolve_settings::{resolve_settings, ResolveError, ResolvedConfig, RuleSection};
