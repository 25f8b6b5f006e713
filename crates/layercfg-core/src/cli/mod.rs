//! Command-line overlay.
//!
//! - **`context`** – the immutable captured argument vector.
//! - **`usage`** – the help text, built lazily as options are queried.
//! - **`overlay`** – [`CommandLine`], typed lookups over both.
//!
//! Precedence between the command line and the configuration file is left to
//! the caller: query the overlay where an override should win.

pub mod context;
pub mod overlay;
pub mod usage;

pub use context::CliContext;
pub use overlay::CommandLine;
pub use usage::{ArgType, UsageBuilder};
