//! layercfg entry point.
//!
//! Captures the argument vector, initialises logging, opens the configuration
//! file and runs the resolution pipeline.  With `-print` / `-rules` the
//! result is dumped as JSON; otherwise a one-line summary is logged.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ CliContext::from_env()          -- argv, captured once
//!  └─ tracing_subscriber              -- RUST_LOG, else -verbosity
//!  └─ config_file::open_config()      -- -conf/-config or platform default
//!  └─ resolve_settings()              -- defaults → file → command line
//!  └─ report::*                       -- -print / -rules / -h
//! ```

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use layercfg::application::resolve_settings;
use layercfg::infrastructure::{config_file, report};
use layercfg_core::cli::{ArgType, CliContext, CommandLine, UsageBuilder};
use layercfg_core::domain::convert::expand_path;

fn main() -> anyhow::Result<()> {
    let ctx = CliContext::from_env();
    let mut usage = UsageBuilder::new();
    let mut cli = CommandLine::new(&ctx, &mut usage);

    // Initialise structured logging.  `RUST_LOG` wins over `-verbosity`.
    let verbosity = cli.get_string("-verbosity", "info", "Minimum level for message");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&verbosity)),
        )
        .init();

    let show_version = cli.get_bool("-v/-version", false, "Print version");
    let show_help = cli.get_bool("-h/-help", false, "Print help");
    let print_settings = cli.get_bool("-print", false, "Print the resolved settings as JSON");
    let print_rules = cli.get_bool("-rules", false, "Print the rule sections as JSON");
    let config_arg = cli.lookup("-conf/-config", ArgType::String, "Path to configuration file");

    if show_version {
        println!("layercfg {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let reader = match config_arg.map(expand_path) {
        Some(path) => config_file::open_config(&path)
            .with_context(|| format!("failed to open {}", path.display()))?,
        None => match config_file::default_config_path() {
            Ok(path) => config_file::open_config(&path)
                .with_context(|| format!("failed to open {}", path.display()))?,
            Err(e) => {
                warn!("{e}, using compiled-in defaults");
                config_file::empty_config()
            }
        },
    };

    let resolved = resolve_settings(reader, &mut cli).context("failed to resolve settings")?;

    // Help is printed only after resolution: the usage text is complete
    // once every registry option has been queried, so a fatal config error
    // exits before `-h` is honoured.
    if show_help {
        println!("usage: layercfg [-h/-help] [-v/-version] [-conf/-config file] ...\n");
        print!("{}", cli.usage().unwrap_or_default());
        return Ok(());
    }

    if print_settings {
        println!("{}", report::settings_json(&resolved.settings)?);
    }
    if print_rules {
        println!("{}", report::rules_json(&resolved.rules)?);
    }

    for line in report::problem_lines(&resolved) {
        warn!("{line}");
    }
    info!(
        "layercfg {} ready with {} rule sections",
        env!("CARGO_PKG_VERSION"),
        resolved.rules.len()
    );
    Ok(())
}
