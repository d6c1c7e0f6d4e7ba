//! zd-hire — entry point.
//!
//! ```text
//! zd-hire [--config <PATH>] <COMMAND>
//!
//! Commands:
//!   show   Print the stored settings (token masked unless --reveal-token)
//!   set    Update one or more settings and save the whole record
//!   check  Report missing settings; exit status 1 when any are unset
//!   path   Print the path of the settings file
//! ```
//!
//! | Variable         | Default       | Description                  |
//! |------------------|---------------|------------------------------|
//! | `ZD_HIRE_CONFIG` | `~/.zd_hire`  | Settings file to operate on  |
//! | `RUST_LOG`       | `warn`        | Log filter (logs go to stderr) |

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use zd_hire::cli::{Cli, Command};
use zd_hire::commands::{self, Outcome};
use zd_hire_core::{default_config_path, ConfigStore};

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so command output on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let path = match cli.config {
        Some(path) => path,
        None => default_config_path().context("locating the settings file")?,
    };
    debug!("using settings file {}", path.display());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Printing the path must not load (and possibly discard) the file.
    if matches!(cli.command, Command::Path) {
        writeln!(out, "{}", path.display())?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut store = ConfigStore::open_at(&path)
        .with_context(|| format!("opening settings file {}", path.display()))?;
    let outcome = commands::run(cli.command, &mut store, &mut out)?;

    Ok(match outcome {
        Outcome::Done => ExitCode::SUCCESS,
        Outcome::Incomplete => ExitCode::FAILURE,
    })
}
