//! Command-line argument definitions.
//!
//! The `#[derive(Parser)]` macros from `clap` generate the parser from the
//! struct fields and their `#[arg(...)]` attributes.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};

/// Inspect and edit the zd-hire settings file.
#[derive(Debug, Parser)]
#[command(
    name = "zd-hire",
    about = "Manage the zd-hire settings stored in ~/.zd_hire",
    version
)]
pub struct Cli {
    /// Settings file to use instead of `~/.zd_hire`.
    #[arg(long, global = true, env = "ZD_HIRE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the stored settings.
    Show {
        /// Print a JSON object instead of `key: value` lines.
        #[arg(long)]
        json: bool,

        /// Print the access token in full instead of masking it.
        #[arg(long)]
        reveal_token: bool,
    },

    /// Update one or more settings and save the whole record.
    Set(SetArgs),

    /// Report missing settings; exits with status 1 when any are unset.
    Check,

    /// Print the path of the settings file.
    Path,
}

/// New values for `zd-hire set`.  At least one is required.
#[derive(Debug, Default, Args)]
#[command(group(ArgGroup::new("fields").required(true).multiple(true)))]
pub struct SetArgs {
    /// GitHub access token.
    #[arg(long, group = "fields")]
    pub github_token: Option<String>,

    /// Origin repository, as `owner/name`.
    #[arg(long, group = "fields")]
    pub origin_repo: Option<String>,

    /// Path of the local working copy.
    #[arg(long, group = "fields")]
    pub local_path: Option<String>,

    /// Branch to work on.
    #[arg(long, group = "fields")]
    pub branch: Option<String>,
}
