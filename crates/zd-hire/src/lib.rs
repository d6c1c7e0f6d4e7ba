//! zd-hire command-line library crate.
//!
//! Argument definitions live in [`cli`]; the subcommands themselves in
//! [`commands`].  The binary in `main.rs` only wires the two together with
//! logging and the settings store from `zd-hire-core`.

/// Argument parsing.
pub mod cli;

/// Subcommand implementations.
pub mod commands;
