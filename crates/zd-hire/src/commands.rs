//! Implementations of the `zd-hire` subcommands.
//!
//! Each command works on an already opened [`ConfigStore`] and writes its
//! report to `out`, so the binary and the tests share the same code path.

use std::io::Write;

use anyhow::Context;
use tracing::debug;
use zd_hire_core::{ConfigRecord, ConfigStore, Field};

use crate::cli::{Command, SetArgs};

/// How a command finished, mapped to the process exit status by `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Command succeeded.
    Done,
    /// The record still has unset fields (`check` only).
    Incomplete,
}

/// Dispatches a parsed subcommand against `store`.
pub fn run(command: Command, store: &mut ConfigStore, out: &mut impl Write) -> anyhow::Result<Outcome> {
    match command {
        Command::Show { json, reveal_token } => show(store, json, reveal_token, out),
        Command::Set(args) => set(store, args, out),
        Command::Check => check(store, out),
        Command::Path => {
            writeln!(out, "{}", store.path().display())?;
            Ok(Outcome::Done)
        }
    }
}

/// Prints the four settings, one `key: value` line each, or as JSON.
pub fn show(
    store: &ConfigStore,
    json: bool,
    reveal_token: bool,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    let mut record = store.record().clone();
    if !reveal_token {
        record.github_token = record.github_token.as_deref().map(mask_token);
    }

    if json {
        let text = serde_json::to_string_pretty(&record).context("rendering settings as JSON")?;
        writeln!(out, "{text}")?;
    } else {
        writeln!(out, "# {}", store.path().display())?;
        write_lines(&record, out)?;
    }
    Ok(Outcome::Done)
}

fn write_lines(record: &ConfigRecord, out: &mut impl Write) -> std::io::Result<()> {
    for field in Field::ALL {
        match record.get(field) {
            Some(value) => writeln!(out, "{field}: {value}")?,
            None => writeln!(out, "{field}: (unset)")?,
        }
    }
    Ok(())
}

/// Applies the given values and writes the full record back to disk.
pub fn set(store: &mut ConfigStore, args: SetArgs, out: &mut impl Write) -> anyhow::Result<Outcome> {
    let SetArgs {
        github_token,
        origin_repo,
        local_path,
        branch,
    } = args;

    let updates = [
        (Field::GithubToken, github_token),
        (Field::OriginRepo, origin_repo),
        (Field::LocalPath, local_path),
        (Field::Branch, branch),
    ];
    for (field, value) in updates {
        if let Some(value) = value {
            debug!("updating {field}");
            store.set(field, value);
        }
    }

    store
        .save()
        .with_context(|| format!("saving settings to {}", store.path().display()))?;
    writeln!(out, "saved {}", store.path().display())?;

    let missing = store.missing_fields();
    if !missing.is_empty() {
        writeln!(out, "still missing: {}", join_fields(&missing))?;
    }
    Ok(Outcome::Done)
}

/// Lists unset fields.  Returns [`Outcome::Incomplete`] when there are any.
pub fn check(store: &ConfigStore, out: &mut impl Write) -> anyhow::Result<Outcome> {
    if store.is_valid() {
        writeln!(out, "settings complete")?;
        return Ok(Outcome::Done);
    }

    writeln!(out, "missing: {}", join_fields(&store.missing_fields()))?;
    Ok(Outcome::Incomplete)
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Hides all but the last four characters of tokens longer than eight
/// characters, and the whole of shorter ones.
pub fn mask_token(token: &str) -> String {
    let count = token.chars().count();
    if count <= 8 {
        return "****".to_string();
    }
    let tail: String = token.chars().skip(count - 4).collect();
    format!("****{tail}")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
