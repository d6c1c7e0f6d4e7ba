//! The settings record persisted between runs.
//!
//! A [`ConfigRecord`] holds four independent, optional string values.  The
//! record is *valid* only when every one of them is set; there is no notion
//! of a partially valid record.
//!
//! ```rust
//! use zd_hire_core::{ConfigRecord, Field};
//!
//! let mut record = ConfigRecord::default();
//! assert!(!record.is_valid());
//!
//! record.set(Field::Branch, "main".to_string());
//! assert_eq!(record.get(Field::Branch), Some("main"));
//! assert_eq!(record.missing_fields().len(), 3);
//! ```

use std::fmt;

use serde::Serialize;

/// One of the four persisted settings.
///
/// The declaration order is the order keys are written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Credential used to authenticate against the remote repository service.
    GithubToken,
    /// Remote repository identifier, usually `owner/name`.
    OriginRepo,
    /// Filesystem path of the local working copy.
    LocalPath,
    /// Version-control branch name.
    Branch,
}

impl Field {
    /// Every field, in persisted key order.
    pub const ALL: [Field; 4] = [
        Field::GithubToken,
        Field::OriginRepo,
        Field::LocalPath,
        Field::Branch,
    ];

    /// The key under which this field is stored in the config file.
    pub fn key(self) -> &'static str {
        match self {
            Field::GithubToken => "github_token",
            Field::OriginRepo => "origin_repo",
            Field::LocalPath => "local_path",
            Field::Branch => "branch",
        }
    }

    /// Looks a field up by its persisted key.
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The four settings, each either set or unset.
///
/// Serializes as a flat mapping of the four keys; unset fields are written as
/// explicit nulls so the file always names every key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigRecord {
    pub github_token: Option<String>,
    pub origin_repo: Option<String>,
    pub local_path: Option<String>,
    pub branch: Option<String>,
}

impl ConfigRecord {
    /// Returns the current value of `field`.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Replaces the value of `field`, leaving the other three untouched.
    ///
    /// Accepts either a `String` or an `Option<String>`; pass `None` to unset.
    pub fn set(&mut self, field: Field, value: impl Into<Option<String>>) {
        *self.slot_mut(field) = value.into();
    }

    /// `true` when all four fields are set.
    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|f| self.slot(*f).is_some())
    }

    /// The fields that are currently unset, in key order.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.slot(*f).is_none())
            .collect()
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::GithubToken => &self.github_token,
            Field::OriginRepo => &self.origin_repo,
            Field::LocalPath => &self.local_path,
            Field::Branch => &self.branch,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::GithubToken => &mut self.github_token,
            Field::OriginRepo => &mut self.origin_repo,
            Field::LocalPath => &mut self.local_path,
            Field::Branch => &mut self.branch,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
