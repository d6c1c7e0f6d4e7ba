//! YAML-based persistence of the [`ConfigRecord`] in `~/.zd_hire`.
//!
//! The file is a flat mapping of the four keys:
//!
//! ```yaml
//! github_token: ghp_xxxxxxxx
//! origin_repo: someone/exercise
//! local_path: /home/someone/src/exercise
//! branch: main
//! ```
//!
//! Unset fields are written as `null`.  Unknown keys are ignored on load.
//!
//! # Corrupt files
//!
//! A file that cannot be read or parsed is treated as if it did not exist: it
//! is deleted and the store starts out empty.  Only a failure to delete it is
//! reported to the caller.
//!
//! # Concurrency
//!
//! None.  One process is assumed to own the file at a time; there is no
//! locking and no atomic rename on write.  A truncated file left by a crash is
//! caught and discarded by the next load.

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::record::{ConfigRecord, Field};

/// Name of the settings file inside the user's home directory.
pub const CONFIG_FILE_NAME: &str = ".zd_hire";

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The user's home directory could not be determined.
    #[error("could not determine the user's home directory")]
    NoHomeDir,

    /// Writing the config file (or creating its directory) failed.
    #[error("I/O error writing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A corrupt config file was found but could not be removed.
    #[error("failed to remove unusable config at {path}: {source}")]
    Discard {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record could not be rendered as YAML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

/// Why an existing config file was rejected on load.
#[derive(Debug, Error)]
pub enum ParseFailure {
    /// The file exists but could not be read (permissions, not UTF-8, ...).
    #[error("could not read file: {0}")]
    Unreadable(#[source] std::io::Error),

    /// The content is not well-formed YAML.
    #[error("malformed YAML: {0}")]
    Syntax(#[from] serde_yaml::Error),

    /// The document is empty or its top level is not a mapping.
    #[error("top-level value is not a mapping")]
    NotAMapping,

    /// A known key holds a sequence, mapping or tagged value.
    #[error("value for `{key}` must be a string or null")]
    FieldType { key: &'static str },
}

// ── Path resolution ───────────────────────────────────────────────────────────

/// Resolves `<home>/.zd_hire` for the invoking user.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDir`] when no home directory is known.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(CONFIG_FILE_NAME))
}

// ── Parse / render ────────────────────────────────────────────────────────────

/// Parses config file content into a record.
///
/// Each of the four keys is looked up individually; anything else in the
/// mapping is ignored.  Absent keys and explicit nulls both leave the field
/// unset.  Booleans and numbers are kept in their textual form.
///
/// Files written by older releases stored the keys with a leading colon
/// (`:github_token`); those are accepted when the plain key is absent.
///
/// # Errors
///
/// See [`ParseFailure`].
pub fn parse_record(content: &str) -> Result<ConfigRecord, ParseFailure> {
    let value: Value = serde_yaml::from_str(content)?;
    let Value::Mapping(map) = value else {
        return Err(ParseFailure::NotAMapping);
    };

    let mut record = ConfigRecord::default();
    for field in Field::ALL {
        record.set(field, extract_field(&map, field)?);
    }
    Ok(record)
}

fn extract_field(map: &Mapping, field: Field) -> Result<Option<String>, ParseFailure> {
    let key = field.key();
    let legacy_key = format!(":{key}");
    let value = map.get(key).or_else(|| map.get(legacy_key.as_str()));

    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err(ParseFailure::FieldType { key }),
    }
}

/// Renders all four fields as YAML, nulls included.
///
/// # Errors
///
/// Returns [`ConfigError::Serialize`] if the YAML emitter fails.
pub fn render_record(record: &ConfigRecord) -> Result<String, ConfigError> {
    Ok(serde_yaml::to_string(record)?)
}

// ── Store ─────────────────────────────────────────────────────────────────────

/// The settings record together with the file it was loaded from.
///
/// The path is resolved once, when the store is opened, and reused by every
/// later [`save`](ConfigStore::save).
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    record: ConfigRecord,
}

impl ConfigStore {
    /// Opens the store backed by `~/.zd_hire`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoHomeDir`] if the home directory is unknown, or
    /// [`ConfigError::Discard`] if a corrupt file could not be removed.
    pub fn open() -> Result<Self, ConfigError> {
        Self::open_at(default_config_path()?)
    }

    /// Opens the store backed by `path`.
    ///
    /// A missing file yields an empty record.  An unreadable or unparseable
    /// file is deleted and also yields an empty record.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Discard`] if a corrupt file could not be removed.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let record = load_record(&path)?;
        Ok(Self { path, record })
    }

    /// The file this store reads from and writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self) -> &ConfigRecord {
        &self.record
    }

    pub fn record_mut(&mut self) -> &mut ConfigRecord {
        &mut self.record
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.record.get(field)
    }

    pub fn set(&mut self, field: Field, value: impl Into<Option<String>>) {
        self.record.set(field, value);
    }

    pub fn github_token(&self) -> Option<&str> {
        self.record.get(Field::GithubToken)
    }

    pub fn set_github_token(&mut self, value: impl Into<Option<String>>) {
        self.record.set(Field::GithubToken, value);
    }

    pub fn origin_repo(&self) -> Option<&str> {
        self.record.get(Field::OriginRepo)
    }

    pub fn set_origin_repo(&mut self, value: impl Into<Option<String>>) {
        self.record.set(Field::OriginRepo, value);
    }

    pub fn local_path(&self) -> Option<&str> {
        self.record.get(Field::LocalPath)
    }

    pub fn set_local_path(&mut self, value: impl Into<Option<String>>) {
        self.record.set(Field::LocalPath, value);
    }

    pub fn branch(&self) -> Option<&str> {
        self.record.get(Field::Branch)
    }

    pub fn set_branch(&mut self, value: impl Into<Option<String>>) {
        self.record.set(Field::Branch, value);
    }

    /// `true` when all four fields are set.  Does not touch the disk.
    pub fn is_valid(&self) -> bool {
        self.record.is_valid()
    }

    /// The fields still unset, in key order.
    pub fn missing_fields(&self) -> Vec<Field> {
        self.record.missing_fields()
    }

    /// Overwrites the config file with the current state of all four fields.
    ///
    /// Creates the parent directory if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] for file-system failures or
    /// [`ConfigError::Serialize`] if rendering fails.
    pub fn save(&self) -> Result<(), ConfigError> {
        let content = render_record(&self.record)?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(&self.path, content).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!(
            "saved config to {} (complete: {})",
            self.path.display(),
            self.record.is_valid()
        );
        Ok(())
    }
}

/// Reads `path`, falling back to an empty record when the file is missing or
/// unusable.  Unusable files are removed.
fn load_record(path: &Path) -> Result<ConfigRecord, ConfigError> {
    let parsed = match std::fs::read_to_string(path) {
        Ok(content) => parse_record(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("no config at {}, starting empty", path.display());
            return Ok(ConfigRecord::default());
        }
        Err(e) => Err(ParseFailure::Unreadable(e)),
    };

    match parsed {
        Ok(record) => {
            debug!(
                "loaded config from {} (missing: {:?})",
                path.display(),
                record.missing_fields()
            );
            Ok(record)
        }
        Err(reason) => {
            warn!("discarding unusable config at {}: {reason}", path.display());
            discard(path)?;
            Ok(ConfigRecord::default())
        }
    }
}

fn discard(path: &Path) -> Result<(), ConfigError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        // Already gone.
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(ConfigError::Discard {
            path: path.to_path_buf(),
            source,
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
