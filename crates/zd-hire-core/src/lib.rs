//! # zd-hire-core
//!
//! The per-user settings record used by `zd-hire`: a GitHub access token, the
//! origin repository, the local working-copy path and the branch name.
//!
//! The record lives in `~/.zd_hire` as a small YAML mapping.  A
//! [`ConfigStore`] loads it once when opened, hands out the four fields for
//! reading and writing, and writes the whole record back on
//! [`ConfigStore::save`].  A corrupt file is silently removed and replaced by
//! an empty record.
//!
//! ```no_run
//! use zd_hire_core::ConfigStore;
//!
//! let mut store = ConfigStore::open()?;
//! if !store.is_valid() {
//!     store.set_branch("main".to_string());
//!     store.save()?;
//! }
//! # Ok::<(), zd_hire_core::ConfigError>(())
//! ```
//!
//! - **`domain`** – the record and its validity rule, no I/O.
//! - **`infrastructure`** – the YAML file adapter.

pub mod domain;
pub mod infrastructure;

pub use domain::record::{ConfigRecord, Field};
pub use infrastructure::storage::config::{
    default_config_path, parse_record, render_record, ConfigError, ConfigStore, ParseFailure,
    CONFIG_FILE_NAME,
};
