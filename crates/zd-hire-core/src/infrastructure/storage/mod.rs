//! Storage infrastructure: settings file persistence.
//!
//! The `config` sub-module handles:
//!
//! - Resolving `~/.zd_hire` once per store.
//! - Reading and parsing the YAML file, discarding it when it is corrupt.
//! - Writing the full record back on request.

pub mod config;
