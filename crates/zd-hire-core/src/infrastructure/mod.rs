//! Infrastructure layer: file-system adapters.
//!
//! **Dependency rule**: this layer may depend on `domain`, but the domain
//! layer MUST NOT import anything from here.

pub mod storage;
