//! Domain layer: the settings record itself, with no file-system access.

pub mod record;
