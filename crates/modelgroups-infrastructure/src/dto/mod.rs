//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs represent the versioned schema of the files this crate writes.
//! They are private to the infrastructure layer and handle the evolution of
//! the storage format over time.
//!
//! ## Schema Versioning (Semantic Versioning)
//!
//! - **MAJOR (X.0.0)**: Breaking changes (field removal, type changes)
//! - **MINOR (1.X.0)**: Backward-compatible additions (new optional fields)
//! - **PATCH (1.0.X)**: Backward-compatible fixes (not typically used for schema)

mod config_root;
mod group_settings;

pub use config_root::{ConfigRootV1_0_0, create_config_root_migrator};
pub use group_settings::{GroupSettingsV1_0_0, create_group_settings_migrator};
