pub mod config;
pub mod error;
pub mod group_settings;
pub mod taxonomy;

// Re-export common error type
pub use error::GroupSettingsError;
