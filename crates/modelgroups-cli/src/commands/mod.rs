pub mod groups;
pub mod models;

use anyhow::Result;
use modelgroups_core::taxonomy::NamingConvention;
use modelgroups_infrastructure::FileGroupSettingsRepository;
use serde::Serialize;

/// Resolved settings shared by all subcommands.
pub struct Context {
    pub repository: FileGroupSettingsRepository,
    pub surface: NamingConvention,
    pub json: bool,
}

pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
