//! Group settings repository trait.

use async_trait::async_trait;

use super::model::PersistedGroupSettings;
use crate::error::Result;

/// Persistence collaborator for group settings.
///
/// Any backend that can store the three structures of
/// [`PersistedGroupSettings`] as one unit is interchangeable.
#[async_trait]
pub trait GroupSettingsRepository: Send + Sync {
    /// Reads the persisted record.
    ///
    /// Fails with `StoreUnavailable` or `StoreCorrupt`.
    async fn read_settings(&self) -> Result<PersistedGroupSettings>;

    /// Writes mappings, names and order as a single operation.
    ///
    /// Fails with `StoreUnavailable` or `StoreWriteRejected`.
    async fn write_settings(&self, settings: &PersistedGroupSettings) -> Result<()>;
}
