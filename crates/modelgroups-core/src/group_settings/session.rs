//! Group settings editing session.
//!
//! Reconciles the fixed taxonomy with persisted group names on load, and
//! expands the edited groups back into the persisted record on save.

use super::model::{GroupSettings, PersistedGroupSettings};
use super::repository::GroupSettingsRepository;
use crate::error::Result;
use crate::taxonomy::{NamingConvention, list_groups};

/// In-memory group list for one open settings surface.
///
/// Created fresh every time the surface opens and discarded on close. The
/// taxonomy decides which groups exist and what they contain; the store only
/// contributes names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSettingsSession {
    convention: NamingConvention,
    groups: Vec<GroupSettings>,
    dirty: bool,
}

impl GroupSettingsSession {
    /// Creates a session with every group at its default name.
    pub fn with_defaults(convention: NamingConvention) -> Self {
        Self {
            convention,
            groups: list_groups()
                .iter()
                .map(|def| GroupSettings::from_definition(def, convention))
                .collect(),
            dirty: false,
        }
    }

    /// Creates a session from the taxonomy, patched with persisted names.
    ///
    /// Entries for ids outside the taxonomy are ignored, as is the persisted
    /// order.
    pub fn from_persisted(convention: NamingConvention, persisted: &PersistedGroupSettings) -> Self {
        let mut session = Self::with_defaults(convention);
        for group in session.groups.iter_mut() {
            if let Some(name) = persisted.name_for(&group.id) {
                group.name = name.to_string();
            }
        }
        session
    }

    /// Loads the session from the store.
    ///
    /// Never fails: if the store cannot be read the failure is logged and the
    /// session falls back to taxonomy defaults.
    pub async fn load(
        repository: &dyn GroupSettingsRepository,
        convention: NamingConvention,
    ) -> Self {
        match repository.read_settings().await {
            Ok(persisted) => {
                tracing::debug!(
                    names = persisted.group_names.len(),
                    "Loaded persisted group settings"
                );
                Self::from_persisted(convention, &persisted)
            }
            Err(e) => {
                tracing::warn!("Failed to load group settings, using defaults: {}", e);
                Self::with_defaults(convention)
            }
        }
    }

    /// Naming convention the membership lists were taken from.
    pub fn convention(&self) -> NamingConvention {
        self.convention
    }

    /// Groups in taxonomy order.
    pub fn groups(&self) -> &[GroupSettings] {
        &self.groups
    }

    /// Looks up a group by id.
    pub fn group(&self, id: &str) -> Option<&GroupSettings> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// True when a rename happened since load or the last successful save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Renames a group. Any string is accepted, including an empty one.
    ///
    /// Returns `false` (and changes nothing) if no group has this id.
    pub fn rename_group(&mut self, id: &str, new_name: impl Into<String>) -> bool {
        let Some(group) = self.groups.iter_mut().find(|g| g.id == id) else {
            return false;
        };

        let new_name = new_name.into();
        if group.name != new_name {
            group.name = new_name;
            self.dirty = true;
        }
        true
    }

    /// Expands the groups into the persisted record.
    ///
    /// Order comes from the group list. If a model id were listed in two
    /// groups, the later group wins its mapping.
    pub fn to_persisted(&self) -> PersistedGroupSettings {
        let mut record = PersistedGroupSettings::new();
        for group in &self.groups {
            record.group_order.push(group.id.clone());
            record
                .group_names
                .insert(group.id.clone(), group.name.clone());
            for model_id in &group.models {
                record
                    .group_mappings
                    .insert(model_id.clone(), group.id.clone());
            }
        }
        record
    }

    /// Writes the session to the store.
    ///
    /// The write error is returned unchanged and the session keeps its edits,
    /// so the caller may retry. Borrowing `self` mutably for the whole call
    /// keeps the session alive until the write has finished.
    pub async fn save(&mut self, repository: &dyn GroupSettingsRepository) -> Result<()> {
        let record = self.to_persisted();

        if let Err(e) = repository.write_settings(&record).await {
            tracing::error!("Failed to save group settings: {}", e);
            return Err(e);
        }

        self.dirty = false;
        tracing::info!(groups = record.group_order.len(), "Saved group settings");
        Ok(())
    }
}
