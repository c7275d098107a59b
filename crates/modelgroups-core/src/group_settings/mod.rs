//! Group settings: user-chosen group names reconciled with the taxonomy.
//!
//! A [`GroupSettingsSession`] is opened from a [`GroupSettingsRepository`],
//! edited in memory and written back as a [`PersistedGroupSettings`] record.

mod model;
mod repository;
mod session;

pub use model::{GroupSettings, PersistedGroupSettings};
pub use repository::GroupSettingsRepository;
pub use session::GroupSettingsSession;
