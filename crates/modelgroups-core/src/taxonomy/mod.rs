//! Group taxonomy: the fixed, compiled-in model groups.
//!
//! The set of groups and their membership is decided at build time. Only the
//! group *names* are user data, handled by [`crate::group_settings`].

mod catalog;
mod display_name;
mod grouping;
mod model;

pub use catalog::{GROUPS, find_group, list_groups};
pub use display_name::display_name;
pub use grouping::{auto_group, filter_recommended, is_recommended};
pub use model::{GroupDefinition, ModelGroup, NamingConvention};
