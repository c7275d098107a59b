//! Recommendation filter and automatic grouping of model ids.

use std::collections::HashSet;

use super::catalog::{list_groups, recommended_set};
use super::model::ModelGroup;

/// True if `model_id` appears in any group's membership lists.
pub fn is_recommended(model_id: &str) -> bool {
    recommended_set().contains(model_id)
}

/// Keeps only recommended ids, preserving input order.
pub fn filter_recommended<S: AsRef<str>>(model_ids: &[S]) -> Vec<String> {
    model_ids
        .iter()
        .map(AsRef::as_ref)
        .filter(|id| is_recommended(id))
        .map(str::to_string)
        .collect()
}

/// Buckets `model_ids` into the taxonomy groups.
///
/// Ids may mix both naming conventions. Groups are emitted in taxonomy order
/// and only when at least one id matched; ids matching no group are dropped.
/// An id claimed by an earlier group is never added to a later one.
pub fn auto_group<S: AsRef<str>>(model_ids: &[S]) -> Vec<ModelGroup> {
    let mut result = Vec::new();
    let mut matched: HashSet<&str> = HashSet::new();

    for group in list_groups() {
        let models: Vec<&str> = model_ids
            .iter()
            .map(AsRef::as_ref)
            .filter(|id| !matched.contains(id) && group.contains(id))
            .collect();

        if models.is_empty() {
            continue;
        }

        matched.extend(models.iter().copied());
        result.push(ModelGroup {
            id: group.id.to_string(),
            name: group.default_name.to_string(),
            models: models.into_iter().map(str::to_string).collect(),
        });
    }

    result
}
