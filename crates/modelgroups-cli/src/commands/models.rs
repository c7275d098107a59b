use anyhow::Result;
use modelgroups_core::taxonomy::{
    ModelGroup, auto_group as group_models, display_name, filter_recommended,
};
use serde::Serialize;

use super::{Context, to_json};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DisplayNameEntry<'a> {
    id: &'a str,
    display_name: String,
}

fn render_display_names(model_ids: &[String], json: bool) -> Result<String> {
    let entries: Vec<DisplayNameEntry<'_>> = model_ids
        .iter()
        .map(|id| DisplayNameEntry {
            id,
            display_name: display_name(id),
        })
        .collect();

    if json {
        return to_json(&entries);
    }
    Ok(entries
        .iter()
        .map(|e| format!("{}\t{}\n", e.id, e.display_name))
        .collect())
}

fn render_groups(groups: &[ModelGroup], json: bool) -> Result<String> {
    if json {
        return to_json(groups);
    }
    let mut out = String::new();
    for group in groups {
        out.push_str(&format!("{} [{}]\n", group.name, group.id));
        for model in &group.models {
            out.push_str(&format!("  {}\n", model));
        }
    }
    Ok(out)
}

fn render_ids(model_ids: &[String], json: bool) -> Result<String> {
    if json {
        return to_json(model_ids);
    }
    Ok(model_ids.iter().map(|id| format!("{}\n", id)).collect())
}

pub fn display_names(ctx: &Context, model_ids: &[String]) -> Result<()> {
    print!("{}", render_display_names(model_ids, ctx.json)?);
    Ok(())
}

pub fn auto_group(ctx: &Context, model_ids: &[String]) -> Result<()> {
    let groups = group_models(model_ids);
    let grouped: usize = groups.iter().map(|g| g.models.len()).sum();
    if grouped < model_ids.len() {
        tracing::debug!("{} model id(s) matched no group", model_ids.len() - grouped);
    }
    print!("{}", render_groups(&groups, ctx.json)?);
    Ok(())
}

pub fn recommended(ctx: &Context, model_ids: &[String]) -> Result<()> {
    print!("{}", render_ids(&filter_recommended(model_ids), ctx.json)?);
    Ok(())
}
