use anyhow::{Context as _, Result, bail};
use modelgroups_core::group_settings::{GroupSettings, GroupSettingsSession};
use modelgroups_core::taxonomy::display_name;
use serde::Serialize;

use super::{Context, to_json};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupView<'a> {
    id: &'a str,
    name: &'a str,
    models: Vec<ModelView<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModelView<'a> {
    id: &'a str,
    display_name: String,
}

impl<'a> From<&'a GroupSettings> for GroupView<'a> {
    fn from(group: &'a GroupSettings) -> Self {
        Self {
            id: &group.id,
            name: &group.name,
            models: group
                .models
                .iter()
                .map(|id| ModelView {
                    id,
                    display_name: display_name(id),
                })
                .collect(),
        }
    }
}

fn render(groups: &[GroupSettings], json: bool) -> Result<String> {
    let views: Vec<GroupView<'_>> = groups.iter().map(GroupView::from).collect();
    if json {
        return to_json(&views);
    }

    let mut out = String::new();
    for view in &views {
        out.push_str(&format!("{} [{}]\n", view.name, view.id));
        for model in &view.models {
            out.push_str(&format!("  {:<32} {}\n", model.id, model.display_name));
        }
    }
    Ok(out)
}

/// Prints the groups as the settings surface would show them.
pub async fn show(ctx: &Context) -> Result<()> {
    let session = GroupSettingsSession::load(&ctx.repository, ctx.surface).await;
    print!("{}", render(session.groups(), ctx.json)?);
    Ok(())
}

/// Renames one group and saves the whole record.
pub async fn rename(ctx: &Context, id: &str, name: &str) -> Result<()> {
    let mut session = GroupSettingsSession::load(&ctx.repository, ctx.surface).await;

    if !session.rename_group(id, name) {
        let known: Vec<&str> = session.groups().iter().map(|g| g.id.as_str()).collect();
        bail!("Unknown group '{}' (expected one of: {})", id, known.join(", "));
    }

    if !session.is_dirty() {
        tracing::info!("Group '{}' already named '{}'", id, name);
    }

    session.save(&ctx.repository).await.with_context(|| {
        format!(
            "Failed to save group settings to {}",
            ctx.repository.path().display()
        )
    })?;

    if let Some(group) = session.group(id) {
        print!("{}", render(std::slice::from_ref(group), ctx.json)?);
    }
    Ok(())
}
