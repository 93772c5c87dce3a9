use serde::Serialize;
use zyntro_domain::{ExpandedGroups, ProjectId, TaskGroup};

use crate::cli::BacklogArgs;
use crate::context::CliContext;
use crate::output;

#[derive(Serialize)]
struct BacklogView {
    project_id: ProjectId,
    query: String,
    groups: Vec<TaskGroup>,
}

pub async fn handle(ctx: &CliContext, args: BacklogArgs) -> anyhow::Result<()> {
    let data = ctx.project_data().await?;
    let expanded: ExpandedGroups = args.expand.into_iter().collect();
    let groups = data.groups(&expanded, &args.query);
    tracing::debug!(groups = groups.len(), query = %args.query, "Rendering backlog");

    output::output_success(BacklogView {
        project_id: data.project_id,
        query: args.query,
        groups,
    })
}
