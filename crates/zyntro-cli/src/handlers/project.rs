use serde::Serialize;
use zyntro_domain::{Project, ProjectId};
use zyntro_session::ScopePhase;

use crate::cli::ProjectAction;
use crate::context::CliContext;
use crate::output;

#[derive(Serialize)]
struct ProjectListing {
    phase: ScopePhase,
    active_project_id: Option<ProjectId>,
    count: usize,
    projects: Vec<Project>,
}

pub async fn handle(ctx: &CliContext, action: ProjectAction) -> anyhow::Result<()> {
    match action {
        ProjectAction::List => {
            let snapshot = ctx.scope.snapshot().await;
            output::output_success(ProjectListing {
                phase: snapshot.phase,
                active_project_id: snapshot.active_project_id,
                count: snapshot.projects.len(),
                projects: snapshot.projects,
            })?;
        }
        ProjectAction::Active => match ctx.scope.active_project().await {
            Some(project) => output::output_success(&project)?,
            None => return output::output_error(&format!("No projects for {}", ctx.actor_id)),
        },
        ProjectAction::Switch { id } => {
            if !ctx.scope.switch_to(&id).await {
                return output::output_error(&format!("Project not found: {}", id));
            }
            output::output_success(ctx.scope.active_project().await)?;
        }
    }
    Ok(())
}
