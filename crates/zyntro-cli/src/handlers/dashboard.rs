use chrono::Utc;
use serde::Serialize;
use zyntro_domain::dashboard::{self, LeaderboardEntry, SprintProgress, StatusBreakdown};
use zyntro_domain::{Project, TimeLeft};

use crate::context::CliContext;
use crate::output;

#[derive(Serialize)]
struct DashboardView {
    project: Option<Project>,
    time_left: Option<TimeLeft>,
    completion_percentage: u8,
    status_breakdown: StatusBreakdown,
    sprint_progress: Vec<SprintProgress>,
    leaderboard: Vec<LeaderboardEntry>,
}

pub async fn handle(ctx: &CliContext) -> anyhow::Result<()> {
    let data = ctx.project_data().await?;
    let project = ctx.scope.active_project().await;
    let now = Utc::now();

    output::output_success(DashboardView {
        time_left: project.as_ref().and_then(|p| p.time_left(&now)),
        project,
        completion_percentage: dashboard::completion_percentage(&data.issues),
        status_breakdown: dashboard::status_breakdown(&data.issues),
        sprint_progress: dashboard::sprint_progress(&data.sprints, &data.issues),
        leaderboard: dashboard::leaderboard(&data.issues),
    })
}
