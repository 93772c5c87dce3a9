//! Dashboard summaries derived from a project's sprints and issues.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::backlog::TaskStatus;
use crate::issue::Issue;
use crate::project::UserId;
use crate::sprint::{Sprint, SprintId};

/// Issue counts per display status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    pub to_do: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl StatusBreakdown {
    pub fn total(&self) -> usize {
        self.to_do + self.in_progress + self.done
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintProgress {
    pub sprint_id: SprintId,
    pub name: String,
    pub total_issues: usize,
    pub done_issues: usize,
    pub percentage_done: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub assignee_id: UserId,
    pub total_points: u64,
}

pub fn status_breakdown(issues: &[Issue]) -> StatusBreakdown {
    issues
        .iter()
        .fold(StatusBreakdown::default(), |mut acc, issue| {
            match issue.status.display() {
                TaskStatus::ToDo => acc.to_do += 1,
                TaskStatus::InProgress => acc.in_progress += 1,
                TaskStatus::Done => acc.done += 1,
            }
            acc
        })
}

/// Rounded share of done issues, 0 when there are none.
pub fn completion_percentage(issues: &[Issue]) -> u8 {
    let done = issues.iter().filter(|issue| issue.is_done()).count();
    percentage(done, issues.len())
}

pub fn sprint_progress(sprints: &[Sprint], issues: &[Issue]) -> Vec<SprintProgress> {
    sprints
        .iter()
        .map(|sprint| {
            let (total, done) = issues
                .iter()
                .filter(|issue| issue.sprint_id.as_deref() == Some(sprint.id.as_str()))
                .fold((0, 0), |(total, done), issue| {
                    (total + 1, done + usize::from(issue.is_done()))
                });
            SprintProgress {
                sprint_id: sprint.id.clone(),
                name: sprint.name.clone(),
                total_issues: total,
                done_issues: done,
                percentage_done: percentage(done, total),
            }
        })
        .collect()
}

/// Points from done issues per assignee, highest first.
pub fn leaderboard(issues: &[Issue]) -> Vec<LeaderboardEntry> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for issue in issues.iter().filter(|issue| issue.is_done()) {
        if let Some(assignee) = issue.assignee_id.as_deref() {
            *totals.entry(assignee).or_default() += u64::from(issue.points);
        }
    }

    let mut entries: Vec<LeaderboardEntry> = totals
        .into_iter()
        .map(|(assignee_id, total_points)| LeaderboardEntry {
            assignee_id: assignee_id.to_string(),
            total_points,
        })
        .collect();
    entries.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.assignee_id.cmp(&b.assignee_id))
    });
    entries
}

fn percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::IssueStatus;

    fn issues() -> Vec<Issue> {
        vec![
            Issue::new("i1", "A", "p1")
                .with_sprint("s1")
                .with_status(IssueStatus::Done)
                .with_assignee("ada")
                .with_points(5),
            Issue::new("i2", "B", "p1")
                .with_sprint("s1")
                .with_status(IssueStatus::InProgress)
                .with_assignee("ada")
                .with_points(8),
            Issue::new("i3", "C", "p1")
                .with_sprint("s1")
                .with_status(IssueStatus::Done)
                .with_assignee("bob")
                .with_points(5),
            Issue::new("i4", "D", "p1")
                .with_status(IssueStatus::Done)
                .with_assignee("cy")
                .with_points(3),
            Issue::new("i5", "E", "p1").with_status(IssueStatus::Done).with_points(13),
            Issue::new("i6", "F", "p1"),
        ]
    }

    #[test]
    fn test_status_breakdown() {
        let breakdown = status_breakdown(&issues());
        assert_eq!(
            breakdown,
            StatusBreakdown {
                to_do: 1,
                in_progress: 1,
                done: 4
            }
        );
        assert_eq!(breakdown.total(), 6);
    }

    #[test]
    fn test_completion_percentage() {
        assert_eq!(completion_percentage(&issues()), 67);
        assert_eq!(completion_percentage(&[]), 0);
    }

    #[test]
    fn test_sprint_progress() {
        let sprints = vec![Sprint::new("s1", "Sprint 1"), Sprint::new("s2", "Sprint 2")];
        let progress = sprint_progress(&sprints, &issues());

        assert_eq!(progress.len(), 2);
        assert_eq!(progress[0].total_issues, 3);
        assert_eq!(progress[0].done_issues, 2);
        assert_eq!(progress[0].percentage_done, 67);
        assert_eq!(progress[1].total_issues, 0);
        assert_eq!(progress[1].percentage_done, 0);
    }

    #[test]
    fn test_leaderboard_orders_by_points_then_id() {
        let board = leaderboard(&issues());
        let ranked: Vec<(&str, u64)> = board
            .iter()
            .map(|e| (e.assignee_id.as_str(), e.total_points))
            .collect();
        assert_eq!(ranked, vec![("ada", 5), ("bob", 5), ("cy", 3)]);
    }

    #[test]
    fn test_leaderboard_totals_exceed_u32() {
        let issues = vec![
            Issue::new("i1", "A", "p1")
                .with_status(IssueStatus::Done)
                .with_assignee("u1")
                .with_points(u32::MAX),
            Issue::new("i2", "B", "p1")
                .with_status(IssueStatus::Done)
                .with_assignee("u1")
                .with_points(1),
        ];
        let board = leaderboard(&issues);
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].total_points, u64::from(u32::MAX) + 1);
    }
}
