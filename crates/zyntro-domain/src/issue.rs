use serde::{Deserialize, Serialize};

use crate::backlog::TaskStatus;
use crate::project::{ProjectId, UserId};
use crate::reference;
use crate::sprint::SprintId;

pub type IssueId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IssueStatus {
    #[default]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl IssueStatus {
    /// Status as shown in task lists: `Open` reads as `To Do`.
    pub fn display(self) -> TaskStatus {
        match self {
            Self::Open => TaskStatus::ToDo,
            Self::InProgress => TaskStatus::InProgress,
            Self::Done => TaskStatus::Done,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IssuePriority {
    High,
    #[default]
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IssueType {
    Epic,
    Story,
    #[default]
    Task,
    Bug,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(rename = "_id")]
    pub id: IssueId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: IssueStatus,
    #[serde(default)]
    pub priority: IssuePriority,
    #[serde(rename = "type", default)]
    pub issue_type: IssueType,
    #[serde(default)]
    pub points: u32,
    pub project_id: ProjectId,
    #[serde(
        rename = "sprint",
        default,
        deserialize_with = "reference::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub sprint_id: Option<SprintId>,
    #[serde(
        rename = "assignedTo",
        default,
        deserialize_with = "reference::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub assignee_id: Option<UserId>,
}

impl Issue {
    pub fn new(
        id: impl Into<IssueId>,
        title: impl Into<String>,
        project_id: impl Into<ProjectId>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            status: IssueStatus::Open,
            priority: IssuePriority::Medium,
            issue_type: IssueType::Task,
            points: 0,
            project_id: project_id.into(),
            sprint_id: None,
            assignee_id: None,
        }
    }

    pub fn with_sprint(mut self, sprint_id: impl Into<SprintId>) -> Self {
        self.sprint_id = Some(sprint_id.into());
        self
    }

    pub fn with_status(mut self, status: IssueStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    pub fn with_assignee(mut self, assignee_id: impl Into<UserId>) -> Self {
        self.assignee_id = Some(assignee_id.into());
        self
    }

    pub fn is_done(&self) -> bool {
        self.status == IssueStatus::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_display_remap() {
        assert_eq!(IssueStatus::Open.display(), TaskStatus::ToDo);
        assert_eq!(IssueStatus::InProgress.display(), TaskStatus::InProgress);
        assert_eq!(IssueStatus::Done.display(), TaskStatus::Done);
    }

    #[test]
    fn test_deserialize_embedded_sprint() {
        let issue: Issue = serde_json::from_value(json!({
            "_id": "i1",
            "title": "Login screen",
            "status": "In Progress",
            "priority": "High",
            "type": "Story",
            "points": 5,
            "projectId": "p1",
            "sprint": { "_id": "s1", "name": "Sprint 1" },
            "assignedTo": { "_id": "u1", "name": "Ada" }
        }))
        .unwrap();

        assert_eq!(issue.sprint_id.as_deref(), Some("s1"));
        assert_eq!(issue.assignee_id.as_deref(), Some("u1"));
        assert_eq!(issue.status, IssueStatus::InProgress);
        assert_eq!(issue.issue_type, IssueType::Story);
        assert_eq!(issue.priority, IssuePriority::High);
    }

    #[test]
    fn test_deserialize_bare_and_null_sprint() {
        let bare: Issue = serde_json::from_value(json!({
            "_id": "i1", "title": "A", "projectId": "p1", "sprint": "s2"
        }))
        .unwrap();
        assert_eq!(bare.sprint_id.as_deref(), Some("s2"));

        let unassigned: Issue = serde_json::from_value(json!({
            "_id": "i2", "title": "B", "projectId": "p1", "sprint": null
        }))
        .unwrap();
        assert!(unassigned.sprint_id.is_none());
    }

    #[test]
    fn test_serializes_bare_sprint_id() {
        let issue = Issue::new("i1", "A", "p1").with_sprint("s1");
        let value = serde_json::to_value(&issue).unwrap();
        assert_eq!(value["sprint"], "s1");
        assert_eq!(value["status"], "Open");
        assert!(value.get("assignedTo").is_none());
    }
}
