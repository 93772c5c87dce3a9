use serde::{Deserialize, Serialize};
use std::fmt;

use crate::issue::{Issue, IssueId};
use crate::sprint::{Sprint, SprintId};

/// Display status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: IssueId,
    pub title: String,
    pub status: TaskStatus,
}

impl From<&Issue> for TaskItem {
    fn from(issue: &Issue) -> Self {
        Self {
            id: issue.id.clone(),
            title: issue.title.clone(),
            status: issue.status.display(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintGroup {
    pub id: SprintId,
    pub title: String,
    pub expanded: bool,
    pub tasks: Vec<TaskItem>,
}

impl SprintGroup {
    pub fn new(sprint: &Sprint, tasks: Vec<TaskItem>, expanded: bool) -> Self {
        Self {
            id: sprint.id.clone(),
            title: sprint.name.clone(),
            expanded,
            tasks,
        }
    }
}

/// An issue with no sprint, rendered as a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacklogItem {
    pub id: IssueId,
    pub title: String,
    pub status: TaskStatus,
}

impl From<&Issue> for BacklogItem {
    fn from(issue: &Issue) -> Self {
        Self {
            id: issue.id.clone(),
            title: issue.title.clone(),
            status: issue.status.display(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskGroup {
    Sprint(SprintGroup),
    Backlog(BacklogItem),
}

impl TaskGroup {
    pub fn id(&self) -> &str {
        match self {
            Self::Sprint(group) => &group.id,
            Self::Backlog(item) => &item.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Sprint(group) => &group.title,
            Self::Backlog(item) => &item.title,
        }
    }

    /// Child tasks; always empty for backlog items.
    pub fn tasks(&self) -> &[TaskItem] {
        match self {
            Self::Sprint(group) => &group.tasks,
            Self::Backlog(_) => &[],
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, Self::Sprint(group) if group.expanded)
    }

    /// Ids of every issue represented by this group.
    pub fn issue_ids(&self) -> Vec<&str> {
        match self {
            Self::Sprint(group) => group.tasks.iter().map(|t| t.id.as_str()).collect(),
            Self::Backlog(item) => vec![item.id.as_str()],
        }
    }
}
