use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::project::ProjectId;
use crate::reference;
use crate::time_left::{time_left, TimeLeft};

pub type SprintId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SprintStatus {
    #[default]
    Planning,
    Active,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    #[serde(rename = "_id")]
    pub id: SprintId,
    pub name: String,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: SprintStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(
        default,
        deserialize_with = "reference::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub project: Option<ProjectId>,
}

impl Sprint {
    pub fn new(id: impl Into<SprintId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_date: None,
            end_date: None,
            status: SprintStatus::Planning,
            goal: None,
            project: None,
        }
    }

    pub fn with_project(mut self, project_id: impl Into<ProjectId>) -> Self {
        self.project = Some(project_id.into());
        self
    }

    pub fn belongs_to(&self, project_id: &str) -> bool {
        self.project.as_deref() == Some(project_id)
    }

    /// An active sprint whose end date has passed.
    pub fn is_ended(&self, now: &DateTime<Utc>) -> bool {
        if self.status != SprintStatus::Active {
            return false;
        }
        self.end_date.map(|end| *now > end).unwrap_or(false)
    }

    pub fn time_left(&self, now: &DateTime<Utc>) -> Option<TimeLeft> {
        self.end_date.as_ref().map(|end| time_left(end, now))
    }
}
