use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reference;
use crate::time_left::{time_left, TimeLeft};

pub type ProjectId = String;
pub type UserId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectMethodology {
    Waterfall,
    Kanban,
    Scrum,
    Agile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub estimated_end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub actual_end_date: Option<DateTime<Utc>>,
    // Field name as spelled by the API.
    #[serde(rename = "prefferedMethodology", default)]
    pub methodology: Option<ProjectMethodology>,
    #[serde(
        default,
        deserialize_with = "reference::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_by: Option<UserId>,
    #[serde(default, deserialize_with = "reference::list")]
    pub team: Vec<UserId>,
}

impl Project {
    pub fn new(id: impl Into<ProjectId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            status: ProjectStatus::Pending,
            start_date: None,
            estimated_end_date: None,
            actual_end_date: None,
            methodology: None,
            created_by: None,
            team: Vec::new(),
        }
    }

    /// A project is visible to its creator and to every team member.
    pub fn is_visible_to(&self, actor_id: &str) -> bool {
        self.created_by.as_deref() == Some(actor_id) || self.team.iter().any(|m| m == actor_id)
    }

    /// Time left until the estimated end date, if one is set.
    pub fn time_left(&self, now: &DateTime<Utc>) -> Option<TimeLeft> {
        self.estimated_end_date
            .as_ref()
            .map(|end| time_left(end, now))
    }
}
