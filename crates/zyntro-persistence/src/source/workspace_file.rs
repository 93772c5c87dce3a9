use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use zyntro_core::{ZyntroError, ZyntroResult};
use zyntro_domain::{Issue, IssueProvider, Project, ProjectProvider, Sprint, SprintProvider};

use crate::store::atomic_writer::AtomicWriter;

/// Contents of a workspace file, in the API's JSON shapes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceData {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub sprints: Vec<Sprint>,
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// Serves projects, sprints and issues from a JSON workspace file.
/// The file is re-read on every fetch.
#[derive(Debug, Clone)]
pub struct JsonWorkspaceSource {
    path: PathBuf,
}

impl JsonWorkspaceSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read(&self) -> ZyntroResult<WorkspaceData> {
        let bytes = AtomicWriter::read_all(&self.path).await.map_err(|e| {
            ZyntroError::Transport(format!(
                "Failed to read workspace {}: {}",
                self.path.display(),
                e
            ))
        })?;
        serde_json::from_slice(&bytes).map_err(|e| ZyntroError::Serialization(e.to_string()))
    }

    pub async fn write(&self, data: &WorkspaceData) -> ZyntroResult<()> {
        let bytes = serde_json::to_vec_pretty(data)
            .map_err(|e| ZyntroError::Serialization(e.to_string()))?;
        AtomicWriter::write_atomic(&self.path, &bytes).await
    }
}

#[async_trait]
impl ProjectProvider for JsonWorkspaceSource {
    async fn fetch_projects(&self, actor_id: &str) -> ZyntroResult<Vec<Project>> {
        let data = self.read().await?;
        let projects: Vec<Project> = data
            .projects
            .into_iter()
            .filter(|project| project.is_visible_to(actor_id))
            .collect();
        tracing::debug!("{} projects visible to {}", projects.len(), actor_id);
        Ok(projects)
    }
}

#[async_trait]
impl SprintProvider for JsonWorkspaceSource {
    async fn fetch_sprints(&self, project_id: &str) -> ZyntroResult<Vec<Sprint>> {
        let data = self.read().await?;
        Ok(data
            .sprints
            .into_iter()
            .filter(|sprint| sprint.belongs_to(project_id))
            .collect())
    }
}

#[async_trait]
impl IssueProvider for JsonWorkspaceSource {
    async fn fetch_issues(&self, project_id: &str) -> ZyntroResult<Vec<Issue>> {
        let data = self.read().await?;
        Ok(data
            .issues
            .into_iter()
            .filter(|issue| issue.project_id == project_id)
            .collect())
    }
}
