//! Data sources the client core reads from.
//!
//! Implementations wrap the REST API or, for local use and tests, a workspace
//! file. Every fetch is read-only and may be repeated.

use async_trait::async_trait;
use zyntro_core::ZyntroResult;

use crate::{Issue, Project, Sprint};

#[async_trait]
pub trait ProjectProvider: Send + Sync {
    /// Projects visible to the given actor.
    async fn fetch_projects(&self, actor_id: &str) -> ZyntroResult<Vec<Project>>;
}

#[async_trait]
pub trait SprintProvider: Send + Sync {
    async fn fetch_sprints(&self, project_id: &str) -> ZyntroResult<Vec<Sprint>>;
}

#[async_trait]
pub trait IssueProvider: Send + Sync {
    async fn fetch_issues(&self, project_id: &str) -> ZyntroResult<Vec<Issue>>;
}
