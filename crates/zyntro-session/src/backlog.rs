use serde::Serialize;
use std::sync::Arc;
use zyntro_core::ZyntroResult;
use zyntro_domain::{
    build_groups, filter_groups, ExpandedGroups, Issue, IssueProvider, ProjectId, Sprint,
    SprintProvider, TaskGroup,
};

use crate::scope::ProjectScope;

/// Sprints and issues of one project, as fetched.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectData {
    pub project_id: ProjectId,
    pub sprints: Vec<Sprint>,
    pub issues: Vec<Issue>,
}

impl ProjectData {
    /// Task tree with the given expansion state and search query applied.
    pub fn groups(&self, expanded: &ExpandedGroups, query: &str) -> Vec<TaskGroup> {
        filter_groups(build_groups(&self.sprints, &self.issues, expanded), query)
    }
}

/// Fetches backlog data for the active project.
#[derive(Clone)]
pub struct BacklogLoader {
    sprints: Arc<dyn SprintProvider>,
    issues: Arc<dyn IssueProvider>,
}

impl BacklogLoader {
    pub fn new(sprints: Arc<dyn SprintProvider>, issues: Arc<dyn IssueProvider>) -> Self {
        Self { sprints, issues }
    }

    /// `None` when the scope has no active project.
    pub async fn fetch(&self, scope: &ProjectScope) -> ZyntroResult<Option<ProjectData>> {
        let Some(project_id) = scope.active_project_id().await else {
            tracing::debug!("No active project; skipping backlog fetch");
            return Ok(None);
        };
        self.fetch_project(&project_id).await.map(Some)
    }

    pub async fn fetch_project(&self, project_id: &str) -> ZyntroResult<ProjectData> {
        let (sprints, issues) = futures::try_join!(
            self.sprints.fetch_sprints(project_id),
            self.issues.fetch_issues(project_id)
        )?;
        tracing::debug!(
            project_id,
            sprints = sprints.len(),
            issues = issues.len(),
            "Fetched backlog data"
        );
        Ok(ProjectData {
            project_id: project_id.to_string(),
            sprints,
            issues,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use zyntro_core::ZyntroError;
    use zyntro_domain::{Project, ProjectProvider};
    use zyntro_persistence::MemoryKeyValueStore;

    struct StaticSource {
        sprints: Vec<Sprint>,
        issues: Vec<Issue>,
        fail_issues: bool,
    }

    impl StaticSource {
        fn sample() -> Self {
            Self {
                sprints: vec![
                    Sprint::new("s1", "Sprint 1").with_project("p1"),
                    Sprint::new("s2", "Other project").with_project("p2"),
                ],
                issues: vec![
                    Issue::new("i1", "Login", "p1").with_sprint("s1"),
                    Issue::new("i2", "Signup", "p1"),
                    Issue::new("i3", "Elsewhere", "p2").with_sprint("s2"),
                ],
                fail_issues: false,
            }
        }
    }

    #[async_trait]
    impl ProjectProvider for StaticSource {
        async fn fetch_projects(&self, _actor_id: &str) -> ZyntroResult<Vec<Project>> {
            Ok(vec![Project::new("p1", "Vista"), Project::new("p2", "Atlas")])
        }
    }

    #[async_trait]
    impl SprintProvider for StaticSource {
        async fn fetch_sprints(&self, project_id: &str) -> ZyntroResult<Vec<Sprint>> {
            Ok(self
                .sprints
                .iter()
                .filter(|s| s.belongs_to(project_id))
                .cloned()
                .collect())
        }
    }

    #[async_trait]
    impl IssueProvider for StaticSource {
        async fn fetch_issues(&self, project_id: &str) -> ZyntroResult<Vec<Issue>> {
            if self.fail_issues {
                return Err(ZyntroError::Transport("503".into()));
            }
            Ok(self
                .issues
                .iter()
                .filter(|i| i.project_id == project_id)
                .cloned()
                .collect())
        }
    }

    fn setup(source: StaticSource) -> (ProjectScope, BacklogLoader) {
        let source = Arc::new(source);
        let scope = ProjectScope::new(source.clone(), Arc::new(MemoryKeyValueStore::new()));
        let loader = BacklogLoader::new(source.clone(), source);
        (scope, loader)
    }

    #[tokio::test]
    async fn test_fetch_without_active_project() {
        let (scope, loader) = setup(StaticSource::sample());
        assert!(loader.fetch(&scope).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fetch_follows_active_project() {
        let (scope, loader) = setup(StaticSource::sample());
        scope.load("u1").await.unwrap();

        let data = loader.fetch(&scope).await.unwrap().unwrap();
        assert_eq!(data.project_id, "p1");
        let groups = data.groups(&ExpandedGroups::new(), "");
        let ids: Vec<&str> = groups.iter().map(|g| g.id()).collect();
        assert_eq!(ids, vec!["s1", "i2"]);

        scope.switch_to("p2").await;
        let data = loader.fetch(&scope).await.unwrap().unwrap();
        assert_eq!(data.project_id, "p2");
        assert_eq!(data.issues.len(), 1);
    }

    #[tokio::test]
    async fn test_groups_apply_query_and_expansion() {
        let (scope, loader) = setup(StaticSource::sample());
        scope.load("u1").await.unwrap();
        let data = loader.fetch(&scope).await.unwrap().unwrap();

        let expanded: ExpandedGroups = ["s1"].into_iter().collect();
        let all = data.groups(&expanded, "");
        assert!(all[0].is_expanded());

        let filtered = data.groups(&ExpandedGroups::new(), "sign");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id(), "i2");
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let mut source = StaticSource::sample();
        source.fail_issues = true;
        let (scope, loader) = setup(source);
        scope.load("u1").await.unwrap();

        let err = loader.fetch(&scope).await.unwrap_err();
        assert!(err.is_transport());
    }
}
