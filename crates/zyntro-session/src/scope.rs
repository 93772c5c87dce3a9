//! Active-project scope.
//!
//! Holds the projects visible to the current actor and which of them is
//! active. Every screen reads its data scope from one `ProjectScope` handle
//! built at session start. Only the most recently started `load` may change
//! the state; older loads that finish later are dropped.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use zyntro_core::{KeyValueStore, ZyntroResult, ACTIVE_PROJECT_KEY};
use zyntro_domain::{Project, ProjectId, ProjectProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopePhase {
    Uninitialized,
    Loading,
    Ready,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer load started before this one finished; its result was dropped.
    Superseded,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScopeSnapshot {
    pub phase: ScopePhase,
    pub actor_id: Option<String>,
    pub projects: Vec<Project>,
    pub active_project_id: Option<ProjectId>,
    pub last_error: Option<String>,
}

impl ScopeSnapshot {
    pub fn active_project(&self) -> Option<&Project> {
        let active = self.active_project_id.as_deref()?;
        self.projects.iter().find(|project| project.id == active)
    }
}

struct ScopeState {
    /// Outcome of the last applied load; `Loading` is derived, never stored.
    phase: ScopePhase,
    actor_id: Option<String>,
    projects: Vec<Project>,
    active_project_id: Option<ProjectId>,
    last_error: Option<String>,
}

impl ScopeState {
    fn new() -> Self {
        Self {
            phase: ScopePhase::Uninitialized,
            actor_id: None,
            projects: Vec::new(),
            active_project_id: None,
            last_error: None,
        }
    }

    fn contains(&self, project_id: &str) -> bool {
        self.projects.iter().any(|project| project.id == project_id)
    }
}

struct ScopeInner {
    provider: Arc<dyn ProjectProvider>,
    store: Arc<dyn KeyValueStore>,
    generation: AtomicU64,
    /// Highest generation whose load has returned or been dropped.
    finished: AtomicU64,
    state: Mutex<ScopeState>,
}

impl ScopeInner {
    fn phase(&self, state: &ScopeState) -> ScopePhase {
        if self.generation.load(Ordering::SeqCst) > self.finished.load(Ordering::SeqCst) {
            ScopePhase::Loading
        } else {
            state.phase
        }
    }
}

/// Marks a load as finished when dropped, so a cancelled `load` future does
/// not leave the scope in `Loading`.
struct LoadGuard<'a> {
    finished: &'a AtomicU64,
    generation: u64,
}

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        self.finished.fetch_max(self.generation, Ordering::SeqCst);
    }
}

/// Cheaply clonable handle; clones share the same state.
#[derive(Clone)]
pub struct ProjectScope {
    inner: Arc<ScopeInner>,
}

impl ProjectScope {
    pub fn new(provider: Arc<dyn ProjectProvider>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            inner: Arc::new(ScopeInner {
                provider,
                store,
                generation: AtomicU64::new(0),
                finished: AtomicU64::new(0),
                state: Mutex::new(ScopeState::new()),
            }),
        }
    }

    /// Fetch the actor's projects and resolve the active one.
    ///
    /// A persisted selection wins when it is still in the list; otherwise the
    /// first project is selected and persisted. On fetch failure the previous
    /// list and selection are kept and the error is returned.
    pub async fn load(&self, actor_id: &str) -> ZyntroResult<LoadOutcome> {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let _guard = LoadGuard {
            finished: &self.inner.finished,
            generation,
        };
        tracing::debug!(generation, actor_id, "Loading projects");

        let fetched = self.inner.provider.fetch_projects(actor_id).await;

        // Held until the result is applied so no other load can interleave.
        let mut state = self.inner.state.lock().await;
        if self.inner.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, actor_id, "Discarding superseded project load");
            return Ok(LoadOutcome::Superseded);
        }

        let projects = match fetched {
            Ok(projects) => projects,
            Err(err) => {
                tracing::warn!(actor_id, error = %err, "Failed to load projects");
                state.last_error = Some(err.to_string());
                return Err(err);
            }
        };

        let active_project_id = self.resolve_active(&projects).await;
        state.phase = if active_project_id.is_some() {
            ScopePhase::Ready
        } else {
            ScopePhase::Empty
        };
        state.actor_id = Some(actor_id.to_string());
        state.projects = projects;
        state.active_project_id = active_project_id;
        state.last_error = None;

        tracing::info!(
            actor_id,
            projects = state.projects.len(),
            active = state.active_project_id.as_deref().unwrap_or("<none>"),
            "Project scope loaded"
        );
        Ok(LoadOutcome::Applied)
    }

    /// Make `project_id` active if it is in the loaded list.
    /// Returns false, leaving the selection untouched, for unknown ids.
    pub async fn switch_to(&self, project_id: &str) -> bool {
        let mut state = self.inner.state.lock().await;
        if !state.contains(project_id) {
            tracing::debug!(project_id, "Ignoring switch to unknown project");
            return false;
        }

        state.active_project_id = Some(project_id.to_string());
        self.persist(project_id).await;
        tracing::info!(project_id, "Switched active project");
        true
    }

    pub async fn snapshot(&self) -> ScopeSnapshot {
        let state = self.inner.state.lock().await;
        ScopeSnapshot {
            phase: self.inner.phase(&state),
            actor_id: state.actor_id.clone(),
            projects: state.projects.clone(),
            active_project_id: state.active_project_id.clone(),
            last_error: state.last_error.clone(),
        }
    }

    pub async fn phase(&self) -> ScopePhase {
        let state = self.inner.state.lock().await;
        self.inner.phase(&state)
    }

    pub async fn projects(&self) -> Vec<Project> {
        self.inner.state.lock().await.projects.clone()
    }

    pub async fn active_project_id(&self) -> Option<ProjectId> {
        self.inner.state.lock().await.active_project_id.clone()
    }

    pub async fn active_project(&self) -> Option<Project> {
        self.snapshot().await.active_project().cloned()
    }

    async fn resolve_active(&self, projects: &[Project]) -> Option<ProjectId> {
        let first = projects.first()?;

        let persisted = match self.inner.store.get(ACTIVE_PROJECT_KEY).await {
            Ok(persisted) => persisted,
            Err(err) => {
                tracing::warn!(error = %err, "Could not read persisted active project");
                None
            }
        };

        if let Some(id) = persisted {
            if projects.iter().any(|project| project.id == id) {
                tracing::debug!(project_id = %id, "Restored persisted active project");
                return Some(id);
            }
            tracing::debug!(project_id = %id, "Persisted active project no longer available");
        }

        self.persist(&first.id).await;
        Some(first.id.clone())
    }

    async fn persist(&self, project_id: &str) {
        if let Err(err) = self.inner.store.set(ACTIVE_PROJECT_KEY, project_id).await {
            tracing::warn!(project_id, error = %err, "Could not persist active project");
        }
    }
}
