use std::path::PathBuf;
use std::sync::Arc;
use zyntro_core::{AppConfig, ZyntroError, ZyntroResult};
use zyntro_persistence::{JsonKeyValueStore, JsonWorkspaceSource};
use zyntro_session::{BacklogLoader, ProjectData, ProjectScope};

/// Command-line overrides; anything left unset comes from `AppConfig`.
pub struct ContextOptions {
    pub file: Option<PathBuf>,
    pub actor: Option<String>,
    pub storage: Option<PathBuf>,
}

pub struct CliContext {
    pub actor_id: String,
    pub scope: ProjectScope,
    backlog: BacklogLoader,
}

impl CliContext {
    pub async fn load(options: ContextOptions, config: &AppConfig) -> ZyntroResult<Self> {
        let file = options
            .file
            .or_else(|| config.workspace_file.clone())
            .ok_or_else(|| {
                ZyntroError::Validation(
                    "--file is required (or set ZYNTRO_FILE or workspace_file in config)".into(),
                )
            })?;
        let actor_id = options
            .actor
            .or_else(|| config.actor_id.clone())
            .ok_or_else(|| {
                ZyntroError::Validation(
                    "--actor is required (or set ZYNTRO_ACTOR or actor_id in config)".into(),
                )
            })?;
        let storage = options
            .storage
            .unwrap_or_else(|| config.effective_storage_path());

        let source = Arc::new(JsonWorkspaceSource::new(&file));
        let store = Arc::new(JsonKeyValueStore::new(&storage));
        let scope = ProjectScope::new(source.clone(), store);
        scope.load(&actor_id).await?;

        Ok(Self {
            actor_id,
            scope,
            backlog: BacklogLoader::new(source.clone(), source),
        })
    }

    /// Sprints and issues of the active project.
    pub async fn project_data(&self) -> ZyntroResult<ProjectData> {
        self.backlog
            .fetch(&self.scope)
            .await?
            .ok_or_else(|| ZyntroError::NotFound(format!("No projects for {}", self.actor_id)))
    }
}
