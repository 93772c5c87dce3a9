pub mod workspace_file;

pub use workspace_file::{JsonWorkspaceSource, WorkspaceData};
