pub mod backlog;
pub mod scope;

pub use backlog::{BacklogLoader, ProjectData};
pub use scope::{LoadOutcome, ProjectScope, ScopePhase, ScopeSnapshot};
