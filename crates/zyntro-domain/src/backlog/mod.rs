//! Backlog task tree.
//!
//! Sprints and issues are fetched independently; this module joins them into
//! one group per sprint followed by one leaf per unassigned issue.

pub mod builder;
pub mod expanded;
pub mod group;

pub use builder::build_groups;
pub use expanded::ExpandedGroups;
pub use group::{BacklogItem, SprintGroup, TaskGroup, TaskItem, TaskStatus};
