pub mod backlog;
pub mod dashboard;
pub mod issue;
pub mod project;
pub mod providers;
pub mod reference;
pub mod search;
pub mod sprint;
pub mod time_left;

pub use backlog::{
    build_groups, BacklogItem, ExpandedGroups, SprintGroup, TaskGroup, TaskItem, TaskStatus,
};
pub use dashboard::{LeaderboardEntry, SprintProgress, StatusBreakdown};
pub use issue::{Issue, IssueId, IssuePriority, IssueStatus, IssueType};
pub use project::{Project, ProjectId, ProjectMethodology, ProjectStatus, UserId};
pub use providers::{IssueProvider, ProjectProvider, SprintProvider};
pub use search::{filter_groups, TitleMatcher};
pub use sprint::{Sprint, SprintId, SprintStatus};
pub use time_left::{time_left, time_left_from_now, TimeLeft};
