pub mod backlog;
pub mod dashboard;
pub mod project;
pub mod time;
