//! Backlog search.
//!
//! Filters the task tree by a case-insensitive substring query. A match on a
//! sprint group's title keeps the whole group; otherwise only matching tasks
//! are kept. Surviving sprint groups with tasks are expanded so the matches
//! are visible; an empty sprint group keeps its expansion state.

use crate::backlog::{SprintGroup, TaskGroup};

/// Case-insensitive substring matcher.
#[derive(Debug, Clone, Default)]
pub struct TitleMatcher {
    query: String,
}

impl TitleMatcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }

    /// The lowercased query.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    pub fn matches(&self, title: &str) -> bool {
        if self.query.is_empty() {
            return true;
        }
        title.to_lowercase().contains(&self.query)
    }
}

/// Apply a search query to the task tree.
///
/// An empty query returns `groups` untouched, without forcing expansion.
pub fn filter_groups(groups: Vec<TaskGroup>, query: &str) -> Vec<TaskGroup> {
    let matcher = TitleMatcher::new(query);
    if matcher.is_empty() {
        return groups;
    }

    groups
        .into_iter()
        .filter_map(|group| filter_group(group, &matcher))
        .collect()
}

fn filter_group(group: TaskGroup, matcher: &TitleMatcher) -> Option<TaskGroup> {
    match group {
        TaskGroup::Sprint(sprint) => {
            if matcher.matches(&sprint.title) {
                let expanded = sprint.expanded || !sprint.tasks.is_empty();
                return Some(TaskGroup::Sprint(SprintGroup { expanded, ..sprint }));
            }
            let tasks: Vec<_> = sprint
                .tasks
                .into_iter()
                .filter(|task| matcher.matches(&task.title))
                .collect();
            if tasks.is_empty() {
                None
            } else {
                Some(TaskGroup::Sprint(SprintGroup {
                    tasks,
                    expanded: true,
                    ..sprint
                }))
            }
        }
        TaskGroup::Backlog(item) => {
            if matcher.matches(&item.title) {
                Some(TaskGroup::Backlog(item))
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backlog::{build_groups, ExpandedGroups};
    use crate::{Issue, Sprint};

    fn sample_groups() -> Vec<TaskGroup> {
        let sprints = vec![
            Sprint::new("s1", "Authentication"),
            Sprint::new("s2", "Payments"),
            Sprint::new("s3", "Empty sprint"),
        ];
        let issues = vec![
            Issue::new("i1", "Login form", "p1").with_sprint("s1"),
            Issue::new("i2", "Password reset", "p1").with_sprint("s1"),
            Issue::new("i3", "Card checkout", "p1").with_sprint("s2"),
            Issue::new("i4", "Refund LOGIN audit", "p1").with_sprint("s2"),
            Issue::new("i5", "Login analytics", "p1"),
            Issue::new("i6", "Dark mode", "p1"),
        ];
        build_groups(&sprints, &issues, &ExpandedGroups::new())
    }

    #[test]
    fn test_matcher_is_case_insensitive() {
        let matcher = TitleMatcher::new("AUTH");
        assert_eq!(matcher.query(), "auth");
        assert!(matcher.matches("Fix authentication bug"));
        assert!(!matcher.matches("Database"));
    }

    #[test]
    fn test_empty_query_is_identity() {
        let groups = sample_groups();
        assert_eq!(filter_groups(groups.clone(), ""), groups);
    }

    #[test]
    fn test_group_title_match_keeps_all_tasks() {
        let filtered = filter_groups(sample_groups(), "authentic");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id(), "s1");
        assert_eq!(filtered[0].tasks().len(), 2);
        assert!(filtered[0].is_expanded());
    }

    #[test]
    fn test_task_match_keeps_only_matching_tasks() {
        let filtered = filter_groups(sample_groups(), "login");
        let ids: Vec<&str> = filtered.iter().map(|g| g.id()).collect();
        assert_eq!(ids, vec!["s1", "s2", "i5"]);

        let s1: Vec<&str> = filtered[0].tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(s1, vec!["i1"]);
        let s2: Vec<&str> = filtered[1].tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(s2, vec!["i4"]);
        assert!(filtered[0].is_expanded());
        assert!(filtered[1].is_expanded());
        assert!(!filtered[2].is_expanded());
    }

    #[test]
    fn test_no_match_drops_everything() {
        assert!(filter_groups(sample_groups(), "kubernetes").is_empty());
    }

    #[test]
    fn test_empty_sprint_kept_on_title_match_without_expanding() {
        let filtered = filter_groups(sample_groups(), "empty");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id(), "s3");
        assert!(!filtered[0].is_expanded());
    }

    #[test]
    fn test_empty_sprint_keeps_user_expansion() {
        let sprints = vec![Sprint::new("s3", "Empty sprint")];
        let groups = build_groups(&sprints, &[], &["s3"].into_iter().collect());
        let filtered = filter_groups(groups, "empty");
        assert!(filtered[0].is_expanded());
    }

    #[test]
    fn test_filter_is_idempotent() {
        for query in ["login", "PAY", "mode", "e", "zzz"] {
            let once = filter_groups(sample_groups(), query);
            let twice = filter_groups(once.clone(), query);
            assert_eq!(once, twice, "query {query:?}");
        }
    }

    #[test]
    fn test_whitespace_is_literal() {
        assert!(filter_groups(sample_groups(), "login  form").is_empty());
        assert_eq!(filter_groups(sample_groups(), "login form").len(), 1);
    }
}
