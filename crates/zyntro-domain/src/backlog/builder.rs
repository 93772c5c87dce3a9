use std::collections::HashMap;

use super::expanded::ExpandedGroups;
use super::group::{BacklogItem, SprintGroup, TaskGroup, TaskItem};
use crate::issue::Issue;
use crate::sprint::Sprint;

/// Join sprints and issues into the backlog task tree.
///
/// Sprint groups come first, in sprint order, each holding its issues in
/// input order. Issues without a sprint follow as backlog items. An issue
/// pointing at a sprint that is not in `sprints` is treated as unassigned,
/// and a repeated sprint id only produces a group for its first occurrence,
/// so every issue lands in exactly one group.
pub fn build_groups(
    sprints: &[Sprint],
    issues: &[Issue],
    expanded: &ExpandedGroups,
) -> Vec<TaskGroup> {
    let mut buckets: HashMap<&str, Vec<TaskItem>> = HashMap::with_capacity(sprints.len());
    let mut order: Vec<&Sprint> = Vec::with_capacity(sprints.len());
    for sprint in sprints {
        if !buckets.contains_key(sprint.id.as_str()) {
            buckets.insert(sprint.id.as_str(), Vec::new());
            order.push(sprint);
        }
    }

    let mut backlog = Vec::new();
    for issue in issues {
        let bucket = issue
            .sprint_id
            .as_deref()
            .and_then(|sprint_id| buckets.get_mut(sprint_id));
        match bucket {
            Some(tasks) => tasks.push(TaskItem::from(issue)),
            None => backlog.push(TaskGroup::Backlog(BacklogItem::from(issue))),
        }
    }

    let mut groups: Vec<TaskGroup> = order
        .into_iter()
        .map(|sprint| {
            let tasks = buckets.remove(sprint.id.as_str()).unwrap_or_default();
            TaskGroup::Sprint(SprintGroup::new(
                sprint,
                tasks,
                expanded.is_expanded(&sprint.id),
            ))
        })
        .collect();
    groups.extend(backlog);
    groups
}
