//! Task ordering
//!
//! One comparator per sort key, collected in a single table so every
//! fallback rule is explicit and testable. All sorting goes through
//! [`sort_tasks`], which uses a stable sort: the view applies the same key
//! to the pinned and unpinned partitions separately, and an unstable sort
//! would reshuffle ties on every render.

use std::cmp::Ordering;

use crate::domain::{PriorityRanks, SortKey, Task};

/// Compares two tasks under the given sort key
///
/// Fallback rules:
/// - `DueDate`: a task without a deadline orders after any task with one;
///   two deadline-less tasks compare equal, so stability keeps their
///   relative order.
/// - `Priority`: ids missing from the rank table rank 99, after all known
///   priorities.
/// - `Custom`: a task without a position orders after any task with one;
///   two position-less tasks fall back to ascending creation date, so
///   manual order degrades gracefully for tasks never reordered.
pub fn compare(key: SortKey, ranks: &PriorityRanks, a: &Task, b: &Task) -> Ordering {
    match key {
        SortKey::DateCreated => a.created_at.cmp(&b.created_at),
        SortKey::DueDate => match (a.deadline, b.deadline) {
            (Some(da), Some(db)) => da.cmp(&db),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::Alphabetical => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Priority => ranks.rank(&a.priority).cmp(&ranks.rank(&b.priority)),
        SortKey::Custom => match (a.position, b.position) {
            (Some(pa), Some(pb)) => pa.cmp(&pb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.created_at.cmp(&b.created_at),
        },
    }
}

/// Stable in-place sort under the given key
pub fn sort_tasks(tasks: &mut [Task], key: SortKey, ranks: &PriorityRanks) {
    tasks.sort_by(|a, b| compare(key, ranks, a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PriorityId, PriorityRegistry, TaskDraft};
    use chrono::{TimeZone, Utc};

    fn day(d: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, d, 12, 0, 0).unwrap()
    }

    fn names(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.name.as_str()).collect()
    }

    fn ranks() -> PriorityRanks {
        PriorityRegistry::default().rank_table()
    }

    #[test]
    fn date_created_sorts_ascending() {
        let mut tasks = vec![
            TaskDraft::new("newer").into_task(day(5)),
            TaskDraft::new("older").into_task(day(1)),
        ];
        sort_tasks(&mut tasks, SortKey::DateCreated, &ranks());
        assert_eq!(names(&tasks), ["older", "newer"]);
    }

    #[test]
    fn due_date_puts_deadline_less_tasks_last() {
        let mut tasks = vec![
            TaskDraft::new("no deadline").into_task(day(1)),
            TaskDraft {
                deadline: Some(day(20)),
                ..TaskDraft::new("late")
            }
            .into_task(day(2)),
            TaskDraft {
                deadline: Some(day(10)),
                ..TaskDraft::new("soon")
            }
            .into_task(day(3)),
        ];
        sort_tasks(&mut tasks, SortKey::DueDate, &ranks());
        assert_eq!(names(&tasks), ["soon", "late", "no deadline"]);
    }

    #[test]
    fn due_date_keeps_relative_order_of_deadline_less_tasks() {
        let mut tasks = vec![
            TaskDraft::new("first").into_task(day(9)),
            TaskDraft::new("second").into_task(day(1)),
        ];
        sort_tasks(&mut tasks, SortKey::DueDate, &ranks());
        // Both equal under the comparator; stability preserves input order
        assert_eq!(names(&tasks), ["first", "second"]);
    }

    #[test]
    fn alphabetical_ignores_case() {
        let mut tasks = vec![
            TaskDraft::new("banana").into_task(day(1)),
            TaskDraft::new("Apple").into_task(day(2)),
            TaskDraft::new("cherry").into_task(day(3)),
        ];
        sort_tasks(&mut tasks, SortKey::Alphabetical, &ranks());
        assert_eq!(names(&tasks), ["Apple", "banana", "cherry"]);
    }

    #[test]
    fn priority_follows_registry_rank() {
        let mut tasks = vec![
            TaskDraft {
                priority: Some(PriorityId::low()),
                ..TaskDraft::new("low")
            }
            .into_task(day(1)),
            TaskDraft {
                priority: Some(PriorityId::critical()),
                ..TaskDraft::new("critical")
            }
            .into_task(day(2)),
            TaskDraft {
                priority: Some(PriorityId::high()),
                ..TaskDraft::new("high")
            }
            .into_task(day(3)),
        ];
        sort_tasks(&mut tasks, SortKey::Priority, &ranks());
        assert_eq!(names(&tasks), ["critical", "high", "low"]);
    }

    #[test]
    fn unknown_priority_sorts_after_known_ones() {
        let mut tasks = vec![
            TaskDraft {
                priority: Some(PriorityId::new("someday")),
                ..TaskDraft::new("unranked")
            }
            .into_task(day(1)),
            TaskDraft {
                priority: Some(PriorityId::low()),
                ..TaskDraft::new("low")
            }
            .into_task(day(2)),
        ];
        sort_tasks(&mut tasks, SortKey::Priority, &ranks());
        assert_eq!(names(&tasks), ["low", "unranked"]);
    }

    #[test]
    fn custom_orders_by_position_then_missing_by_date() {
        // A(position=2), B(position=0), C(no position), D(no position, later date)
        let mut a = TaskDraft::new("A").into_task(day(1));
        a.position = Some(2);
        let mut b = TaskDraft::new("B").into_task(day(2));
        b.position = Some(0);
        let c = TaskDraft::new("C").into_task(day(3));
        let d = TaskDraft::new("D").into_task(day(4));

        let mut tasks = vec![a, b, c, d];
        sort_tasks(&mut tasks, SortKey::Custom, &ranks());
        assert_eq!(names(&tasks), ["B", "A", "C", "D"]);
    }

    #[test]
    fn sort_is_idempotent() {
        let mut tasks = vec![
            TaskDraft {
                deadline: Some(day(8)),
                ..TaskDraft::new("x")
            }
            .into_task(day(3)),
            TaskDraft::new("y").into_task(day(1)),
            TaskDraft {
                deadline: Some(day(2)),
                ..TaskDraft::new("z")
            }
            .into_task(day(2)),
        ];
        sort_tasks(&mut tasks, SortKey::DueDate, &ranks());
        let once = tasks.clone();
        sort_tasks(&mut tasks, SortKey::DueDate, &ranks());
        assert_eq!(tasks, once);
    }
}
