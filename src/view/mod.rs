//! The task list pipeline: filter, sort, partition, reorder
//!
//! Everything in this module is a pure function from the task collection
//! and some control values to a newly allocated sequence; the profile is
//! never mutated from here. The full pipeline is:
//!
//! ```text
//! tasks -> partition (pinned / unpinned)
//!       -> filter each partition
//!       -> stable-sort each partition with the same key
//!       -> optional done-to-bottom split of the unpinned partition
//!       -> pinned ++ [not-done ++] done
//! ```
//!
//! Drag-reorder feeds back through [`reorder::apply_reorder`], which
//! restamps `position` on every displayed task.

mod filter;
mod reorder;
mod sort;

pub use filter::{DateFilter, TaskFilter};
pub use reorder::{apply_reorder, move_in_display};
pub use sort::{compare, sort_tasks};

use chrono::{DateTime, Utc};

use crate::domain::{PriorityRanks, SortKey, Task};

/// Control values for building the rendered list
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    pub filter: TaskFilter,
    pub sort: SortKey,
    pub done_to_bottom: bool,
}

/// Builds the rendered task list
///
/// Pinned tasks always come first, whatever the sort key; with
/// `done_to_bottom` enabled, completed unpinned tasks sink below the rest
/// while keeping their sorted order. Pinned tasks never sink, even when
/// done.
pub fn build_view(
    tasks: &[Task],
    opts: &ViewOptions,
    ranks: &PriorityRanks,
    now: DateTime<Utc>,
) -> Vec<Task> {
    let mut pinned: Vec<Task> = tasks
        .iter()
        .filter(|t| t.pinned && opts.filter.matches(t, now))
        .cloned()
        .collect();
    let mut unpinned: Vec<Task> = tasks
        .iter()
        .filter(|t| !t.pinned && opts.filter.matches(t, now))
        .cloned()
        .collect();

    sort_tasks(&mut pinned, opts.sort, ranks);
    sort_tasks(&mut unpinned, opts.sort, ranks);

    let mut out = pinned;
    if opts.done_to_bottom {
        let (done, not_done): (Vec<Task>, Vec<Task>) =
            unpinned.into_iter().partition(|t| t.done);
        out.extend(not_done);
        out.extend(done);
    } else {
        out.extend(unpinned);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PriorityRegistry, TaskDraft};
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, d, 12, 0, 0).unwrap()
    }

    fn task(name: &str, created: DateTime<Utc>, pinned: bool, done: bool) -> Task {
        let mut t = TaskDraft {
            pinned,
            ..TaskDraft::new(name)
        }
        .into_task(created);
        t.done = done;
        t
    }

    fn names(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.name.as_str()).collect()
    }

    fn ranks() -> PriorityRanks {
        PriorityRegistry::default().rank_table()
    }

    #[test]
    fn pinned_tasks_come_first_regardless_of_sort() {
        let tasks = vec![
            task("old unpinned", day(1), false, false),
            task("new pinned", day(9), true, false),
        ];
        let opts = ViewOptions::default();

        let view = build_view(&tasks, &opts, &ranks(), Utc::now());
        assert_eq!(names(&view), ["new pinned", "old unpinned"]);
    }

    #[test]
    fn done_to_bottom_moves_only_unpinned_done() {
        let tasks = vec![
            task("done pinned", day(1), true, true),
            task("done unpinned", day(2), false, true),
            task("open unpinned", day(3), false, false),
        ];
        let opts = ViewOptions {
            done_to_bottom: true,
            ..ViewOptions::default()
        };

        let view = build_view(&tasks, &opts, &ranks(), Utc::now());
        assert_eq!(names(&view), ["done pinned", "open unpinned", "done unpinned"]);
    }

    #[test]
    fn done_partition_keeps_sorted_order() {
        let mut tasks = vec![
            task("done late", day(5), false, true),
            task("done early", day(1), false, true),
            task("open", day(3), false, false),
        ];
        tasks.rotate_left(1);
        let opts = ViewOptions {
            done_to_bottom: true,
            ..ViewOptions::default()
        };

        let view = build_view(&tasks, &opts, &ranks(), Utc::now());
        assert_eq!(names(&view), ["open", "done early", "done late"]);
    }

    #[test]
    fn category_filter_preserves_input_order() {
        let cat = crate::domain::Category::new("Work", "#111111", None);
        let tagged = |name: &str, created| {
            TaskDraft {
                categories: vec![cat.clone()],
                ..TaskDraft::new(name)
            }
            .into_task(created)
        };
        let tasks = vec![
            tagged("first", day(1)),
            task("other", day(2), false, false),
            tagged("second", day(3)),
        ];
        let opts = ViewOptions {
            filter: TaskFilter {
                category: Some(cat.id),
                ..TaskFilter::default()
            },
            ..ViewOptions::default()
        };

        let view = build_view(&tasks, &opts, &ranks(), Utc::now());
        assert_eq!(names(&view), ["first", "second"]);
    }

    #[test]
    fn view_does_not_mutate_input() {
        let tasks = vec![task("b", day(2), false, false), task("a", day(1), false, false)];
        let before = tasks.clone();

        let _ = build_view(&tasks, &ViewOptions::default(), &ranks(), Utc::now());
        assert_eq!(tasks, before);
    }
}
