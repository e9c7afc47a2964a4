//! Property tests for the task list pipeline
//!
//! These check the ordering guarantees that hold for every task set and
//! sort key: idempotence, pinned-first, done-to-bottom, and the
//! deadline-less-last rule of the due-date sort.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use uuid::Uuid;

use tickit::domain::{PriorityId, PriorityRegistry, SortKey, Task};
use tickit::view::{build_view, sort_tasks, TaskFilter, ViewOptions};

fn at(offset_hours: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::hours(offset_hours)
}

fn arb_priority() -> impl Strategy<Value = PriorityId> {
    prop_oneof![
        Just(PriorityId::critical()),
        Just(PriorityId::high()),
        Just(PriorityId::medium()),
        Just(PriorityId::low()),
        Just(PriorityId::new("someday")), // not in the registry
    ]
}

fn arb_task() -> impl Strategy<Value = Task> {
    (
        any::<u128>(),
        "[a-z]{0,8}",
        0i64..2000,
        proptest::option::of(0i64..2000),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of(0u32..16),
        arb_priority(),
    )
        .prop_map(
            |(id, name, created, deadline, done, pinned, position, priority)| Task {
                id: Uuid::from_u128(id),
                name,
                description: None,
                done,
                pinned,
                color: "#b624ff".to_string(),
                emoji: None,
                created_at: at(created),
                deadline: deadline.map(at),
                categories: Vec::new(),
                priority,
                position,
                last_save: None,
            },
        )
}

fn arb_sort_key() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::DateCreated),
        Just(SortKey::DueDate),
        Just(SortKey::Alphabetical),
        Just(SortKey::Priority),
        Just(SortKey::Custom),
    ]
}

proptest! {
    #[test]
    fn sort_is_idempotent(mut tasks in proptest::collection::vec(arb_task(), 0..40), key in arb_sort_key()) {
        let ranks = PriorityRegistry::default().rank_table();
        sort_tasks(&mut tasks, key, &ranks);
        let once = tasks.clone();
        sort_tasks(&mut tasks, key, &ranks);
        prop_assert_eq!(tasks, once);
    }

    #[test]
    fn pinned_always_precede_unpinned(
        tasks in proptest::collection::vec(arb_task(), 0..40),
        key in arb_sort_key(),
        done_to_bottom in any::<bool>(),
    ) {
        let ranks = PriorityRegistry::default().rank_table();
        let opts = ViewOptions {
            filter: TaskFilter::default(),
            sort: key,
            done_to_bottom,
        };
        let view = build_view(&tasks, &opts, &ranks, Utc::now());

        let first_unpinned = view.iter().position(|t| !t.pinned).unwrap_or(view.len());
        prop_assert!(view[first_unpinned..].iter().all(|t| !t.pinned));
    }

    #[test]
    fn done_to_bottom_sinks_unpinned_done_tasks(
        tasks in proptest::collection::vec(arb_task(), 0..40),
        key in arb_sort_key(),
    ) {
        let ranks = PriorityRegistry::default().rank_table();
        let opts = ViewOptions {
            filter: TaskFilter::default(),
            sort: key,
            done_to_bottom: true,
        };
        let view = build_view(&tasks, &opts, &ranks, Utc::now());

        // Within the unpinned suffix, no not-done task may follow a done one
        let unpinned: Vec<_> = view.iter().filter(|t| !t.pinned).collect();
        let first_done = unpinned.iter().position(|t| t.done).unwrap_or(unpinned.len());
        prop_assert!(unpinned[first_done..].iter().all(|t| t.done));
    }

    #[test]
    fn due_date_sort_never_puts_deadline_less_first(
        mut tasks in proptest::collection::vec(arb_task(), 0..40),
    ) {
        let ranks = PriorityRegistry::default().rank_table();
        sort_tasks(&mut tasks, SortKey::DueDate, &ranks);

        let first_without = tasks
            .iter()
            .position(|t| t.deadline.is_none())
            .unwrap_or(tasks.len());
        prop_assert!(tasks[first_without..].iter().all(|t| t.deadline.is_none()));
    }

    #[test]
    fn view_output_is_a_permutation_of_matching_input(
        tasks in proptest::collection::vec(arb_task(), 0..40),
        key in arb_sort_key(),
        done_to_bottom in any::<bool>(),
    ) {
        let ranks = PriorityRegistry::default().rank_table();
        let opts = ViewOptions {
            filter: TaskFilter::default(),
            sort: key,
            done_to_bottom,
        };
        let view = build_view(&tasks, &opts, &ranks, Utc::now());

        let mut in_ids: Vec<_> = tasks.iter().map(|t| t.id).collect();
        let mut out_ids: Vec<_> = view.iter().map(|t| t.id).collect();
        in_ids.sort();
        out_ids.sort();
        prop_assert_eq!(in_ids, out_ids);
    }
}
