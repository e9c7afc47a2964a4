//! Drag-reorder position assignment
//!
//! A drag moves one task onto another task's slot within the currently
//! displayed (filtered and sorted) list. The move is remove-and-reinsert,
//! not a swap. Afterwards every task that was on screen gets its
//! `position` restamped to its index in the new display order, which is
//! what the custom sort key reads back. Tasks filtered out of the display
//! keep whatever position they had, so positions across the whole store
//! can go sparse; the custom comparator tolerates that.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::Task;

/// Moves `dragged` to `target`'s index within the displayed id order
///
/// Returns the new display order, or `None` when either id is missing
/// from the displayed list or the two are equal (nothing to do).
pub fn move_in_display(displayed: &[Task], dragged: Uuid, target: Uuid) -> Option<Vec<Uuid>> {
    if dragged == target {
        return None;
    }
    let old_index = displayed.iter().position(|t| t.id == dragged)?;
    let new_index = displayed.iter().position(|t| t.id == target)?;

    let mut order: Vec<Uuid> = displayed.iter().map(|t| t.id).collect();
    let id = order.remove(old_index);
    order.insert(new_index, id);
    Some(order)
}

/// Applies a drag to the full task store, restamping positions
///
/// Produces a replacement task collection in which every task present in
/// the new display order carries `position = display index` and
/// `last_save = now`; all other tasks are untouched. Returns `None` when
/// the drag is a no-op.
pub fn apply_reorder(
    store: &[Task],
    displayed: &[Task],
    dragged: Uuid,
    target: Uuid,
    now: DateTime<Utc>,
) -> Option<Vec<Task>> {
    let order = move_in_display(displayed, dragged, target)?;

    let tasks = store
        .iter()
        .map(|task| match order.iter().position(|id| *id == task.id) {
            Some(idx) => Task {
                position: Some(idx as u32),
                last_save: Some(now),
                ..task.clone()
            },
            None => task.clone(),
        })
        .collect();
    Some(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskDraft;

    fn make_tasks(names: &[&str]) -> Vec<Task> {
        names
            .iter()
            .map(|n| TaskDraft::new(*n).into_task(Utc::now()))
            .collect()
    }

    fn display_names(store: &[Task], order: &[Uuid]) -> Vec<String> {
        order
            .iter()
            .map(|id| {
                store
                    .iter()
                    .find(|t| t.id == *id)
                    .map(|t| t.name.clone())
                    .unwrap_or_default()
            })
            .collect()
    }

    #[test]
    fn drag_down_moves_not_swaps() {
        // [A, B, C, D], drag D onto B -> [A, D, B, C]
        let tasks = make_tasks(&["A", "B", "C", "D"]);
        let order = move_in_display(&tasks, tasks[3].id, tasks[1].id).unwrap();
        assert_eq!(display_names(&tasks, &order), ["A", "D", "B", "C"]);
    }

    #[test]
    fn drag_up_moves_not_swaps() {
        // [A, B, C, D], drag A onto C -> [B, C, A, D]
        let tasks = make_tasks(&["A", "B", "C", "D"]);
        let order = move_in_display(&tasks, tasks[0].id, tasks[2].id).unwrap();
        assert_eq!(display_names(&tasks, &order), ["B", "C", "A", "D"]);
    }

    #[test]
    fn drag_onto_self_is_noop() {
        let tasks = make_tasks(&["A", "B"]);
        assert!(move_in_display(&tasks, tasks[0].id, tasks[0].id).is_none());
    }

    #[test]
    fn drag_with_unknown_id_is_noop() {
        let tasks = make_tasks(&["A", "B"]);
        assert!(move_in_display(&tasks, Uuid::new_v4(), tasks[0].id).is_none());
        assert!(move_in_display(&tasks, tasks[0].id, Uuid::new_v4()).is_none());
    }

    #[test]
    fn apply_reorder_restamps_positions_to_display_indices() {
        let tasks = make_tasks(&["A", "B", "C", "D"]);
        let now = Utc::now();

        let updated = apply_reorder(&tasks, &tasks, tasks[3].id, tasks[1].id, now).unwrap();

        let pos = |name: &str| {
            updated
                .iter()
                .find(|t| t.name == name)
                .and_then(|t| t.position)
        };
        assert_eq!(pos("A"), Some(0));
        assert_eq!(pos("D"), Some(1));
        assert_eq!(pos("B"), Some(2));
        assert_eq!(pos("C"), Some(3));
        assert!(updated.iter().all(|t| t.last_save == Some(now)));
    }

    #[test]
    fn tasks_outside_display_keep_their_position() {
        let mut store = make_tasks(&["A", "B", "C", "hidden"]);
        store[3].position = Some(7);
        let displayed = store[..3].to_vec();
        let now = Utc::now();

        let updated =
            apply_reorder(&store, &displayed, displayed[2].id, displayed[0].id, now).unwrap();

        let hidden = updated.iter().find(|t| t.name == "hidden").unwrap();
        assert_eq!(hidden.position, Some(7));
        assert!(hidden.last_save.is_none());

        // Displayed subset got dense 0..n positions
        let displayed_positions: Vec<_> = updated
            .iter()
            .filter(|t| t.name != "hidden")
            .filter_map(|t| t.position)
            .collect();
        let mut sorted = displayed_positions.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, [0, 1, 2]);
    }

    #[test]
    fn store_order_is_preserved_only_positions_change() {
        let tasks = make_tasks(&["A", "B", "C"]);
        let updated =
            apply_reorder(&tasks, &tasks, tasks[2].id, tasks[0].id, Utc::now()).unwrap();

        let store_names: Vec<_> = updated.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(store_names, ["A", "B", "C"]);
    }
}
