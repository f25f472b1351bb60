//! Property-based tests for fractional task ordering.
//!
//! Uses proptest to verify:
//! 1. Dropping a task onto another places it immediately before the target.
//! 2. Appending always lands after every existing order.
//! 3. Renumbering keeps the display sequence and removes tight gaps.

use proptest::prelude::*;
use taskzen::project::domain::ProjectId;
use taskzen::task::domain::{
    DragPayload, DropDecision, DropTarget, TaskId, TaskOrder, TaskPlacement, TaskStatus,
    ordering::{append_order, needs_renumbering, plan_drop, renumber},
};

/// Distinct orders on a quarter grid, sorted ascending, so that both the
/// half-step offset and the midpoint rule are reached.
fn arb_column_orders() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::btree_set(-4000_i32..4000, 2..16)
        .prop_map(|set| set.into_iter().map(|n| f64::from(n) / 4.0).collect())
}

fn placements(orders: &[f64]) -> Vec<TaskPlacement> {
    orders
        .iter()
        .map(|value| TaskPlacement {
            task_id: TaskId::new(),
            status: TaskStatus::Todo,
            order: TaskOrder::new(*value).expect("finite order"),
        })
        .collect()
}

fn sequence(column: &[TaskPlacement]) -> Vec<TaskId> {
    let mut sorted = column.to_vec();
    sorted.sort_by_key(|placement| placement.order);
    sorted.into_iter().map(|placement| placement.task_id).collect()
}

proptest! {
    #[test]
    fn drop_on_task_lands_immediately_before_target(
        orders in arb_column_orders(),
        dragged_seed in any::<prop::sample::Index>(),
        target_seed in any::<prop::sample::Index>(),
    ) {
        let mut column = placements(&orders);
        let dragged = dragged_seed.index(column.len());
        let target = target_seed.index(column.len());
        prop_assume!(dragged != target);
        let project = ProjectId::new();
        let payload = DragPayload {
            task_id: Some(column[dragged].task_id),
            source_project: project,
            current_status: TaskStatus::Todo,
        };
        let target_placement = column[target].clone();

        let decision = plan_drop(
            &payload,
            project,
            &DropTarget::Task(target_placement.clone()),
            &column,
        );

        match decision {
            DropDecision::Reorder { task_id, order } => {
                prop_assert_eq!(task_id, column[dragged].task_id);
                prop_assert!(order < target_placement.order);
                column[dragged].order = order;
            }
            DropDecision::Ignore(_) => {}
            DropDecision::Move { .. } => prop_assert!(false, "same-column drop must not move"),
        }
        let ids = sequence(&column);
        let target_at = ids
            .iter()
            .position(|id| *id == target_placement.task_id)
            .expect("target listed");
        prop_assert!(target_at > 0);
        prop_assert_eq!(ids[target_at - 1], column[dragged].task_id);
    }

    #[test]
    fn append_lands_after_every_order(
        values in prop::collection::vec(-1.0e9_f64..1.0e9, 0..32),
    ) {
        let orders: Vec<TaskOrder> = values
            .iter()
            .map(|value| TaskOrder::new(*value).expect("finite order"))
            .collect();

        let appended = append_order(orders.iter().copied());

        prop_assert!(orders.iter().all(|order| *order < appended));
        if orders.is_empty() {
            prop_assert_eq!(appended, TaskOrder::ZERO);
        }
    }

    #[test]
    fn renumber_preserves_sequence_and_spacing(
        orders in arb_column_orders(),
        spacing in 0.5_f64..100.0,
    ) {
        let mut column = placements(&orders);
        let before = sequence(&column);

        for (task_id, order) in renumber(&column, spacing) {
            let placement = column
                .iter_mut()
                .find(|placement| placement.task_id == task_id)
                .expect("renumbered task listed");
            placement.order = order;
        }

        prop_assert_eq!(sequence(&column), before);
        let renumbered: Vec<TaskOrder> = column.iter().map(|placement| placement.order).collect();
        prop_assert!(!needs_renumbering(&renumbered, spacing / 2.0));
        prop_assert_eq!(renumbered.first().copied(), Some(TaskOrder::ZERO));
    }
}
