use super::*;
use crate::net::mock::mock_actions;
use crate::net::types::Priority;

fn action(id: &str, status: ActionStatus, is_overdue: bool) -> ActionItem {
    ActionItem {
        id: id.to_owned(),
        title: format!("Task {id}"),
        priority: Priority::Medium,
        status,
        is_overdue,
        ..ActionItem::default()
    }
}

#[test]
fn checking_overdue_item_clears_overdue_count() {
    let mut state = ActionsState::new(vec![action("a", ActionStatus::Pending, true)]);
    assert_eq!(state.completed_count(), 0);
    assert_eq!(state.overdue_count(), 1);

    assert!(state.set_completed("a", true));
    assert_eq!(state.completed_count(), 1);
    assert_eq!(state.overdue_count(), 0);
    // The stored flag is untouched.
    assert!(state.items[0].is_overdue);
}

#[test]
fn unchecking_returns_to_pending_not_in_progress() {
    let mut state = ActionsState::new(vec![action("a", ActionStatus::InProgress, false)]);
    state.set_completed("a", true);
    state.set_completed("a", false);
    assert_eq!(state.items[0].status, ActionStatus::Pending);
}

#[test]
fn unknown_id_changes_nothing() {
    let mut state = ActionsState::new(vec![action("a", ActionStatus::Pending, false)]);
    let before = state.clone();
    assert!(!state.set_completed("missing", true));
    assert_eq!(state, before);
}

#[test]
fn counters_match_filters_over_full_list() {
    let state = ActionsState::new(vec![
        action("a", ActionStatus::Completed, true),
        action("b", ActionStatus::Pending, true),
        action("c", ActionStatus::InProgress, true),
        action("d", ActionStatus::Completed, false),
        action("e", ActionStatus::Pending, false),
    ]);
    assert_eq!(state.len(), 5);
    assert_eq!(state.completed_count(), 2);
    assert_eq!(state.overdue_count(), 2);
}

#[test]
fn mock_actions_counts() {
    let mut state = ActionsState::new(mock_actions().unwrap());
    assert_eq!(state.completed_count(), 1);
    assert_eq!(state.overdue_count(), 1);

    state.set_completed("action-2", true);
    assert_eq!(state.completed_count(), 2);
    assert_eq!(state.overdue_count(), 0);
}

#[test]
fn empty_list_has_zero_counts() {
    let state = ActionsState::default();
    assert!(state.is_empty());
    assert_eq!(state.completed_count(), 0);
    assert_eq!(state.overdue_count(), 0);
}

#[test]
fn overdue_notice_pluralizes() {
    assert!(overdue_notice(1).starts_with("You have 1 overdue action item."));
    assert!(overdue_notice(3).starts_with("You have 3 overdue action items."));
}
