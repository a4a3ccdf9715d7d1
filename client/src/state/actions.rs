//! Action-item checklist state.
//!
//! Counters are derived from the full list on every read; nothing is cached.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use crate::net::types::{ActionItem, ActionStatus};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionsState {
    pub items: Vec<ActionItem>,
}

impl ActionsState {
    pub fn new(items: Vec<ActionItem>) -> Self {
        Self { items }
    }

    /// Check or uncheck an item. Checking marks it `Completed`; unchecking
    /// always returns it to `Pending`, whatever it was before.
    ///
    /// Returns `false` if no item has `id`.
    pub fn set_completed(&mut self, id: &str, completed: bool) -> bool {
        let Some(item) = self.items.iter_mut().find(|a| a.id == id) else {
            return false;
        };
        item.status = if completed { ActionStatus::Completed } else { ActionStatus::Pending };
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|a| a.is_completed()).count()
    }

    pub fn overdue_count(&self) -> usize {
        self.items.iter().filter(|a| a.shows_overdue()).count()
    }
}

/// Banner text for `count` overdue items.
pub fn overdue_notice(count: usize) -> String {
    let plural = if count > 1 { "s" } else { "" };
    format!(
        "You have {count} overdue action item{plural}. Consider following up with the assignees or adjusting deadlines."
    )
}
