//! Multi-select bookkeeping for the notifications drawer.

use std::collections::HashSet;

use super::types::Notification;
use crate::shared_types::NotificationId;

/// The set of notification ids currently checked for bulk action.
///
/// Membership is independent of the active filter: ids that drop out of the
/// filtered view stay selected until they are explicitly cleared or their
/// notification is deleted. Pruning on delete keeps the invariant that every
/// member refers to a notification still present in the full list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<NotificationId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or removes a single id.
    pub fn set(&mut self, id: NotificationId, selected: bool) {
        if selected {
            self.ids.insert(id);
        } else {
            self.ids.remove(&id);
        }
    }

    /// Filter-scoped select-all: with `selected` the set becomes exactly the
    /// ids of the given filtered view; without, the set is cleared entirely.
    pub fn select_all(&mut self, selected: bool, filtered: &[Notification]) {
        if selected {
            self.ids = filtered.iter().map(|n| n.id.clone()).collect();
        } else {
            self.ids.clear();
        }
    }

    /// Drops every id in `deleted` from the selection.
    pub fn prune<'a>(&mut self, deleted: impl IntoIterator<Item = &'a NotificationId>) {
        for id in deleted {
            self.ids.remove(id);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &NotificationId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Snapshot of the selected ids, order unspecified.
    pub fn ids(&self) -> Vec<NotificationId> {
        self.ids.iter().cloned().collect()
    }
}
