use serde::{Deserialize, Serialize};

use super::types::{FilterCriteria, NotificationPreferences};
use crate::shared_types::NotificationId;

/// Every observable change to the drawer produces one of these; views
/// subscribe through the broadcast channel and re-render on receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NotificationEvent {
    NotificationRead {
        id: NotificationId,
    },
    NotificationsRead {
        ids: Vec<NotificationId>,
    },
    NotificationDeleted {
        id: NotificationId,
    },
    NotificationsDeleted {
        ids: Vec<NotificationId>,
    },
    SelectionChanged {
        selected_count: usize,
    },
    FilterChanged {
        criteria: FilterCriteria,
    },
    PreferencesSaved {
        preferences: NotificationPreferences,
    },
    DeleteConfirmationRequested {
        selected_count: usize,
    },
    DeleteConfirmationCancelled,
    DrawerOpened,
    DrawerClosed,
}
