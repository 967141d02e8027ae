//! Seed data for the notification center.
//!
//! The drawer is driven by local, in-memory mock data; the provider trait is
//! the seam through which that data arrives. The contract is "already
//! well-formed, ids unique" — uniqueness is checked once at store
//! construction, nothing else.

use async_trait::async_trait;
use chrono::{Duration, Utc};

use super::errors::NotificationError;
use super::types::{Notification, NotificationKind, NotificationPreferences};
use crate::shared_types::NotificationId;

/// Initial drawer contents: the notification sequence and the default
/// preference record.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationSeed {
    pub notifications: Vec<Notification>,
    pub preferences: NotificationPreferences,
}

/// Supplies the initial notification sequence and default preferences.
#[async_trait]
pub trait NotificationSeedProvider: Send + Sync {
    async fn load_seed(&self) -> Result<NotificationSeed, NotificationError>;
}

/// The built-in mock dataset backing the dashboard drawer.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSeedProvider;

impl StaticSeedProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationSeedProvider for StaticSeedProvider {
    async fn load_seed(&self) -> Result<NotificationSeed, NotificationError> {
        Ok(NotificationSeed {
            notifications: mock_notifications(),
            preferences: NotificationPreferences::default(),
        })
    }
}

/// The mock drawer records. Creation times are staggered backwards from load
/// so the list reads newest-first in seed order.
pub fn mock_notifications() -> Vec<Notification> {
    let now = Utc::now();
    let entry = |id: &str, kind, primary: &str, context: &str, minutes_ago: i64, read: bool| {
        let mut n = Notification::new(
            NotificationId::new(id),
            kind,
            primary,
            context,
            now - Duration::minutes(minutes_ago),
        );
        n.is_read = read;
        n
    };

    vec![
        entry("n-1", NotificationKind::Reminder, "Daily standup starts in 15 minutes", "Engineering · Daily Standup", 5, false),
        entry("n-2", NotificationKind::Mention, "Priya mentioned you in the agenda", "Design · Weekly Critique", 40, false),
        entry("n-3", NotificationKind::AgendaUpdate, "3 agenda items added to Sprint Planning", "Engineering · Sprint Planning", 90, false),
        entry("n-4", NotificationKind::Invite, "Marcus invited you to Q3 Roadmap Review", "Product · Roadmap", 180, true),
        entry("n-5", NotificationKind::AiSummary, "Summary ready for yesterday's retro", "Engineering · Retrospective", 420, true),
        entry("n-6", NotificationKind::Reminder, "1:1 with Dana tomorrow at 9:00", "1:1 · Dana", 600, false),
        entry("n-7", NotificationKind::Mention, "Sam mentioned you in Marketing sync notes", "Marketing · Weekly Sync", 1440, true),
        entry("n-8", NotificationKind::AgendaUpdate, "Agenda reordered for Ops review", "Operations · Monthly Review", 2880, true),
    ]
}
