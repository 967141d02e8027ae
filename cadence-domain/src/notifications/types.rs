use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared_types::NotificationId;

// --- Enums ---

/// The closed set of notification categories the dashboard produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    Reminder,
    Mention,
    Invite,
    AgendaUpdate,
    AiSummary,
}

impl NotificationKind {
    /// Every kind, in display order.
    pub const ALL: [NotificationKind; 5] = [
        NotificationKind::Reminder,
        NotificationKind::Mention,
        NotificationKind::Invite,
        NotificationKind::AgendaUpdate,
        NotificationKind::AiSummary,
    ];
}

/// Kind dimension of the drawer filter. `All` is the sentinel that disables
/// the dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum KindFilter {
    #[default]
    All,
    Only(NotificationKind),
}

/// Read-status dimension of the drawer filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    #[default]
    All,
    Read,
    Unread,
}

// --- Records ---

/// A single user-facing alert record with read/unread state.
///
/// `id` and `kind` never change after creation; `is_read` is the only mutable
/// field. Both text fields are searched case-insensitively by the filter
/// engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub primary_text: String,
    pub context_text: String,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        id: NotificationId,
        kind: NotificationKind,
        primary_text: impl Into<String>,
        context_text: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            kind,
            primary_text: primary_text.into(),
            context_text: context_text.into(),
            is_read: false,
            created_at,
        }
    }

    pub fn mark_as_read(&mut self) {
        self.is_read = true;
    }
}

/// The conjunctive (kind, status, search) triple currently narrowing the
/// displayed list. Transient state, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterCriteria {
    #[serde(default)]
    pub kind_filter: KindFilter,
    #[serde(default)]
    pub status_filter: StatusFilter,
    /// Free text; empty means unconstrained.
    #[serde(default)]
    pub search_query: String,
}

/// Flat record of delivery preferences, one switch per [`NotificationKind`]
/// plus a sound toggle. Replaced wholesale on save, never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NotificationPreferences {
    pub reminders: bool,
    pub mentions: bool,
    pub invites: bool,
    pub agenda_updates: bool,
    pub ai_summaries: bool,
    pub play_sound: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            reminders: true,
            mentions: true,
            invites: true,
            agenda_updates: true,
            ai_summaries: true,
            play_sound: true,
        }
    }
}

impl NotificationPreferences {
    /// Whether notifications of `kind` are enabled under these preferences.
    pub fn allows(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Reminder => self.reminders,
            NotificationKind::Mention => self.mentions,
            NotificationKind::Invite => self.invites,
            NotificationKind::AgendaUpdate => self.agenda_updates,
            NotificationKind::AiSummary => self.ai_summaries,
        }
    }
}

/// Aggregate counters over the full (unfiltered) notification list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct NotificationStats {
    pub total: usize,
    pub unread: usize,
    pub selected: usize,
}
