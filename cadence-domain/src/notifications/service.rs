use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info};

use super::errors::NotificationError;
use super::events::NotificationEvent;
use super::filter;
use super::gate::ConfirmationGate;
use super::seed::NotificationSeedProvider;
use super::selection::SelectionSet;
use super::types::{
    FilterCriteria, KindFilter, Notification, NotificationPreferences, NotificationStats,
    StatusFilter,
};
use crate::shared_types::NotificationId;

/// Read model handed to rendering collaborators: the filtered view plus
/// everything a drawer needs to paint itself.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerSnapshot {
    /// Notifications passing the current criteria, in list order.
    pub visible: Vec<Notification>,
    /// The full selection, including ids currently filtered out of view.
    pub selected_ids: Vec<NotificationId>,
    pub criteria: FilterCriteria,
    pub stats: NotificationStats,
    pub gate: ConfirmationGate,
    pub is_open: bool,
    pub preferences: NotificationPreferences,
}

// --- NotificationCenter Trait ---

/// The notifications drawer controller: owns the authoritative list, the
/// filter criteria, the selection set and the bulk-delete confirmation gate.
///
/// Absent-id operations are benign no-ops, never errors. Every observable
/// change is announced on the broadcast channel returned by [`subscribe`].
///
/// [`subscribe`]: NotificationCenter::subscribe
#[async_trait]
pub trait NotificationCenter: Send + Sync {
    async fn snapshot(&self) -> DrawerSnapshot;
    async fn unread_count(&self) -> usize;

    async fn mark_as_read(&self, id: &NotificationId);
    async fn mark_selected_as_read(&self);
    async fn delete(&self, id: &NotificationId);

    async fn set_kind_filter(&self, kind_filter: KindFilter);
    async fn set_status_filter(&self, status_filter: StatusFilter);
    async fn set_search_query(&self, query: String);

    async fn select(&self, id: NotificationId, selected: bool);
    async fn select_all(&self, selected: bool);

    async fn request_delete_selected(&self);
    async fn confirm_delete_selected(&self);
    async fn cancel_delete_selected(&self);

    async fn save_preferences(&self, preferences: NotificationPreferences);

    async fn open(&self);
    async fn close(&self);
    /// External keyboard boundary: closes the drawer, but only while open.
    async fn handle_escape(&self);

    fn subscribe(&self) -> broadcast::Receiver<NotificationEvent>;
}

// --- DefaultNotificationCenter Implementation ---

#[derive(Debug)]
struct DrawerState {
    notifications: Vec<Notification>,
    preferences: NotificationPreferences,
    criteria: FilterCriteria,
    selection: SelectionSet,
    gate: ConfirmationGate,
    is_open: bool,
}

pub struct DefaultNotificationCenter {
    state: Arc<RwLock<DrawerState>>,
    event_publisher: broadcast::Sender<NotificationEvent>,
}

impl DefaultNotificationCenter {
    /// Builds the drawer controller from a seed provider.
    ///
    /// The provider contract is "ids unique"; a violation is the only way
    /// construction fails.
    pub async fn new(
        seed_provider: Arc<dyn NotificationSeedProvider>,
        broadcast_capacity: usize,
    ) -> Result<Self, NotificationError> {
        let seed = seed_provider.load_seed().await?;

        let mut seen: HashSet<NotificationId> = HashSet::with_capacity(seed.notifications.len());
        for notification in &seed.notifications {
            if !seen.insert(notification.id.clone()) {
                return Err(NotificationError::DuplicateId(notification.id.clone()));
            }
        }

        info!(count = seed.notifications.len(), "Notification center seeded");
        let (event_publisher, _) = broadcast::channel(broadcast_capacity);
        Ok(Self {
            state: Arc::new(RwLock::new(DrawerState {
                notifications: seed.notifications,
                preferences: seed.preferences,
                criteria: FilterCriteria::default(),
                selection: SelectionSet::new(),
                gate: ConfirmationGate::default(),
                is_open: false,
            })),
            event_publisher,
        })
    }

    fn publish_event(&self, event: NotificationEvent) {
        if self.event_publisher.send(event).is_err() {
            debug!("No active subscribers for notification event");
        }
    }
}

#[async_trait]
impl NotificationCenter for DefaultNotificationCenter {
    async fn snapshot(&self) -> DrawerSnapshot {
        let state = self.state.read().await;
        DrawerSnapshot {
            visible: filter::filter_view(&state.notifications, &state.criteria),
            selected_ids: state.selection.ids(),
            criteria: state.criteria.clone(),
            stats: NotificationStats {
                total: state.notifications.len(),
                unread: filter::unread_count(&state.notifications),
                selected: state.selection.len(),
            },
            gate: state.gate,
            is_open: state.is_open,
            preferences: state.preferences,
        }
    }

    async fn unread_count(&self) -> usize {
        filter::unread_count(&self.state.read().await.notifications)
    }

    async fn mark_as_read(&self, id: &NotificationId) {
        let mut state = self.state.write().await;
        let flipped = match state.notifications.iter_mut().find(|n| &n.id == id) {
            Some(n) if !n.is_read => {
                n.mark_as_read();
                true
            }
            _ => false,
        };
        drop(state);
        if flipped {
            self.publish_event(NotificationEvent::NotificationRead { id: id.clone() });
        }
    }

    async fn mark_selected_as_read(&self) {
        let mut state = self.state.write().await;
        let mut affected = Vec::new();
        let selection = state.selection.clone();
        for n in state.notifications.iter_mut() {
            if selection.contains(&n.id) {
                if !n.is_read {
                    n.mark_as_read();
                }
                affected.push(n.id.clone());
            }
        }
        // Selection is cleared unconditionally, however many ids were hit.
        state.selection.clear();
        drop(state);

        if !affected.is_empty() {
            self.publish_event(NotificationEvent::NotificationsRead { ids: affected });
        }
        self.publish_event(NotificationEvent::SelectionChanged { selected_count: 0 });
    }

    async fn delete(&self, id: &NotificationId) {
        let mut state = self.state.write().await;
        let before = state.notifications.len();
        state.notifications.retain(|n| &n.id != id);
        if state.notifications.len() == before {
            return;
        }
        state.selection.prune([id]);
        drop(state);
        self.publish_event(NotificationEvent::NotificationDeleted { id: id.clone() });
    }

    async fn set_kind_filter(&self, kind_filter: KindFilter) {
        let mut state = self.state.write().await;
        state.criteria.kind_filter = kind_filter;
        let criteria = state.criteria.clone();
        drop(state);
        self.publish_event(NotificationEvent::FilterChanged { criteria });
    }

    async fn set_status_filter(&self, status_filter: StatusFilter) {
        let mut state = self.state.write().await;
        state.criteria.status_filter = status_filter;
        let criteria = state.criteria.clone();
        drop(state);
        self.publish_event(NotificationEvent::FilterChanged { criteria });
    }

    async fn set_search_query(&self, query: String) {
        let mut state = self.state.write().await;
        state.criteria.search_query = query;
        let criteria = state.criteria.clone();
        drop(state);
        self.publish_event(NotificationEvent::FilterChanged { criteria });
    }

    async fn select(&self, id: NotificationId, selected: bool) {
        let mut state = self.state.write().await;
        state.selection.set(id, selected);
        let count = state.selection.len();
        drop(state);
        self.publish_event(NotificationEvent::SelectionChanged { selected_count: count });
    }

    async fn select_all(&self, selected: bool) {
        let mut state = self.state.write().await;
        let filtered = filter::filter_view(&state.notifications, &state.criteria);
        state.selection.select_all(selected, &filtered);
        let count = state.selection.len();
        drop(state);
        self.publish_event(NotificationEvent::SelectionChanged { selected_count: count });
    }

    async fn request_delete_selected(&self) {
        let mut state = self.state.write().await;
        if state.gate.request() {
            let count = state.selection.len();
            drop(state);
            self.publish_event(NotificationEvent::DeleteConfirmationRequested {
                selected_count: count,
            });
        }
    }

    async fn confirm_delete_selected(&self) {
        let mut state = self.state.write().await;
        if !state.gate.confirm() {
            return;
        }
        let selection = state.selection.clone();
        let mut deleted = Vec::new();
        state.notifications.retain(|n| {
            if selection.contains(&n.id) {
                deleted.push(n.id.clone());
                false
            } else {
                true
            }
        });
        state.selection.clear();
        drop(state);

        debug!(count = deleted.len(), "Bulk delete confirmed");
        if !deleted.is_empty() {
            self.publish_event(NotificationEvent::NotificationsDeleted { ids: deleted });
        }
        self.publish_event(NotificationEvent::SelectionChanged { selected_count: 0 });
    }

    async fn cancel_delete_selected(&self) {
        let mut state = self.state.write().await;
        if state.gate.cancel() {
            drop(state);
            self.publish_event(NotificationEvent::DeleteConfirmationCancelled);
        }
    }

    async fn save_preferences(&self, preferences: NotificationPreferences) {
        let mut state = self.state.write().await;
        // Wholesale replacement; the old value is discarded, not merged.
        state.preferences = preferences;
        drop(state);
        self.publish_event(NotificationEvent::PreferencesSaved { preferences });
    }

    async fn open(&self) {
        let mut state = self.state.write().await;
        if !state.is_open {
            state.is_open = true;
            drop(state);
            self.publish_event(NotificationEvent::DrawerOpened);
        }
    }

    async fn close(&self) {
        let mut state = self.state.write().await;
        if state.is_open {
            state.is_open = false;
            drop(state);
            self.publish_event(NotificationEvent::DrawerClosed);
        }
    }

    async fn handle_escape(&self) {
        self.close().await;
    }

    fn subscribe(&self) -> broadcast::Receiver<NotificationEvent> {
        self.event_publisher.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::seed::{NotificationSeed, StaticSeedProvider};
    use crate::notifications::types::NotificationKind;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub SeedProvider {}
        #[async_trait]
        impl NotificationSeedProvider for SeedProvider {
            async fn load_seed(&self) -> Result<NotificationSeed, NotificationError>;
        }
    }

    fn notification(id: &str, kind: NotificationKind, read: bool, primary: &str, context: &str) -> Notification {
        let mut n = Notification::new(NotificationId::new(id), kind, primary, context, Utc::now());
        n.is_read = read;
        n
    }

    fn two_item_seed() -> NotificationSeed {
        NotificationSeed {
            notifications: vec![
                notification("1", NotificationKind::Reminder, false, "Standup", "Team A"),
                notification("2", NotificationKind::Mention, true, "Review PR", "Team B"),
            ],
            preferences: NotificationPreferences::default(),
        }
    }

    async fn center_with(seed: NotificationSeed) -> DefaultNotificationCenter {
        let mut provider = MockSeedProvider::new();
        provider
            .expect_load_seed()
            .times(1)
            .returning(move || Ok(seed.clone()));
        DefaultNotificationCenter::new(Arc::new(provider), 16)
            .await
            .unwrap()
    }

    fn drain_events(rx: &mut broadcast::Receiver<NotificationEvent>) {
        while rx.try_recv().is_ok() {}
    }

    #[tokio::test]
    async fn construction_rejects_duplicate_seed_ids() {
        let seed = NotificationSeed {
            notifications: vec![
                notification("dup", NotificationKind::Reminder, false, "a", "b"),
                notification("dup", NotificationKind::Mention, false, "c", "d"),
            ],
            preferences: NotificationPreferences::default(),
        };
        let mut provider = MockSeedProvider::new();
        provider.expect_load_seed().returning(move || Ok(seed.clone()));

        let result = DefaultNotificationCenter::new(Arc::new(provider), 16).await;
        assert!(matches!(result, Err(NotificationError::DuplicateId(id)) if id.as_str() == "dup"));
    }

    #[tokio::test]
    async fn static_seed_provider_builds_a_center() {
        let center =
            DefaultNotificationCenter::new(Arc::new(StaticSeedProvider::new()), 16).await.unwrap();
        let snapshot = center.snapshot().await;
        assert!(snapshot.stats.total > 0);
        assert_eq!(snapshot.stats.unread, center.unread_count().await);
    }

    #[tokio::test]
    async fn mark_as_read_is_idempotent_and_events_once() {
        let center = center_with(two_item_seed()).await;
        let mut rx = center.subscribe();
        let id = NotificationId::new("1");

        center.mark_as_read(&id).await;
        center.mark_as_read(&id).await;

        assert_eq!(center.unread_count().await, 0);
        assert_eq!(
            rx.try_recv().unwrap(),
            NotificationEvent::NotificationRead { id }
        );
        assert!(rx.try_recv().is_err(), "second mark must not re-announce");
    }

    #[tokio::test]
    async fn mark_as_read_on_absent_id_is_a_no_op() {
        let center = center_with(two_item_seed()).await;
        let mut rx = center.subscribe();
        center.mark_as_read(&NotificationId::new("missing")).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(center.snapshot().await.stats.total, 2);
    }

    #[tokio::test]
    async fn delete_then_mark_as_read_is_a_no_op() {
        let center = center_with(two_item_seed()).await;
        let id = NotificationId::new("1");
        center.delete(&id).await;
        center.mark_as_read(&id).await;

        let snapshot = center.snapshot().await;
        assert_eq!(snapshot.stats.total, 1);
        assert_eq!(snapshot.visible[0].id.as_str(), "2");
    }

    #[tokio::test]
    async fn delete_prunes_the_selection() {
        let center = center_with(two_item_seed()).await;
        center.select(NotificationId::new("1"), true).await;
        center.select(NotificationId::new("2"), true).await;

        center.delete(&NotificationId::new("1")).await;

        let snapshot = center.snapshot().await;
        assert_eq!(snapshot.selected_ids, vec![NotificationId::new("2")]);
        assert_eq!(snapshot.stats.total, 1);
    }

    #[tokio::test]
    async fn mark_selected_as_read_clears_selection_unconditionally() {
        let center = center_with(two_item_seed()).await;
        center.select(NotificationId::new("1"), true).await;
        center.select(NotificationId::new("gone"), true).await;

        center.mark_selected_as_read().await;

        let snapshot = center.snapshot().await;
        assert_eq!(snapshot.stats.unread, 0);
        assert!(snapshot.selected_ids.is_empty());
    }

    #[tokio::test]
    async fn select_all_is_scoped_to_the_filtered_view() {
        let center = center_with(two_item_seed()).await;
        center.set_status_filter(StatusFilter::Unread).await;
        center.select_all(true).await;

        let snapshot = center.snapshot().await;
        assert_eq!(snapshot.selected_ids, vec![NotificationId::new("1")]);

        // Widening the filter afterwards must not grow the selection.
        center.set_status_filter(StatusFilter::All).await;
        assert_eq!(center.snapshot().await.stats.selected, 1);

        center.select_all(false).await;
        assert!(center.snapshot().await.selected_ids.is_empty());
    }

    #[tokio::test]
    async fn selection_survives_filter_changes() {
        let center = center_with(two_item_seed()).await;
        center.select(NotificationId::new("2"), true).await;
        center.set_status_filter(StatusFilter::Unread).await;

        let snapshot = center.snapshot().await;
        // id 2 is read, so it is filtered out of view but stays selected.
        assert!(snapshot.visible.iter().all(|n| n.id.as_str() != "2"));
        assert_eq!(snapshot.selected_ids, vec![NotificationId::new("2")]);
    }

    #[tokio::test]
    async fn bulk_delete_flows_through_the_gate() {
        let center = center_with(two_item_seed()).await;
        center.select(NotificationId::new("1"), true).await;
        center.select(NotificationId::new("2"), true).await;

        center.request_delete_selected().await;
        assert!(center.snapshot().await.gate.is_pending());

        center.cancel_delete_selected().await;
        let after_cancel = center.snapshot().await;
        assert_eq!(after_cancel.gate, ConfirmationGate::Idle);
        assert_eq!(after_cancel.stats.total, 2);
        assert_eq!(after_cancel.stats.selected, 2);

        center.request_delete_selected().await;
        center.confirm_delete_selected().await;
        let after_confirm = center.snapshot().await;
        assert_eq!(after_confirm.gate, ConfirmationGate::Idle);
        assert_eq!(after_confirm.stats.total, 0);
        assert!(after_confirm.selected_ids.is_empty());
    }

    #[tokio::test]
    async fn confirm_without_request_does_not_delete() {
        let center = center_with(two_item_seed()).await;
        center.select(NotificationId::new("1"), true).await;
        center.confirm_delete_selected().await;
        assert_eq!(center.snapshot().await.stats.total, 2);
    }

    #[tokio::test]
    async fn save_preferences_replaces_wholesale() {
        let center = center_with(two_item_seed()).await;
        let mut rx = center.subscribe();
        let new_prefs = NotificationPreferences {
            mentions: false,
            play_sound: false,
            ..NotificationPreferences::default()
        };

        center.save_preferences(new_prefs).await;

        assert_eq!(center.snapshot().await.preferences, new_prefs);
        assert_eq!(
            rx.try_recv().unwrap(),
            NotificationEvent::PreferencesSaved { preferences: new_prefs }
        );
    }

    #[tokio::test]
    async fn escape_closes_only_an_open_drawer() {
        let center = center_with(two_item_seed()).await;
        let mut rx = center.subscribe();

        center.handle_escape().await;
        assert!(rx.try_recv().is_err(), "escape on a closed drawer is a no-op");

        center.open().await;
        drain_events(&mut rx);
        center.handle_escape().await;
        assert_eq!(rx.try_recv().unwrap(), NotificationEvent::DrawerClosed);
        assert!(!center.snapshot().await.is_open);
    }

    #[tokio::test]
    async fn filter_setters_announce_the_new_criteria() {
        let center = center_with(two_item_seed()).await;
        let mut rx = center.subscribe();

        center.set_search_query("team b".to_string()).await;

        match rx.try_recv().unwrap() {
            NotificationEvent::FilterChanged { criteria } => {
                assert_eq!(criteria.search_query, "team b");
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(center.snapshot().await.visible.len(), 1);
    }
}
