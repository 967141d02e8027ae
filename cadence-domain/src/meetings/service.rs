use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;
use tokio::sync::{broadcast, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::errors::MeetingError;
use super::events::MeetingEvent;
use super::schedule::{self, PageReveal};
use super::seed::MeetingSeedProvider;
use super::types::{
    AgendaAck, AiParticipationSetting, DayFilter, DepartmentAgenda, Meeting, MeetingListFilter,
    MeetingStatus, RecurringMeeting,
};
use crate::shared_types::{DepartmentId, MeetingId};

/// How long the "added to agenda" acknowledgement stays visible.
pub const ACK_CLEAR_DELAY: Duration = Duration::from_secs(2);

/// The recurring grid as a view would render it: the revealed window of the
/// active day tab plus pagination leftovers.
#[derive(Debug, Clone, PartialEq)]
pub struct RecurringView {
    pub meetings: Vec<RecurringMeeting>,
    pub active_day: DayFilter,
    pub remaining: usize,
    pub has_more: bool,
}

// --- MeetingDirectory Trait ---

/// The meeting dashboard controller: day tabs, list filter, pagination
/// reveal, per-meeting AI toggle, AI participation settings and the
/// add-to-agenda acknowledgement.
#[async_trait]
pub trait MeetingDirectory: Send + Sync {
    async fn recurring_view(&self) -> RecurringView;
    async fn meeting_list(&self) -> Vec<Meeting>;
    async fn departments(&self) -> Vec<DepartmentAgenda>;
    async fn agenda_ack(&self) -> Option<AgendaAck>;
    async fn ai_participation(&self) -> AiParticipationSetting;

    async fn set_day_filter(&self, day: DayFilter);
    async fn set_list_filter(&self, list_filter: MeetingListFilter);
    async fn show_more(&self);

    async fn set_ai_enabled(&self, meeting_id: &MeetingId, enabled: bool);
    async fn save_ai_participation(&self, setting: AiParticipationSetting);

    async fn add_to_agenda(&self, meeting_id: &MeetingId, department_id: &DepartmentId);

    fn subscribe(&self) -> broadcast::Receiver<MeetingEvent>;
}

// --- DefaultMeetingDirectory Implementation ---

#[derive(Debug)]
struct DirectoryState {
    meetings: Vec<Meeting>,
    recurring: Vec<RecurringMeeting>,
    departments: Vec<DepartmentAgenda>,
    active_day: DayFilter,
    list_filter: MeetingListFilter,
    reveal: PageReveal,
    ai_participation: AiParticipationSetting,
    agenda_ack: Option<AgendaAck>,
    /// Bumped on every add so a stale clear task cannot wipe a newer ack.
    ack_generation: u64,
}

pub struct DefaultMeetingDirectory {
    state: Arc<RwLock<DirectoryState>>,
    event_publisher: broadcast::Sender<MeetingEvent>,
    ack_clear_delay: Duration,
    ack_task: StdMutex<Option<JoinHandle<()>>>,
}

impl DefaultMeetingDirectory {
    pub async fn new(
        seed_provider: Arc<dyn MeetingSeedProvider>,
        broadcast_capacity: usize,
    ) -> Result<Self, MeetingError> {
        let seed = seed_provider.load_seed().await?;

        let mut seen: HashSet<MeetingId> = HashSet::new();
        for id in seed
            .meetings
            .iter()
            .map(|m| &m.id)
            .chain(seed.recurring.iter().map(|m| &m.id))
        {
            if !seen.insert(id.clone()) {
                return Err(MeetingError::DuplicateId(id.clone()));
            }
        }

        info!(
            meetings = seed.meetings.len(),
            recurring = seed.recurring.len(),
            "Meeting directory seeded"
        );
        let (event_publisher, _) = broadcast::channel(broadcast_capacity);
        Ok(Self {
            state: Arc::new(RwLock::new(DirectoryState {
                meetings: seed.meetings,
                recurring: seed.recurring,
                departments: seed.departments,
                active_day: DayFilter::default(),
                list_filter: MeetingListFilter::default(),
                reveal: PageReveal::default(),
                ai_participation: AiParticipationSetting::default(),
                agenda_ack: None,
                ack_generation: 0,
            })),
            event_publisher,
            ack_clear_delay: ACK_CLEAR_DELAY,
            ack_task: StdMutex::new(None),
        })
    }

    /// Overrides the acknowledgement auto-clear delay. Meant for tests.
    pub fn with_ack_clear_delay(mut self, delay: Duration) -> Self {
        self.ack_clear_delay = delay;
        self
    }

    fn publish_event(&self, event: MeetingEvent) {
        if self.event_publisher.send(event).is_err() {
            debug!("No active subscribers for meeting event");
        }
    }

    fn replace_ack_task(&self, handle: Option<JoinHandle<()>>) {
        let mut slot = match self.ack_task.lock() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(previous) = slot.take() {
            previous.abort();
        }
        *slot = handle;
    }
}

impl Drop for DefaultMeetingDirectory {
    fn drop(&mut self) {
        // A pending clear must not outlive its owner.
        self.replace_ack_task(None);
    }
}

#[async_trait]
impl MeetingDirectory for DefaultMeetingDirectory {
    async fn recurring_view(&self) -> RecurringView {
        let state = self.state.read().await;
        let day_view = schedule::recurring_for_day(&state.recurring, state.active_day);
        let total = day_view.len();
        let visible = state.reveal.visible(total);
        RecurringView {
            meetings: day_view.into_iter().take(visible).collect(),
            active_day: state.active_day,
            remaining: state.reveal.remaining(total),
            has_more: state.reveal.has_more(total),
        }
    }

    async fn meeting_list(&self) -> Vec<Meeting> {
        let state = self.state.read().await;
        schedule::filtered_meetings(&state.meetings, state.list_filter)
    }

    async fn departments(&self) -> Vec<DepartmentAgenda> {
        self.state.read().await.departments.clone()
    }

    async fn agenda_ack(&self) -> Option<AgendaAck> {
        self.state.read().await.agenda_ack.clone()
    }

    async fn ai_participation(&self) -> AiParticipationSetting {
        self.state.read().await.ai_participation
    }

    async fn set_day_filter(&self, day: DayFilter) {
        let mut state = self.state.write().await;
        state.active_day = day;
        // Switching tabs always starts back at the first page.
        state.reveal.reset();
        drop(state);
        self.publish_event(MeetingEvent::DayFilterChanged { day });
    }

    async fn set_list_filter(&self, list_filter: MeetingListFilter) {
        let mut state = self.state.write().await;
        state.list_filter = list_filter;
        drop(state);
        self.publish_event(MeetingEvent::ListFilterChanged { list_filter });
    }

    async fn show_more(&self) {
        let mut state = self.state.write().await;
        state.reveal.show_more();
        let total = schedule::recurring_for_day(&state.recurring, state.active_day).len();
        let visible_count = state.reveal.visible(total);
        drop(state);
        self.publish_event(MeetingEvent::MoreRevealed { visible_count });
    }

    async fn set_ai_enabled(&self, meeting_id: &MeetingId, enabled: bool) {
        let mut state = self.state.write().await;
        let changed = match state.meetings.iter_mut().find(|m| &m.id == meeting_id) {
            Some(m) if m.ai_enabled != enabled => {
                m.ai_enabled = enabled;
                true
            }
            Some(_) => false,
            None => {
                debug!(%meeting_id, "AI toggle for unknown meeting ignored");
                false
            }
        };
        drop(state);
        if changed {
            self.publish_event(MeetingEvent::AiToggled {
                meeting_id: meeting_id.clone(),
                enabled,
            });
        }
    }

    async fn save_ai_participation(&self, setting: AiParticipationSetting) {
        let mut state = self.state.write().await;
        state.ai_participation = setting;
        drop(state);
        self.publish_event(MeetingEvent::AiParticipationSaved { setting });
    }

    async fn add_to_agenda(&self, meeting_id: &MeetingId, department_id: &DepartmentId) {
        let mut state = self.state.write().await;

        let eligible = state.meetings.iter().any(|m| {
            &m.id == meeting_id
                && matches!(m.status, MeetingStatus::Upcoming | MeetingStatus::Live)
        });
        if !eligible {
            warn!(%meeting_id, "Add-to-agenda for ineligible or unknown meeting ignored");
            return;
        }
        let department = match state.departments.iter().find(|d| &d.id == department_id) {
            Some(d) => d.clone(),
            None => {
                warn!(%department_id, "Add-to-agenda for unknown department ignored");
                return;
            }
        };

        state.ack_generation += 1;
        let generation = state.ack_generation;
        state.agenda_ack = Some(AgendaAck {
            meeting_id: meeting_id.clone(),
            department_name: department.name.clone(),
        });
        drop(state);

        self.publish_event(MeetingEvent::AddedToAgenda {
            meeting_id: meeting_id.clone(),
            department_id: department.id.clone(),
            department_name: department.name,
        });

        // Single-shot auto-clear; replaced by any newer add, aborted on drop.
        let state = Arc::clone(&self.state);
        let publisher = self.event_publisher.clone();
        let delay = self.ack_clear_delay;
        let cleared_meeting = meeting_id.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = state.write().await;
            if state.ack_generation == generation {
                state.agenda_ack = None;
                drop(state);
                let _ = publisher.send(MeetingEvent::AgendaAckCleared {
                    meeting_id: cleared_meeting,
                });
            }
        });
        self.replace_ack_task(Some(handle));
    }

    fn subscribe(&self) -> broadcast::Receiver<MeetingEvent> {
        self.event_publisher.subscribe()
    }
}
