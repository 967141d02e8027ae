//! The meeting dashboard: day tabs, recurring grid, flat list, AI
//! participation and the add-to-agenda acknowledgement.

pub mod errors;
pub mod events;
pub mod schedule;
pub mod seed;
pub mod service;
pub mod types;

pub use errors::MeetingError;
pub use events::MeetingEvent;
pub use schedule::{filtered_meetings, recurring_for_day, PageReveal, ITEMS_PER_PAGE};
pub use seed::{MeetingSeed, MeetingSeedProvider, StaticMeetingSeedProvider};
pub use service::{DefaultMeetingDirectory, MeetingDirectory, RecurringView, ACK_CLEAR_DELAY};
pub use types::{
    AgendaAck, AgendaItem, AiParticipationSetting, DayFilter, DepartmentAgenda, Meeting,
    MeetingCategory, MeetingListFilter, MeetingStatus, Participant, RecurringMeeting,
};
