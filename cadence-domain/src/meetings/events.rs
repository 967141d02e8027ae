use serde::{Deserialize, Serialize};

use super::types::{AiParticipationSetting, DayFilter, MeetingListFilter};
use crate::shared_types::{DepartmentId, MeetingId};

/// State changes of the meeting dashboard, broadcast to subscribed views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MeetingEvent {
    DayFilterChanged {
        day: DayFilter,
    },
    ListFilterChanged {
        list_filter: MeetingListFilter,
    },
    MoreRevealed {
        visible_count: usize,
    },
    AiToggled {
        meeting_id: MeetingId,
        enabled: bool,
    },
    AiParticipationSaved {
        setting: AiParticipationSetting,
    },
    AddedToAgenda {
        meeting_id: MeetingId,
        department_id: DepartmentId,
        department_name: String,
    },
    AgendaAckCleared {
        meeting_id: MeetingId,
    },
}
