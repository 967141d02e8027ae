use serde::{Deserialize, Serialize};

use crate::shared_types::{DepartmentId, MeetingId};

// --- Enums ---

/// Department category a recurring meeting belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeetingCategory {
    Operations,
    Design,
    Engineering,
    Marketing,
    Sales,
}

/// Where a meeting sits in its lifecycle on the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeetingStatus {
    Upcoming,
    Live,
    Past,
    Recurring,
}

/// Days addressable by the day tabs. `ComingUp` is the sentinel tab showing
/// the whole week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DayFilter {
    #[default]
    ComingUp,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

/// The flat-list filter under the meeting list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MeetingListFilter {
    #[default]
    All,
    Upcoming,
    Past,
}

/// When the meeting assistant joins meetings automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AiParticipationSetting {
    AllMeetings,
    #[default]
    OwnedMeetings,
    TeamParticipants,
    ExplicitInvite,
}

// --- Records ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaItem {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A single entry of the flat meeting list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: MeetingId,
    pub title: String,
    pub date: String,
    pub time: String,
    pub status: MeetingStatus,
    pub participant_count: usize,
    #[serde(default)]
    pub ai_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agenda_items: Vec<AgendaItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_summary: Option<String>,
}

/// A recurring meeting card on the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringMeeting {
    pub id: MeetingId,
    pub title: String,
    pub category: MeetingCategory,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<Participant>,
    /// Day tab this meeting appears under; irrelevant when `is_daily`.
    pub day: DayFilter,
    pub next_date: String,
    pub time: String,
    #[serde(default)]
    pub is_daily: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agenda_items: Vec<AgendaItem>,
}

/// A department agenda a meeting can be added to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentAgenda {
    pub id: DepartmentId,
    pub name: String,
    pub color: String,
    pub item_count: usize,
}

/// Transient acknowledgement shown after a meeting was added to an agenda;
/// cleared automatically after a short delay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaAck {
    pub meeting_id: MeetingId,
    pub department_name: String,
}
