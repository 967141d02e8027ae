//! Seed data for the meeting dashboard.

use async_trait::async_trait;

use super::errors::MeetingError;
use super::types::{
    AgendaItem, DayFilter, DepartmentAgenda, Meeting, MeetingCategory, MeetingStatus, Participant,
    RecurringMeeting,
};
use crate::shared_types::{DepartmentId, MeetingId};

/// Initial dashboard contents.
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingSeed {
    pub meetings: Vec<Meeting>,
    pub recurring: Vec<RecurringMeeting>,
    pub departments: Vec<DepartmentAgenda>,
}

/// Supplies the initial meeting catalog. Contract: ids unique per list.
#[async_trait]
pub trait MeetingSeedProvider: Send + Sync {
    async fn load_seed(&self) -> Result<MeetingSeed, MeetingError>;
}

/// The built-in mock dataset backing the dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticMeetingSeedProvider;

impl StaticMeetingSeedProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MeetingSeedProvider for StaticMeetingSeedProvider {
    async fn load_seed(&self) -> Result<MeetingSeed, MeetingError> {
        Ok(MeetingSeed {
            meetings: mock_meetings(),
            recurring: mock_recurring_meetings(),
            departments: mock_departments(),
        })
    }
}

fn participant(id: &str, name: &str) -> Participant {
    Participant {
        id: id.to_string(),
        name: name.to_string(),
        avatar: None,
    }
}

fn agenda(id: &str, text: &str) -> AgendaItem {
    AgendaItem {
        id: id.to_string(),
        text: text.to_string(),
    }
}

pub fn mock_meetings() -> Vec<Meeting> {
    vec![
        Meeting {
            id: MeetingId::new("m-1"),
            title: "Daily Standup".to_string(),
            date: "Today".to_string(),
            time: "9:30 AM".to_string(),
            status: MeetingStatus::Live,
            participant_count: 8,
            ai_enabled: true,
            description: Some("Quick sync on yesterday's progress and today's plan.".to_string()),
            agenda_items: vec![agenda("a-1", "Blockers"), agenda("a-2", "Deploy window")],
            previous_summary: None,
        },
        Meeting {
            id: MeetingId::new("m-2"),
            title: "Q3 Roadmap Review".to_string(),
            date: "Thu, Aug 6".to_string(),
            time: "2:00 PM".to_string(),
            status: MeetingStatus::Upcoming,
            participant_count: 12,
            ai_enabled: false,
            description: None,
            agenda_items: vec![agenda("a-3", "Scope cuts"), agenda("a-4", "Hiring plan")],
            previous_summary: None,
        },
        Meeting {
            id: MeetingId::new("m-3"),
            title: "Design Critique".to_string(),
            date: "Wed, Aug 5".to_string(),
            time: "11:00 AM".to_string(),
            status: MeetingStatus::Past,
            participant_count: 6,
            ai_enabled: true,
            description: None,
            agenda_items: vec![],
            previous_summary: Some(
                "Reviewed the drawer redesign; follow-up on empty states.".to_string(),
            ),
        },
        Meeting {
            id: MeetingId::new("m-4"),
            title: "Sprint Planning".to_string(),
            date: "Every other Mon".to_string(),
            time: "10:00 AM".to_string(),
            status: MeetingStatus::Recurring,
            participant_count: 9,
            ai_enabled: true,
            description: None,
            agenda_items: vec![agenda("a-5", "Carry-over stories")],
            previous_summary: None,
        },
    ]
}

pub fn mock_recurring_meetings() -> Vec<RecurringMeeting> {
    vec![
        RecurringMeeting {
            id: MeetingId::new("r-1"),
            title: "Daily Standup".to_string(),
            category: MeetingCategory::Engineering,
            participants: vec![participant("p-1", "Dana Reyes"), participant("p-2", "Sam Okafor")],
            day: DayFilter::Mon,
            next_date: "Mon, Aug 10".to_string(),
            time: "9:30 AM".to_string(),
            is_daily: true,
            agenda_items: vec![agenda("a-10", "Blockers")],
        },
        RecurringMeeting {
            id: MeetingId::new("r-2"),
            title: "Weekly Critique".to_string(),
            category: MeetingCategory::Design,
            participants: vec![participant("p-3", "Priya Shah")],
            day: DayFilter::Tue,
            next_date: "Tue, Aug 11".to_string(),
            time: "11:00 AM".to_string(),
            is_daily: false,
            agenda_items: vec![],
        },
        RecurringMeeting {
            id: MeetingId::new("r-3"),
            title: "Pipeline Review".to_string(),
            category: MeetingCategory::Sales,
            participants: vec![participant("p-4", "Marcus Lee"), participant("p-5", "Ana Torres")],
            day: DayFilter::Wed,
            next_date: "Wed, Aug 12".to_string(),
            time: "3:00 PM".to_string(),
            is_daily: false,
            agenda_items: vec![agenda("a-11", "Stalled deals"), agenda("a-12", "Forecast")],
        },
        RecurringMeeting {
            id: MeetingId::new("r-4"),
            title: "Campaign Sync".to_string(),
            category: MeetingCategory::Marketing,
            participants: vec![participant("p-6", "Jo Lindqvist")],
            day: DayFilter::Thu,
            next_date: "Thu, Aug 13".to_string(),
            time: "1:00 PM".to_string(),
            is_daily: false,
            agenda_items: vec![],
        },
        RecurringMeeting {
            id: MeetingId::new("r-5"),
            title: "Ops Monthly Review".to_string(),
            category: MeetingCategory::Operations,
            participants: vec![participant("p-7", "Ira Feld")],
            day: DayFilter::Fri,
            next_date: "Fri, Aug 14".to_string(),
            time: "4:00 PM".to_string(),
            is_daily: false,
            agenda_items: vec![agenda("a-13", "Vendor renewals")],
        },
    ]
}

pub fn mock_departments() -> Vec<DepartmentAgenda> {
    let dept = |id: &str, name: &str, color: &str, item_count: usize| DepartmentAgenda {
        id: DepartmentId::new(id),
        name: name.to_string(),
        color: color.to_string(),
        item_count,
    };
    vec![
        dept("d-1", "Operations", "#7a5af8", 7),
        dept("d-2", "Engineering", "#3b82f6", 5),
        dept("d-3", "Design", "#ec4899", 6),
        dept("d-4", "Marketing", "#f97316", 4),
        dept("d-5", "Sales", "#22c55e", 5),
        dept("d-6", "Product", "#8b5cf6", 4),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn static_seed_ids_are_unique() {
        let seed = StaticMeetingSeedProvider::new().load_seed().await.unwrap();
        let meeting_ids: HashSet<_> = seed.meetings.iter().map(|m| m.id.clone()).collect();
        assert_eq!(meeting_ids.len(), seed.meetings.len());
        let recurring_ids: HashSet<_> = seed.recurring.iter().map(|m| m.id.clone()).collect();
        assert_eq!(recurring_ids.len(), seed.recurring.len());
    }

    #[tokio::test]
    async fn static_seed_covers_every_status_class() {
        let seed = StaticMeetingSeedProvider::new().load_seed().await.unwrap();
        assert!(seed.meetings.iter().any(|m| m.status == MeetingStatus::Live));
        assert!(seed.meetings.iter().any(|m| m.status == MeetingStatus::Past));
        assert!(!seed.departments.is_empty());
    }
}
