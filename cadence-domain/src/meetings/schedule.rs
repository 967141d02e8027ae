//! Pure derivations over the meeting catalog: day-tab filtering, list
//! partitioning and the pagination reveal.

use serde::{Deserialize, Serialize};

use super::types::{DayFilter, Meeting, MeetingListFilter, MeetingStatus, RecurringMeeting};

/// Recurring meetings visible under a day tab, in catalog order.
///
/// `ComingUp` shows the whole week; a weekday shows that day's meetings plus
/// every daily one.
pub fn recurring_for_day(meetings: &[RecurringMeeting], day: DayFilter) -> Vec<RecurringMeeting> {
    meetings
        .iter()
        .filter(|m| match day {
            DayFilter::ComingUp => true,
            d => m.is_daily || m.day == d,
        })
        .cloned()
        .collect()
}

/// The flat meeting list narrowed by the all/upcoming/past filter.
///
/// "Upcoming" keeps everything that is not over yet: upcoming, live and
/// recurring entries.
pub fn filtered_meetings(meetings: &[Meeting], list_filter: MeetingListFilter) -> Vec<Meeting> {
    meetings
        .iter()
        .filter(|m| match list_filter {
            MeetingListFilter::All => true,
            MeetingListFilter::Upcoming => m.status != MeetingStatus::Past,
            MeetingListFilter::Past => m.status == MeetingStatus::Past,
        })
        .cloned()
        .collect()
}

/// Default number of cards revealed per page on the recurring grid.
pub const ITEMS_PER_PAGE: usize = 6;

/// Pagination reveal: the grid shows one page initially and grows by a page
/// per "show more"; switching filters resets to the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageReveal {
    page_size: usize,
    visible_count: usize,
}

impl Default for PageReveal {
    fn default() -> Self {
        Self::new(ITEMS_PER_PAGE)
    }
}

impl PageReveal {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            visible_count: page_size,
        }
    }

    /// Number of items currently revealed out of `total`.
    pub fn visible(&self, total: usize) -> usize {
        self.visible_count.min(total)
    }

    /// Items still hidden.
    pub fn remaining(&self, total: usize) -> usize {
        total.saturating_sub(self.visible_count)
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.remaining(total) > 0
    }

    /// Reveals one more page.
    pub fn show_more(&mut self) {
        self.visible_count += self.page_size;
    }

    /// Back to the first page; called whenever the active filter changes.
    pub fn reset(&mut self) {
        self.visible_count = self.page_size;
    }
}
