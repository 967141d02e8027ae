//! Pure derivation layer for the notifications drawer.
//!
//! Filtering is order-stable: the output is always a subsequence of the
//! input. The three predicates are conjunctive.

use super::types::{FilterCriteria, KindFilter, Notification, StatusFilter};

/// Whether a single notification passes `criteria`.
pub fn matches(notification: &Notification, criteria: &FilterCriteria) -> bool {
    if let KindFilter::Only(kind) = criteria.kind_filter {
        if notification.kind != kind {
            return false;
        }
    }
    match criteria.status_filter {
        StatusFilter::Unread if notification.is_read => return false,
        StatusFilter::Read if !notification.is_read => return false,
        _ => {}
    }
    if !criteria.search_query.is_empty() {
        let query = criteria.search_query.to_lowercase();
        let in_primary = notification.primary_text.to_lowercase().contains(&query);
        let in_context = notification.context_text.to_lowercase().contains(&query);
        if !in_primary && !in_context {
            return false;
        }
    }
    true
}

/// The filtered view of `notifications`, preserving relative order.
pub fn filter_view(notifications: &[Notification], criteria: &FilterCriteria) -> Vec<Notification> {
    notifications
        .iter()
        .filter(|n| matches(n, criteria))
        .cloned()
        .collect()
}

/// Count of unread notifications over the *full* list, independent of any
/// active filter.
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::types::NotificationKind;
    use crate::shared_types::NotificationId;
    use chrono::Utc;
    use rstest::rstest;

    fn notification(id: &str, kind: NotificationKind, read: bool, primary: &str, context: &str) -> Notification {
        let mut n = Notification::new(
            NotificationId::new(id),
            kind,
            primary,
            context,
            Utc::now(),
        );
        n.is_read = read;
        n
    }

    fn sample() -> Vec<Notification> {
        vec![
            notification("1", NotificationKind::Reminder, false, "Standup", "Team A"),
            notification("2", NotificationKind::Mention, true, "Review PR", "Team B"),
            notification("3", NotificationKind::Invite, false, "Design sync", "Design"),
            notification("4", NotificationKind::Mention, false, "Retro notes", "Team A"),
        ]
    }

    fn ids(view: &[Notification]) -> Vec<&str> {
        view.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn no_criteria_keeps_everything_in_order() {
        let view = filter_view(&sample(), &FilterCriteria::default());
        assert_eq!(ids(&view), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn kind_filter_rejects_other_kinds() {
        let criteria = FilterCriteria {
            kind_filter: KindFilter::Only(NotificationKind::Mention),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter_view(&sample(), &criteria)), vec!["2", "4"]);
    }

    #[test]
    fn status_filters_partition_the_list() {
        let notifications = sample();
        let unread = filter_view(
            &notifications,
            &FilterCriteria { status_filter: StatusFilter::Unread, ..Default::default() },
        );
        let read = filter_view(
            &notifications,
            &FilterCriteria { status_filter: StatusFilter::Read, ..Default::default() },
        );
        assert_eq!(unread.len() + read.len(), notifications.len());
        for n in &unread {
            assert!(!read.iter().any(|r| r.id == n.id));
        }
    }

    #[rstest]
    #[case("team b", vec!["2"])]
    #[case("TEAM", vec!["1", "2", "4"])]
    #[case("standup", vec!["1"])]
    #[case("sync", vec!["3"])]
    #[case("absent", vec![])]
    fn search_is_case_insensitive_contains(#[case] query: &str, #[case] expected: Vec<&str>) {
        let criteria = FilterCriteria {
            search_query: query.to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter_view(&sample(), &criteria)), expected);
    }

    #[test]
    fn predicates_are_conjunctive() {
        // "Team A" matches ids 1 and 4, but only 4 is a mention.
        let criteria = FilterCriteria {
            kind_filter: KindFilter::Only(NotificationKind::Mention),
            status_filter: StatusFilter::Unread,
            search_query: "team a".to_string(),
        };
        assert_eq!(ids(&filter_view(&sample(), &criteria)), vec!["4"]);
    }

    #[test]
    fn unread_count_ignores_criteria() {
        let notifications = sample();
        assert_eq!(unread_count(&notifications), 3);
    }

    #[test]
    fn two_item_drawer_examples() {
        let notifications = vec![
            notification("1", NotificationKind::Reminder, false, "Standup", "Team A"),
            notification("2", NotificationKind::Mention, true, "Review PR", "Team B"),
        ];
        let unread_only = FilterCriteria {
            status_filter: StatusFilter::Unread,
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter_view(&notifications, &unread_only)), vec!["1"]);

        let search_team_b = FilterCriteria {
            search_query: "team b".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter_view(&notifications, &search_team_b)), vec!["2"]);
    }
}
