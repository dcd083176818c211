//! Calendar event types and the profile filter.
//!
//! Events are titled time intervals associated with exactly one profile.
//! The dataset is static sample data; events are never added, edited, or
//! removed after initialization.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A titled time interval belonging to one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    /// Local wall-clock start time.
    pub start: NaiveDateTime,
    /// Local wall-clock end time. Always after `start`.
    pub end: NaiveDateTime,
    pub profile_id: i64,
}

impl Event {
    /// Create a new event.
    ///
    /// # Panics
    /// Panics if `end <= start`. Use [`try_new`](Self::try_new) for a
    /// non-panicking version.
    pub fn new(
        id: i64,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        profile_id: i64,
    ) -> Self {
        Self::try_new(id, title, start, end, profile_id)
            .expect("Event::new: end must be greater than start")
    }

    /// Create a new event, returning a Result.
    ///
    /// # Errors
    /// Returns an error if `end <= start`
    pub fn try_new(
        id: i64,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        profile_id: i64,
    ) -> Result<Self, ValidationError> {
        if end <= start {
            return Err(ValidationError::InvalidTimeRange { start, end });
        }
        Ok(Self {
            id,
            title: title.into(),
            start,
            end,
            profile_id,
        })
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Render this event as a human-readable sentence fragment, e.g.
    /// `Meeting with Team on March 15, 2024 from 10:00 AM to 11:00 AM`.
    pub fn describe(&self) -> String {
        format!(
            "{} on {} from {} to {}",
            self.title,
            self.start.format("%B %-d, %Y"),
            self.start.format("%-I:%M %p"),
            self.end.format("%-I:%M %p"),
        )
    }
}

/// Derive the visible event set from the full set and the selection.
///
/// With no selection every event is visible; otherwise only events whose
/// `profile_id` matches. Pure and idempotent.
pub fn filter_by_profile(events: &[Event], selected: Option<i64>) -> Vec<Event> {
    match selected {
        Some(profile_id) => events
            .iter()
            .filter(|e| e.profile_id == profile_id)
            .cloned()
            .collect(),
        None => events.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn describe_formats_dates_and_times() {
        let event = Event::new(
            1,
            "Meeting with Team",
            dt(2024, 3, 15, 10, 0),
            dt(2024, 3, 15, 11, 0),
            2,
        );
        assert_eq!(
            event.describe(),
            "Meeting with Team on March 15, 2024 from 10:00 AM to 11:00 AM"
        );
    }

    #[test]
    fn describe_uses_twelve_hour_clock() {
        let event = Event::new(
            2,
            "Gym Session",
            dt(2024, 3, 16, 18, 0),
            dt(2024, 3, 16, 19, 30),
            1,
        );
        assert_eq!(
            event.describe(),
            "Gym Session on March 16, 2024 from 6:00 PM to 7:30 PM"
        );
    }

    #[test]
    fn try_new_rejects_inverted_range() {
        let result = Event::try_new(
            1,
            "Backwards",
            dt(2024, 3, 15, 11, 0),
            dt(2024, 3, 15, 10, 0),
            1,
        );
        assert!(matches!(
            result,
            Err(ValidationError::InvalidTimeRange { .. })
        ));
    }

    #[test]
    fn filter_none_returns_all() {
        let events = vec![
            Event::new(1, "A", dt(2024, 3, 15, 9, 0), dt(2024, 3, 15, 10, 0), 1),
            Event::new(2, "B", dt(2024, 3, 15, 9, 0), dt(2024, 3, 15, 10, 0), 2),
        ];
        assert_eq!(filter_by_profile(&events, None), events);
    }

    #[test]
    fn filter_selects_matching_profile_only() {
        let events = vec![
            Event::new(1, "A", dt(2024, 3, 15, 9, 0), dt(2024, 3, 15, 10, 0), 1),
            Event::new(2, "B", dt(2024, 3, 15, 9, 0), dt(2024, 3, 15, 10, 0), 2),
            Event::new(3, "C", dt(2024, 3, 16, 9, 0), dt(2024, 3, 16, 10, 0), 2),
        ];
        let filtered = filter_by_profile(&events, Some(2));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|e| e.profile_id == 2));
    }

    #[test]
    fn filter_unknown_profile_is_empty() {
        let events = vec![Event::new(
            1,
            "A",
            dt(2024, 3, 15, 9, 0),
            dt(2024, 3, 15, 10, 0),
            1,
        )];
        assert!(filter_by_profile(&events, Some(99)).is_empty());
    }

    proptest! {
        #[test]
        fn filtered_is_always_a_subset(
            selected in proptest::option::of(0i64..5),
            profile_ids in proptest::collection::vec(0i64..5, 0..20),
        ) {
            let events: Vec<Event> = profile_ids
                .iter()
                .enumerate()
                .map(|(i, &pid)| {
                    Event::new(
                        i as i64,
                        format!("Event {i}"),
                        dt(2024, 3, 15, 9, 0),
                        dt(2024, 3, 15, 10, 0),
                        pid,
                    )
                })
                .collect();

            let filtered = filter_by_profile(&events, selected);
            prop_assert!(filtered.len() <= events.len());
            for event in &filtered {
                prop_assert!(events.contains(event));
                if let Some(pid) = selected {
                    prop_assert_eq!(event.profile_id, pid);
                }
            }
            if selected.is_none() {
                prop_assert_eq!(filtered.len(), events.len());
            }
        }
    }
}
