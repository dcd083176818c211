//! Built-in sample dataset.
//!
//! The dashboard operates on static sample data created once at startup;
//! nothing here is persisted or mutated.

use chrono::{NaiveDate, NaiveDateTime};

use crate::event::Event;
use crate::profile::Profile;

pub fn sample_profiles() -> Vec<Profile> {
    vec![
        Profile::new(1, "Personal"),
        Profile::new(2, "Work"),
        Profile::new(3, "Family"),
    ]
}

pub fn sample_events() -> Vec<Event> {
    vec![
        Event::new(
            1,
            "Meeting with Team",
            dt(2024, 3, 15, 10, 0),
            dt(2024, 3, 15, 11, 0),
            2,
        ),
        Event::new(
            2,
            "Gym Session",
            dt(2024, 3, 16, 18, 0),
            dt(2024, 3, 16, 19, 30),
            1,
        ),
        Event::new(
            3,
            "Family Dinner",
            dt(2024, 3, 17, 19, 0),
            dt(2024, 3, 17, 21, 0),
            3,
        ),
        Event::new(
            4,
            "School",
            dt(2024, 3, 18, 8, 0),
            dt(2024, 3, 18, 15, 0),
            3,
        ),
    ]
}

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .expect("valid sample date")
        .and_hms_opt(h, min, 0)
        .expect("valid sample time")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn event_ids_are_unique() {
        let events = sample_events();
        let ids: HashSet<i64> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), events.len());
    }

    #[test]
    fn events_reference_existing_profiles() {
        let profile_ids: HashSet<i64> = sample_profiles().iter().map(|p| p.id).collect();
        for event in sample_events() {
            assert!(profile_ids.contains(&event.profile_id));
        }
    }

    #[test]
    fn event_ranges_are_valid() {
        for event in sample_events() {
            assert!(event.end > event.start);
        }
    }
}
