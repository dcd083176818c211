//! School-hours window tracking.
//!
//! The checker is a wall-clock-based two-state machine. It does not use
//! internal threads - the caller is responsible for calling `tick()`
//! periodically (the dashboard default is every 60 seconds).
//!
//! ## State Transitions
//!
//! ```text
//! NotInSchool <-> InSchool
//! ```
//!
//! The state is recomputed fresh from the clock on every evaluation, so no
//! drift accumulates and nothing persists across restarts.
//!
//! [`SchoolWatcher`] wraps the checker in a tokio task firing on an interval,
//! with an explicit start/stop contract: the periodic work is cancelled when
//! the watcher is stopped or dropped.

use std::time::Duration;

use chrono::{Local, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::events::DashboardEvent;

/// How often the watcher re-evaluates the window.
pub const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_secs(60);

/// Whether the current time falls inside the school window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchoolStatus {
    InSchool,
    NotInSchool,
}

impl SchoolStatus {
    pub fn is_in_school(self) -> bool {
        self == SchoolStatus::InSchool
    }
}

/// The fixed daily local-time window flagged as "in school".
///
/// The window is half-open: `start <= t < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl SchoolWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, t: NaiveTime) -> bool {
        self.start <= t && t < self.end
    }

    /// Classify a wall-clock time against this window.
    pub fn status_at(&self, now: NaiveDateTime) -> SchoolStatus {
        if self.contains(now.time()) {
            SchoolStatus::InSchool
        } else {
            SchoolStatus::NotInSchool
        }
    }
}

impl Default for SchoolWindow {
    /// The 08:00-15:00 school day.
    fn default() -> Self {
        Self {
            start: hm(8, 0),
            end: hm(15, 0),
        }
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid wall-clock time")
}

/// Two-state machine tracking the school-hours flag.
///
/// Evaluated once at construction and then on every `tick()`.
#[derive(Debug, Clone)]
pub struct SchoolHoursChecker {
    window: SchoolWindow,
    status: SchoolStatus,
}

impl SchoolHoursChecker {
    /// Create a checker, evaluating the window against the current local time.
    pub fn new(window: SchoolWindow) -> Self {
        let status = window.status_at(Local::now().naive_local());
        Self { window, status }
    }

    pub fn status(&self) -> SchoolStatus {
        self.status
    }

    pub fn window(&self) -> SchoolWindow {
        self.window
    }

    /// Re-evaluate against the current local time. Returns
    /// `Some(DashboardEvent::SchoolStatusChanged)` on a transition.
    pub fn tick(&mut self) -> Option<DashboardEvent> {
        self.evaluate_at(Local::now().naive_local())
    }

    /// Re-evaluate against an explicit wall-clock time.
    pub fn evaluate_at(&mut self, now: NaiveDateTime) -> Option<DashboardEvent> {
        let next = self.window.status_at(now);
        if next == self.status {
            return None;
        }
        self.status = next;
        Some(DashboardEvent::SchoolStatusChanged {
            in_school: next.is_in_school(),
            at: Utc::now(),
        })
    }
}

impl Default for SchoolHoursChecker {
    fn default() -> Self {
        Self::new(SchoolWindow::default())
    }
}

/// Periodic background evaluation of the school window.
///
/// Owns a tokio task that ticks a [`SchoolHoursChecker`] on an interval and
/// publishes the status over a watch channel. The task is aborted by
/// [`stop`](Self::stop) or on drop, so no periodic work leaks past teardown.
#[derive(Debug)]
pub struct SchoolWatcher {
    handle: JoinHandle<()>,
    rx: watch::Receiver<SchoolStatus>,
}

impl SchoolWatcher {
    /// Start watching. The first evaluation happens immediately.
    pub fn spawn(window: SchoolWindow, interval: Duration) -> Self {
        let mut checker = SchoolHoursChecker::new(window);
        let (tx, rx) = watch::channel(checker.status());

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first interval tick fires immediately; the checker already
            // covered it in `new`.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if checker.tick().is_some() && tx.send(checker.status()).is_err() {
                    // All receivers are gone.
                    return;
                }
            }
        });

        Self { handle, rx }
    }

    /// Current status as last published by the watcher task.
    pub fn status(&self) -> SchoolStatus {
        *self.rx.borrow()
    }

    /// Subscribe to status changes.
    pub fn subscribe(&self) -> watch::Receiver<SchoolStatus> {
        self.rx.clone()
    }

    /// Cancel the periodic evaluation.
    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for SchoolWatcher {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn window_boundaries() {
        let window = SchoolWindow::default();
        assert!(!window.contains(at(7, 59).time()));
        assert!(window.contains(at(8, 0).time()));
        assert!(window.contains(at(14, 59).time()));
        assert!(!window.contains(at(15, 0).time()));
    }

    #[test]
    fn status_at_matches_window() {
        let window = SchoolWindow::default();
        assert_eq!(window.status_at(at(7, 59)), SchoolStatus::NotInSchool);
        assert_eq!(window.status_at(at(8, 0)), SchoolStatus::InSchool);
        assert_eq!(window.status_at(at(14, 59)), SchoolStatus::InSchool);
        assert_eq!(window.status_at(at(15, 0)), SchoolStatus::NotInSchool);
    }

    #[test]
    fn evaluate_emits_event_only_on_transition() {
        let mut checker = SchoolHoursChecker::default();

        // Force a known starting state.
        checker.evaluate_at(at(6, 0));
        assert_eq!(checker.status(), SchoolStatus::NotInSchool);

        let entered = checker.evaluate_at(at(9, 0));
        assert!(matches!(
            entered,
            Some(DashboardEvent::SchoolStatusChanged { in_school: true, .. })
        ));

        // Still inside the window: no event.
        assert!(checker.evaluate_at(at(10, 0)).is_none());

        let left = checker.evaluate_at(at(15, 0));
        assert!(matches!(
            left,
            Some(DashboardEvent::SchoolStatusChanged {
                in_school: false,
                ..
            })
        ));
    }

    #[test]
    fn midnight_window_edges() {
        let window = SchoolWindow::new(hm(0, 0), hm(23, 59));
        assert!(window.contains(at(0, 0).time()));
        assert!(!window.contains(hm(23, 59)));
    }

    #[tokio::test]
    async fn watcher_publishes_and_stops() {
        let watcher = SchoolWatcher::spawn(SchoolWindow::default(), Duration::from_millis(10));
        let status = watcher.status();
        assert!(matches!(
            status,
            SchoolStatus::InSchool | SchoolStatus::NotInSchool
        ));

        let rx = watcher.subscribe();
        watcher.stop();
        // The channel stays readable after the task is cancelled.
        assert_eq!(*rx.borrow(), status);
    }
}
