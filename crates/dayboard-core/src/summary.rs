//! Summary collaborator seam.
//!
//! The dashboard hands the collaborator one descriptive string built from
//! the visible events and stores whatever comes back. The shipped
//! [`SimulatedSummaryProvider`] stands in for a real backend: it waits a
//! fixed delay and returns a templated report keyed off the number of
//! sentence fragments in its input.

use std::future::Future;
use std::time::Duration;

use crate::error::SummaryError;
use crate::event::Event;

/// User-facing text stored when the collaborator rejects.
pub const SUMMARY_FALLBACK: &str = "Failed to generate summary. Please try again later.";

/// Asynchronous text-generation collaborator.
///
/// Implementations may reject; the dashboard catches the error, logs it,
/// and falls back to [`SUMMARY_FALLBACK`]. One attempt per trigger - no
/// retry, no timeout.
pub trait SummaryProvider {
    /// Produce a short report for the given event description string.
    fn generate(
        &self,
        description: &str,
    ) -> impl Future<Output = Result<String, SummaryError>> + Send;
}

/// Join event descriptions into the single string handed to the provider.
pub fn build_description(events: &[Event]) -> String {
    events
        .iter()
        .map(Event::describe)
        .collect::<Vec<_>>()
        .join(". ")
}

/// Delay-based stand-in for a real summary backend.
///
/// Counts `'.'`-separated fragments in the description and reports that as
/// the event count. An empty description still splits into one fragment, so
/// the report never claims zero events; the "schedule is clear" remark is
/// kept for parity with the collaborator's contract.
#[derive(Debug, Clone)]
pub struct SimulatedSummaryProvider {
    delay: Duration,
}

impl SimulatedSummaryProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSummaryProvider {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl SummaryProvider for SimulatedSummaryProvider {
    fn generate(
        &self,
        description: &str,
    ) -> impl Future<Output = Result<String, SummaryError>> + Send {
        let delay = self.delay;
        let description = description.to_string();
        async move {
            tokio::time::sleep(delay).await;
            Ok(render_report(&description))
        }
    }
}

fn render_report(description: &str) -> String {
    let event_count = description.split('.').count();
    let plural = if event_count != 1 { "s" } else { "" };
    let remark = if event_count > 0 {
        "It looks like you have a busy schedule ahead. Make sure to allocate enough time \
         for rest and personal activities between your commitments."
    } else {
        "Your schedule is clear. Consider planning some activities or using this time \
         for personal development."
    };
    format!("You have {event_count} event{plural} scheduled. {remark}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn description_joins_fragments_with_sentence_separator() {
        let events = vec![
            Event::new(1, "Meeting with Team", dt(15, 10, 0), dt(15, 11, 0), 2),
            Event::new(2, "Gym Session", dt(16, 18, 0), dt(16, 19, 30), 1),
        ];
        assert_eq!(
            build_description(&events),
            "Meeting with Team on March 15, 2024 from 10:00 AM to 11:00 AM. \
             Gym Session on March 16, 2024 from 6:00 PM to 7:30 PM"
        );
    }

    #[test]
    fn description_of_no_events_is_empty() {
        assert_eq!(build_description(&[]), "");
    }

    #[tokio::test]
    async fn report_counts_fragments() {
        let provider = SimulatedSummaryProvider::new(Duration::ZERO);
        let events = vec![
            Event::new(1, "Meeting with Team", dt(15, 10, 0), dt(15, 11, 0), 2),
            Event::new(2, "Gym Session", dt(16, 18, 0), dt(16, 19, 30), 1),
        ];
        let report = provider
            .generate(&build_description(&events))
            .await
            .unwrap();
        assert!(report.starts_with("You have 2 events scheduled."));
    }

    #[tokio::test]
    async fn report_for_single_event_is_singular() {
        let provider = SimulatedSummaryProvider::new(Duration::ZERO);
        let report = provider
            .generate("Meeting with Team on March 15, 2024 from 10:00 AM to 11:00 AM")
            .await
            .unwrap();
        assert!(report.starts_with("You have 1 event scheduled."));
    }

    #[tokio::test]
    async fn empty_description_still_counts_one_fragment() {
        let provider = SimulatedSummaryProvider::new(Duration::ZERO);
        let report = provider.generate("").await.unwrap();
        assert!(report.starts_with("You have 1 event scheduled."));
    }
}
