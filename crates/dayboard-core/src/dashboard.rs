//! Dashboard state holder and transition functions.
//!
//! One explicit state object replaces the ambient UI state of a typical
//! single-screen dashboard: profiles, events, the current selection, the
//! summary text with its loading flag, and the school-hours flag. Every
//! mutation goes through a transition method and emits a [`DashboardEvent`].

use chrono::Utc;
use serde::Serialize;

use crate::error::SummaryError;
use crate::event::{filter_by_profile, Event};
use crate::events::DashboardEvent;
use crate::profile::Profile;
use crate::sample;
use crate::school::{SchoolHoursChecker, SchoolWindow};
use crate::summary::{build_description, SummaryProvider, SUMMARY_FALLBACK};

/// Core dashboard state.
///
/// Single-threaded by construction: all mutations happen through `&mut self`
/// on the owning presentation layer, so no locking is required.
#[derive(Debug, Clone)]
pub struct Dashboard {
    profiles: Vec<Profile>,
    events: Vec<Event>,
    selected_profile: Option<i64>,
    summary: String,
    is_loading: bool,
    school: SchoolHoursChecker,
}

/// Serializable view of the whole dashboard, the CLI rendition of the
/// original single screen.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub profiles: Vec<Profile>,
    pub selected_profile: Option<i64>,
    pub events: Vec<Event>,
    pub summary: String,
    pub is_loading: bool,
    pub in_school: bool,
}

impl Dashboard {
    /// Create a dashboard over a fixed dataset. The school window is
    /// evaluated once immediately.
    pub fn new(profiles: Vec<Profile>, events: Vec<Event>, window: SchoolWindow) -> Self {
        Self {
            profiles,
            events,
            selected_profile: None,
            summary: String::new(),
            is_loading: false,
            school: SchoolHoursChecker::new(window),
        }
    }

    /// Dashboard over the built-in sample dataset with the default window.
    pub fn with_sample_data() -> Self {
        Self::new(
            sample::sample_profiles(),
            sample::sample_events(),
            SchoolWindow::default(),
        )
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn selected_profile(&self) -> Option<i64> {
        self.selected_profile
    }

    pub fn find_profile(&self, id: i64) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// The visible event set: all events, or the selected profile's subset.
    pub fn visible_events(&self) -> Vec<Event> {
        filter_by_profile(&self.events, self.selected_profile)
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_in_school(&self) -> bool {
        self.school.status().is_in_school()
    }

    pub fn view(&self) -> DashboardView {
        DashboardView {
            profiles: self.profiles.clone(),
            selected_profile: self.selected_profile,
            events: self.visible_events(),
            summary: self.summary.clone(),
            is_loading: self.is_loading,
            in_school: self.is_in_school(),
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> DashboardEvent {
        DashboardEvent::StateSnapshot {
            selected_profile: self.selected_profile,
            visible_events: self.visible_events().len(),
            summary: self.summary.clone(),
            is_loading: self.is_loading,
            in_school: self.is_in_school(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Select a profile. Re-selecting the current profile leaves it
    /// selected - there is no toggle-off.
    pub fn select_profile(&mut self, profile_id: i64) -> DashboardEvent {
        self.selected_profile = Some(profile_id);
        DashboardEvent::ProfileSelected {
            profile_id,
            visible_events: self.visible_events().len(),
            at: Utc::now(),
        }
    }

    /// Clear the selection, restoring the full event list.
    pub fn clear_selection(&mut self) -> DashboardEvent {
        self.selected_profile = None;
        DashboardEvent::SelectionCleared {
            visible_events: self.visible_events().len(),
            at: Utc::now(),
        }
    }

    /// Start a summary request, returning the description to hand to the
    /// provider. Returns `None` while a request is outstanding - the
    /// loading flag stays set and no duplicate request is issued.
    pub fn begin_summary_request(&mut self) -> Option<String> {
        if self.is_loading {
            return None;
        }
        self.is_loading = true;
        Some(build_description(&self.visible_events()))
    }

    /// Finish a summary request. The loading flag is cleared regardless of
    /// outcome; a rejection is logged and replaced by the fallback text.
    pub fn complete_summary_request(
        &mut self,
        result: Result<String, SummaryError>,
    ) -> DashboardEvent {
        self.is_loading = false;
        match result {
            Ok(text) => {
                self.summary = text.clone();
                DashboardEvent::SummaryReady {
                    summary: text,
                    at: Utc::now(),
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "summary generation failed");
                self.summary = SUMMARY_FALLBACK.to_string();
                DashboardEvent::SummaryFailed {
                    message: err.to_string(),
                    at: Utc::now(),
                }
            }
        }
    }

    /// Run one full request against a provider. Returns `None` if a request
    /// was already outstanding.
    pub async fn generate_summary<P: SummaryProvider>(
        &mut self,
        provider: &P,
    ) -> Option<DashboardEvent> {
        let description = self.begin_summary_request()?;
        let result = provider.generate(&description).await;
        Some(self.complete_summary_request(result))
    }

    /// Re-evaluate the school window against the current local time.
    pub fn tick_school(&mut self) -> Option<DashboardEvent> {
        self.school.tick()
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::with_sample_data()
    }
}
