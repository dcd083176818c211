//! # Dayboard Core Library
//!
//! This library provides the core logic for the Dayboard calendar dashboard.
//! It implements a CLI-first philosophy where all operations are available
//! via a standalone CLI binary, with any GUI being a thin presentation layer
//! over the same core library.
//!
//! ## Architecture
//!
//! - **Dashboard**: An explicit state holder for profiles, events, the
//!   current selection, summary text, and the school-hours flag. All
//!   mutations go through transition methods that emit [`DashboardEvent`]s.
//! - **School-hours checker**: A wall-clock-based two-state machine that the
//!   caller ticks periodically, plus a tokio-backed watcher with a guaranteed
//!   stop-on-drop contract.
//! - **Summary provider**: A trait seam for the asynchronous text-generation
//!   collaborator. The shipped implementation simulates the backend with a
//!   fixed delay and a templated report.
//!
//! ## Key Components
//!
//! - [`Dashboard`]: Core state holder and transition functions
//! - [`SchoolHoursChecker`] / [`SchoolWatcher`]: Schedule-window tracking
//! - [`SummaryProvider`]: Trait for summary collaborators
//! - [`Config`]: Application configuration management

pub mod config;
pub mod dashboard;
pub mod error;
pub mod event;
pub mod events;
pub mod profile;
pub mod sample;
pub mod school;
pub mod summary;

pub use config::Config;
pub use dashboard::{Dashboard, DashboardView};
pub use error::{ConfigError, CoreError, SummaryError, ValidationError};
pub use event::Event;
pub use events::DashboardEvent;
pub use profile::Profile;
pub use school::{SchoolHoursChecker, SchoolStatus, SchoolWatcher, SchoolWindow};
pub use summary::{SimulatedSummaryProvider, SummaryProvider, SUMMARY_FALLBACK};
