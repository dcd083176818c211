use std::time::Duration;

use chrono::{DateTime, Local, NaiveTime, Utc};
use clap::Subcommand;
use dayboard_core::{Config, DashboardEvent, SchoolHoursChecker, SchoolWatcher, SchoolWindow};
use serde::Serialize;

#[derive(Subcommand)]
pub enum SchoolAction {
    /// Evaluate the window once and print the result
    Status,
    /// Run the periodic checker until Ctrl-C, printing status changes
    Watch {
        /// Override the configured check interval
        #[arg(long)]
        interval_secs: Option<u64>,
    },
}

#[derive(Serialize)]
struct StatusReport {
    in_school: bool,
    window_start: NaiveTime,
    window_end: NaiveTime,
    checked_at: DateTime<Utc>,
}

pub async fn run(action: SchoolAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let window = config
        .school
        .window()
        .unwrap_or_else(|_| SchoolWindow::default());

    match action {
        SchoolAction::Status => {
            let checker = SchoolHoursChecker::new(window);
            let report = StatusReport {
                in_school: checker.status().is_in_school(),
                window_start: window.start,
                window_end: window.end,
                checked_at: Utc::now(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        SchoolAction::Watch { interval_secs } => {
            let interval = interval_secs
                .map(Duration::from_secs)
                .unwrap_or_else(|| config.school.check_interval());

            let watcher = SchoolWatcher::spawn(window, interval);
            let mut rx = watcher.subscribe();

            let initial = DashboardEvent::SchoolStatusChanged {
                in_school: watcher.status().is_in_school(),
                at: Utc::now(),
            };
            println!("{}", serde_json::to_string_pretty(&initial)?);
            eprintln!(
                "watching school window {}-{} every {}s at {} (Ctrl-C to stop)",
                window.start,
                window.end,
                interval.as_secs(),
                Local::now().format("%H:%M"),
            );

            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => break,
                    changed = rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let event = DashboardEvent::SchoolStatusChanged {
                            in_school: rx.borrow().is_in_school(),
                            at: Utc::now(),
                        };
                        println!("{}", serde_json::to_string_pretty(&event)?);
                    }
                }
            }

            watcher.stop();
        }
    }
    Ok(())
}
