use std::time::Duration;

use clap::Subcommand;
use dayboard_core::{Config, Dashboard, SchoolWindow, SimulatedSummaryProvider};

use super::apply_selection;

#[derive(Subcommand)]
pub enum SummaryAction {
    /// Request a summary for the visible events and print the outcome
    Generate {
        /// Only summarize events for this profile id
        #[arg(long)]
        profile: Option<i64>,
        /// Override the configured provider delay
        #[arg(long)]
        delay_ms: Option<u64>,
    },
}

pub async fn run(action: SummaryAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let window = config
        .school
        .window()
        .unwrap_or_else(|_| SchoolWindow::default());

    match action {
        SummaryAction::Generate { profile, delay_ms } => {
            let provider = match delay_ms {
                Some(ms) => SimulatedSummaryProvider::new(Duration::from_millis(ms)),
                None => config.summary.provider(),
            };

            let mut dashboard = Dashboard::new(
                dayboard_core::sample::sample_profiles(),
                dayboard_core::sample::sample_events(),
                window,
            );
            apply_selection(&mut dashboard, profile)?;

            // `None` cannot happen here: this is the only trigger and no
            // request is outstanding on a fresh dashboard.
            if let Some(event) = dashboard.generate_summary(&provider).await {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
    }
    Ok(())
}
