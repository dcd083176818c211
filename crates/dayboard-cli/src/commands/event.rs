use clap::Subcommand;
use dayboard_core::Dashboard;

use super::apply_selection;

#[derive(Subcommand)]
pub enum EventAction {
    /// Print visible events as JSON
    List {
        /// Only show events for this profile id
        #[arg(long)]
        profile: Option<i64>,
    },
}

pub fn run(action: EventAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut dashboard = Dashboard::with_sample_data();
    match action {
        EventAction::List { profile } => {
            apply_selection(&mut dashboard, profile)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&dashboard.visible_events())?
            );
        }
    }
    Ok(())
}
