use clap::Subcommand;
use dayboard_core::{Config, Dashboard, SchoolWindow};

use super::apply_selection;

#[derive(Subcommand)]
pub enum DashboardAction {
    /// Print the full dashboard state as JSON
    Show {
        /// Select this profile before rendering
        #[arg(long)]
        profile: Option<i64>,
    },
}

pub fn run(action: DashboardAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let window = config
        .school
        .window()
        .unwrap_or_else(|_| SchoolWindow::default());

    match action {
        DashboardAction::Show { profile } => {
            let mut dashboard = Dashboard::new(
                dayboard_core::sample::sample_profiles(),
                dayboard_core::sample::sample_events(),
                window,
            );
            apply_selection(&mut dashboard, profile)?;
            println!("{}", serde_json::to_string_pretty(&dashboard.view())?);
        }
    }
    Ok(())
}
