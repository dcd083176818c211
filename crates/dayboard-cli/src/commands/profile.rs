use clap::Subcommand;
use dayboard_core::Dashboard;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Print all profiles as JSON
    List,
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    let dashboard = Dashboard::with_sample_data();
    match action {
        ProfileAction::List => {
            println!("{}", serde_json::to_string_pretty(dashboard.profiles())?);
        }
    }
    Ok(())
}
