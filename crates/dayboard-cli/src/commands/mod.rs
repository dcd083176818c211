pub mod config;
pub mod dashboard;
pub mod event;
pub mod profile;
pub mod school;
pub mod summary;

use dayboard_core::{Dashboard, ValidationError};

/// Apply a `--profile` argument to a dashboard, rejecting unknown ids.
pub fn apply_selection(
    dashboard: &mut Dashboard,
    profile: Option<i64>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(id) = profile {
        if dashboard.find_profile(id).is_none() {
            return Err(Box::new(ValidationError::UnknownProfile { id }));
        }
        dashboard.select_profile(id);
    }
    Ok(())
}
