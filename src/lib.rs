use std::sync::Arc;

use crate::backend::console::{LogDispatcher, LogNotifier, StaticAccessControl};
use crate::backend::in_memory_hotel::InMemoryHotel;
use crate::domain::clock::clock::SharedClock;
use crate::domain::config::DashboardConfig;
use crate::domain::dashboard::{Collaborators, Dashboard};
use crate::error::Result;

pub mod api;
pub mod backend;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Builds a dashboard over a hotel snapshot file with console collaborators.
///
/// `capabilities` are the access groups the simulated user holds.
pub async fn open_dashboard_from_file(
    file_path: &str,
    config: DashboardConfig,
    capabilities: Vec<String>,
    clock: SharedClock,
) -> Result<(Dashboard, Arc<InMemoryHotel>)> {
    let hotel = Arc::new(InMemoryHotel::load(file_path, config.occupied_states.clone())?);
    log::info!("Hotel snapshot loaded. Starting dashboard '{}'.", config.title);

    let collaborators = Collaborators {
        data_source: hotel.clone(),
        dispatcher: Arc::new(LogDispatcher),
        access_control: Arc::new(StaticAccessControl::new(capabilities)),
        notifier: Arc::new(LogNotifier),
        clock,
    };

    let dashboard = Dashboard::start(collaborators, config).await?;
    log::info!("Dashboard started with {} rooms.", dashboard.rooms().len());

    Ok((dashboard, hotel))
}
