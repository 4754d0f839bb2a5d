// Application state for HTTP handlers
use crate::application::station_registry::StationRegistry;
use crate::application::summary_service::SummaryService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<StationRegistry>,
    pub summary_service: SummaryService,
}
