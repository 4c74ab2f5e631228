// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::filter_store::FilterStore;

pub struct AppState {
    pub dashboard_service: DashboardService,
    pub filters: FilterStore,
}
