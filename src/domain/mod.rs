// Domain layer - Department snapshots, filters and derived views
pub mod charts;
pub mod dashboard;
pub mod department;
pub mod filters;
pub mod format;
pub mod kpi;
pub mod store;
