// Application layer - Use cases and provider seams
pub mod dashboard_service;
pub mod filter_store;
pub mod snapshot_provider;
