// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod http_provider;
pub mod http_response;
pub mod mock_provider;
pub mod snapshot_generator;
