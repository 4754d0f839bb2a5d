// Application layer - Registry, workflow, and aggregation services
pub mod station_registry;
pub mod summary_service;
pub mod telemetry_source;
