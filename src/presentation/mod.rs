// Presentation layer - HTTP adapter over the core services
pub mod app_state;
pub mod handlers;
