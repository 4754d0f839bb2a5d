// Infrastructure layer - Configuration loading and the seed source
pub mod config;
pub mod static_source;
