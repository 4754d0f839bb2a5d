// Domain layer - Core station and alarm models
pub mod alert;
pub mod station;
pub mod summary;
pub mod topology;
