//! Spatial reasoning utilities built in Rust
//!
//! This crate provides:
//! - A* path cost search on an implicit grid with a static obstacle
//! - Distance, travel time and collision checks in 3D
//! - Brute force cosine nearest-vector lookup
//! - A C interface for embedding in other runtimes

pub mod ai;
pub mod core;
pub mod ffi;
pub mod physics;
pub mod recall;

// Re-exports for convenience
pub use glam;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::ai::{
        PathError, PathSearchEngine, SearchStats, UNREACHABLE, find_shortest_path,
    };
    pub use crate::core::{ConfigError, GridConfig, ObstacleRect};
    pub use crate::physics::{TransportMode, check_collision, distance, estimate_travel_time};
    pub use crate::recall::VectorStore;
    pub use glam::DVec3;
}
