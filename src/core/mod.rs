//! Core module
//!
//! Contains the grid configuration

mod config;

pub use config::{ConfigError, DEFAULT_GRID_SIZE, GridConfig, ObstacleRect};
