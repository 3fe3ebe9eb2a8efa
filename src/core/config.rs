//! Grid configuration
//!
//! The search grid is never materialized; its side length and the blocked
//! rectangle are plain values that can be saved and loaded as RON or JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default side length of the square search grid
pub const DEFAULT_GRID_SIZE: i32 = 100;

/// Axis-aligned blocked rectangle. All four bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleRect {
    /// Smallest blocked x
    pub x_min: i32,
    /// Largest blocked x
    pub x_max: i32,
    /// Smallest blocked y
    pub y_min: i32,
    /// Largest blocked y
    pub y_max: i32,
}

impl ObstacleRect {
    /// Create a rectangle from two inclusive corners
    #[must_use]
    pub const fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Check if a cell lies inside the rectangle
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

impl Default for ObstacleRect {
    fn default() -> Self {
        Self::new(50, 50, 60, 60)
    }
}

/// Grid configuration for path search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Side length of the square grid
    #[serde(default = "default_size")]
    pub size: i32,
    /// Impassable region
    #[serde(default)]
    pub obstacle: ObstacleRect,
}

fn default_size() -> i32 {
    DEFAULT_GRID_SIZE
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            obstacle: ObstacleRect::default(),
        }
    }
}

impl GridConfig {
    /// Set the grid side length
    #[must_use]
    pub const fn with_size(mut self, size: i32) -> Self {
        self.size = size;
        self
    }

    /// Set the blocked rectangle
    #[must_use]
    pub const fn with_obstacle(mut self, obstacle: ObstacleRect) -> Self {
        self.obstacle = obstacle;
        self
    }

    /// Check if a cell lies inside the grid
    #[inline]
    #[must_use]
    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.size && y >= 0 && y < self.size
    }

    /// Check if a cell is blocked by the obstacle
    #[inline]
    #[must_use]
    pub const fn is_blocked(&self, x: i32, y: i32) -> bool {
        self.obstacle.contains(x, y)
    }

    /// Reject configurations the search cannot use
    ///
    /// # Errors
    ///
    /// Returns an error if the size is not positive or the obstacle bounds
    /// are inverted
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size <= 0 {
            return Err(ConfigError::Invalid(format!(
                "grid size must be positive, got {}",
                self.size
            )));
        }
        let o = &self.obstacle;
        if o.x_min > o.x_max || o.y_min > o.y_max {
            return Err(ConfigError::Invalid(format!(
                "obstacle bounds inverted: ({}, {})-({}, {})",
                o.x_min, o.y_min, o.x_max, o.y_max
            )));
        }
        Ok(())
    }

    /// Save the configuration to a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_ron(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let ron_string = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;
        fs::write(path, ron_string).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Ok(())
    }

    /// Load a configuration from a RON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, deserialization fails or
    /// the loaded values are invalid
    pub fn load_ron(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        let config: GridConfig =
            ron::from_str(&content).map_err(|e| ConfigError::DeserializeError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json_string = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;
        fs::write(path, json_string).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Ok(())
    }

    /// Load a configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, deserialization fails or
    /// the loaded values are invalid
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        let config: GridConfig = serde_json::from_str(&content)
            .map_err(|e| ConfigError::DeserializeError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration, picking the format from the file extension
    ///
    /// `.json` is read as JSON, anything else as RON.
    ///
    /// # Errors
    ///
    /// Same as [`GridConfig::load_ron`] and [`GridConfig::load_json`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::load_json(path),
            _ => Self::load_ron(path),
        }
    }
}

/// Errors that can occur while loading or saving a configuration
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error
    IoError(String),
    /// Serialization error
    SerializeError(String),
    /// Deserialization error
    DeserializeError(String),
    /// Values out of range
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::SerializeError(e) => write!(f, "Serialization error: {e}"),
            Self::DeserializeError(e) => write!(f, "Deserialization error: {e}"),
            Self::Invalid(e) => write!(f, "Invalid configuration: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}
