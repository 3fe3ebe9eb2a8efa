//! AI and navigation module
//!
//! Provides grid path cost search.

mod pathfinding;

pub use pathfinding::{
    PathError, PathSearchEngine, SearchStats, UNREACHABLE, find_shortest_path,
};
