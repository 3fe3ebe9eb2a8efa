//! A* path cost search on an implicit 2D grid
//!
//! The grid is never allocated. Cell membership and obstacle status are
//! predicates over [`GridConfig`], and each search owns its own frontier and
//! best-cost table, so an engine can be shared freely between threads.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use glam::DVec3;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::GridConfig;
use crate::physics;

/// Sentinel returned at the boundary when no cost can be produced
pub const UNREACHABLE: f64 = -1.0;

/// Cost of a single cardinal step
const STEP_COST: f64 = 1.0;

/// 4-directional movement offsets
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Reasons a search produced no cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The start cell lies outside the grid; no search was run
    StartOutOfBounds {
        /// Requested start x
        x: i32,
        /// Requested start y
        y: i32,
    },
    /// The frontier was exhausted without reaching the target
    Unreachable,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StartOutOfBounds { x, y } => write!(f, "start ({x}, {y}) is outside the grid"),
            Self::Unreachable => write!(f, "target is unreachable"),
        }
    }
}

impl std::error::Error for PathError {}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frontier entries pushed, including the start
    pub pushed: usize,
    /// Cells expanded (neighbors generated)
    pub expanded: usize,
    /// Popped entries discarded because a cheaper cost was recorded later
    ///
    /// With unit step costs the Euclidean heuristic is consistent, so this
    /// stays 0 on every grid the engine searches.
    pub stale: usize,
}

/// Frontier entry
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    x: i32,
    y: i32,
    g_cost: f64, // Cost from start along the path that produced this entry
    h_cost: f64, // Heuristic to target
}

impl SearchNode {
    fn f_cost(&self) -> f64 {
        self.g_cost + self.h_cost
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse for min-heap
        other.f_cost().total_cmp(&self.f_cost())
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Grid path search engine
///
/// Holds only the grid configuration; every call to [`search`](Self::search)
/// is independent of every other.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathSearchEngine {
    config: GridConfig,
}

impl PathSearchEngine {
    /// Create an engine for the given grid
    #[must_use]
    pub const fn new(config: GridConfig) -> Self {
        Self { config }
    }

    /// The grid this engine searches
    #[must_use]
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Passable 4-directional neighbors of a cell
    fn neighbors(&self, x: i32, y: i32) -> SmallVec<[(i32, i32); 4]> {
        DIRECTIONS
            .iter()
            .map(|&(dx, dy)| (x + dx, y + dy))
            .filter(|&(nx, ny)| self.config.in_bounds(nx, ny) && !self.config.is_blocked(nx, ny))
            .collect()
    }

    /// Straight-line distance in the z = 0 plane
    fn heuristic(x: i32, y: i32, goal_x: i32, goal_y: i32) -> f64 {
        physics::distance(
            DVec3::new(f64::from(x), f64::from(y), 0.0),
            DVec3::new(f64::from(goal_x), f64::from(goal_y), 0.0),
        )
    }

    /// Find the minimum cost from `start` to `target`
    ///
    /// Only the start is bounds-checked. A target outside the grid is never
    /// reached, so the search runs until the frontier is empty.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::StartOutOfBounds`] without searching, or
    /// [`PathError::Unreachable`] once the frontier is exhausted
    pub fn search(&self, start: (i32, i32), target: (i32, i32)) -> Result<f64, PathError> {
        self.search_with_stats(start, target).0
    }

    /// Same as [`search`](Self::search), also reporting frontier counters
    pub fn search_with_stats(
        &self,
        start: (i32, i32),
        target: (i32, i32),
    ) -> (Result<f64, PathError>, SearchStats) {
        let mut stats = SearchStats::default();
        let (start_x, start_y) = start;
        let (goal_x, goal_y) = target;

        if !self.config.in_bounds(start_x, start_y) {
            log::warn!("Path search rejected: start ({start_x}, {start_y}) out of bounds");
            return (
                Err(PathError::StartOutOfBounds {
                    x: start_x,
                    y: start_y,
                }),
                stats,
            );
        }

        let mut open_set = BinaryHeap::new();
        let mut g_score: FxHashMap<(i32, i32), f64> = FxHashMap::default();

        g_score.insert(start, 0.0);
        open_set.push(SearchNode {
            x: start_x,
            y: start_y,
            g_cost: 0.0,
            h_cost: Self::heuristic(start_x, start_y, goal_x, goal_y),
        });
        stats.pushed += 1;

        while let Some(current) = open_set.pop() {
            let best = g_score
                .get(&(current.x, current.y))
                .copied()
                .unwrap_or(f64::INFINITY);

            // A cheaper entry for this cell was pushed after this one
            if current.g_cost > best {
                stats.stale += 1;
                continue;
            }

            if current.x == goal_x && current.y == goal_y {
                log::debug!(
                    "Path ({start_x}, {start_y}) -> ({goal_x}, {goal_y}): cost {best}, {stats:?}"
                );
                return (Ok(best), stats);
            }

            stats.expanded += 1;

            for (nx, ny) in self.neighbors(current.x, current.y) {
                let tentative_g = best + STEP_COST;

                if tentative_g < g_score.get(&(nx, ny)).copied().unwrap_or(f64::INFINITY) {
                    g_score.insert((nx, ny), tentative_g);
                    open_set.push(SearchNode {
                        x: nx,
                        y: ny,
                        g_cost: tentative_g,
                        h_cost: Self::heuristic(nx, ny, goal_x, goal_y),
                    });
                    stats.pushed += 1;
                }
            }
        }

        log::debug!(
            "Path ({start_x}, {start_y}) -> ({goal_x}, {goal_y}): unreachable, {stats:?}"
        );
        (Err(PathError::Unreachable), stats)
    }

    /// Sentinel form of [`search`](Self::search): the cost, or [`UNREACHABLE`]
    #[must_use]
    pub fn find_shortest_path(
        &self,
        start_x: i32,
        start_y: i32,
        target_x: i32,
        target_y: i32,
    ) -> f64 {
        self.search((start_x, start_y), (target_x, target_y))
            .unwrap_or(UNREACHABLE)
    }
}

/// Find a path cost on the default 100x100 grid, or [`UNREACHABLE`]
#[must_use]
pub fn find_shortest_path(start_x: i32, start_y: i32, target_x: i32, target_y: i32) -> f64 {
    PathSearchEngine::default().find_shortest_path(start_x, start_y, target_x, target_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ObstacleRect;

    #[test]
    fn test_same_cell() {
        assert_eq!(find_shortest_path(0, 0, 0, 0), 0.0);
        assert_eq!(find_shortest_path(42, 17, 42, 17), 0.0);
    }

    #[test]
    fn test_direct_path() {
        assert_eq!(find_shortest_path(0, 0, 5, 0), 5.0);
        assert_eq!(find_shortest_path(0, 0, 0, 99), 99.0);
        assert_eq!(find_shortest_path(10, 10, 20, 30), 30.0);
    }

    #[test]
    fn test_corner_to_corner() {
        // A staircase route around the block is as short as the Manhattan distance
        assert_eq!(find_shortest_path(0, 0, 99, 99), 198.0);
    }

    #[test]
    fn test_detour_around_obstacle() {
        // Manhattan distance 20; must climb to y = 49 or y = 61 and back
        let cost = find_shortest_path(45, 55, 65, 55);
        assert_eq!(cost, 32.0);
        assert!(cost > 20.0);

        // Hugging the left edge of the block
        assert_eq!(find_shortest_path(50, 49, 50, 61), 14.0);
    }

    #[test]
    fn test_obstacle_bounds_inclusive() {
        // Just outside the block on either side is free
        assert_eq!(find_shortest_path(49, 55, 49, 56), 1.0);
        assert_eq!(find_shortest_path(61, 55, 61, 56), 1.0);
        // Cells on the block's edge are never entered
        assert_eq!(find_shortest_path(49, 55, 50, 55), UNREACHABLE);
        assert_eq!(find_shortest_path(61, 55, 60, 55), UNREACHABLE);
    }

    #[test]
    fn test_neighbors_skip_obstacle_and_edges() {
        let engine = PathSearchEngine::default();

        let around_block = engine.neighbors(49, 55);
        assert_eq!(around_block.len(), 3);
        assert!(around_block.iter().all(|&(x, y)| !engine.config().is_blocked(x, y)));

        let corner = engine.neighbors(0, 0);
        assert_eq!(corner.len(), 2);
        assert!(corner.contains(&(1, 0)));
        assert!(corner.contains(&(0, 1)));
    }

    #[test]
    fn test_start_inside_obstacle() {
        // Every neighbor of (55, 55) is blocked
        assert_eq!(find_shortest_path(55, 55, 10, 10), UNREACHABLE);
        // The start itself is not checked against the block
        assert_eq!(find_shortest_path(55, 55, 55, 55), 0.0);
    }

    #[test]
    fn test_invalid_start() {
        assert_eq!(find_shortest_path(-1, 0, 10, 10), UNREACHABLE);
        assert_eq!(find_shortest_path(0, 100, 10, 10), UNREACHABLE);

        let engine = PathSearchEngine::default();
        let (result, stats) = engine.search_with_stats((100, 0), (10, 10));
        assert_eq!(result, Err(PathError::StartOutOfBounds { x: 100, y: 0 }));
        assert_eq!(stats, SearchStats::default());
    }

    #[test]
    fn test_target_out_of_bounds() {
        assert_eq!(find_shortest_path(0, 0, 100, 0), UNREACHABLE);
        assert_eq!(find_shortest_path(0, 0, 5, -1), UNREACHABLE);

        let engine = PathSearchEngine::default();
        let (result, stats) = engine.search_with_stats((0, 0), (-3, 4));
        assert_eq!(result, Err(PathError::Unreachable));
        // The whole reachable grid was expanded before giving up
        let free_cells = 100 * 100 - 11 * 11;
        assert_eq!(stats.expanded, free_cells);
    }

    #[test]
    fn test_wall_detour_on_small_grid() {
        let config = GridConfig::default()
            .with_size(10)
            .with_obstacle(ObstacleRect::new(5, 0, 5, 8));
        let engine = PathSearchEngine::new(config);

        // Up to y = 9, across, and back down
        assert_eq!(engine.search((0, 0), (9, 0)), Ok(27.0));
    }

    #[test]
    fn test_fully_blocked() {
        let config = GridConfig::default()
            .with_size(10)
            .with_obstacle(ObstacleRect::new(5, 0, 5, 9));
        let engine = PathSearchEngine::new(config);

        assert_eq!(engine.search((0, 0), (9, 9)), Err(PathError::Unreachable));
        assert_eq!(engine.find_shortest_path(0, 0, 9, 9), UNREACHABLE);
        // The near side stays reachable
        assert_eq!(engine.search((0, 0), (4, 9)), Ok(13.0));
    }

    #[test]
    fn test_stats_on_detour() {
        let engine = PathSearchEngine::default();
        let (result, stats) = engine.search_with_stats((45, 55), (65, 55));

        assert_eq!(result, Ok(32.0));
        assert!(stats.expanded > 0);
        // Consistent heuristic: no entry is superseded before it is popped
        assert_eq!(stats.stale, 0);
        // Every expansion popped a pushed entry, and the target pop is extra
        assert!(stats.pushed > stats.expanded);
    }

    #[test]
    fn test_frontier_pops_lowest_f() {
        let mut heap = BinaryHeap::new();
        heap.push(SearchNode {
            x: 0,
            y: 0,
            g_cost: 3.0,
            h_cost: 4.0,
        });
        heap.push(SearchNode {
            x: 1,
            y: 0,
            g_cost: 1.0,
            h_cost: 1.5,
        });
        heap.push(SearchNode {
            x: 2,
            y: 0,
            g_cost: 2.0,
            h_cost: 3.0,
        });

        let order: Vec<i32> = std::iter::from_fn(|| heap.pop().map(|n| n.x)).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_heuristic_is_euclidean() {
        let h = PathSearchEngine::heuristic(0, 0, 3, 4);
        assert!((h - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_repeated_calls_identical() {
        let first = find_shortest_path(3, 97, 88, 12);
        for _ in 0..3 {
            assert_eq!(find_shortest_path(3, 97, 88, 12), first);
        }
    }

    #[test]
    fn test_concurrent_searches_agree() {
        let engine = PathSearchEngine::default();
        let expected = engine.find_shortest_path(45, 55, 65, 55);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| engine.find_shortest_path(45, 55, 65, 55)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_error_display() {
        let err = PathError::StartOutOfBounds { x: -1, y: 0 };
        assert_eq!(err.to_string(), "start (-1, 0) is outside the grid");
        assert_eq!(PathError::Unreachable.to_string(), "target is unreachable");
    }
}
