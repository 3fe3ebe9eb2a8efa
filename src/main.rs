//! Self-test harness exercising the library with fixed scenarios
//!
//! Usage: `spatial [grid.ron|grid.json]`

use std::process::ExitCode;

use spatial::prelude::*;

/// A fixed path query and its expected cost
struct PathCase {
    name: &'static str,
    start: (i32, i32),
    target: (i32, i32),
    expected: f64,
}

const PATH_CASES: [PathCase; 6] = [
    PathCase {
        name: "same cell",
        start: (0, 0),
        target: (0, 0),
        expected: 0.0,
    },
    PathCase {
        name: "straight line",
        start: (0, 0),
        target: (5, 0),
        expected: 5.0,
    },
    PathCase {
        name: "corner to corner",
        start: (0, 0),
        target: (99, 99),
        expected: 198.0,
    },
    PathCase {
        name: "detour around obstacle",
        start: (45, 55),
        target: (65, 55),
        expected: 32.0,
    },
    PathCase {
        name: "start out of bounds",
        start: (-1, 0),
        target: (10, 10),
        expected: UNREACHABLE,
    },
    PathCase {
        name: "start inside obstacle",
        start: (55, 55),
        target: (10, 10),
        expected: UNREACHABLE,
    },
];

fn check(name: &str, got: f64, expected: f64) -> bool {
    if (got - expected).abs() < 1e-6 {
        log::info!("PASS {name}: {got}");
        true
    } else {
        log::error!("FAIL {name}: expected {expected}, got {got}");
        false
    }
}

fn check_flag(name: &str, ok: bool) -> bool {
    if ok {
        log::info!("PASS {name}");
    } else {
        log::error!("FAIL {name}");
    }
    ok
}

fn run_path_cases() -> bool {
    PATH_CASES.iter().all(|case| {
        let (sx, sy) = case.start;
        let (tx, ty) = case.target;
        check(case.name, find_shortest_path(sx, sy, tx, ty), case.expected)
    })
}

fn run_kinematics_cases() -> bool {
    let origin = DVec3::ZERO;
    let p = DVec3::new(3.0, 4.0, 0.0);

    check("distance 3-4-5", distance(origin, p), 5.0)
        && check(
            "driving 5 km",
            estimate_travel_time(origin, p, TransportMode::Driving),
            6.0,
        )
        && check_flag("touching spheres", check_collision(origin, 2.0, p, 3.0))
        && check_flag("separate spheres", !check_collision(origin, 1.0, p, 1.0))
}

fn run_vector_cases() -> bool {
    let mut store = VectorStore::with_capacity(10);
    store.add(&[1.0, 0.0]);
    store.add(&[0.0, 1.0]);
    store.add(&[0.707, 0.707]);

    let nearest = |query: &[f32]| store.find_nearest(query).map_or(-1.0, |i| i as f64);

    check("nearest to [1, 0]", nearest(&[1.0, 0.0]), 0.0)
        && check("nearest to [0.5, 0.5]", nearest(&[0.5, 0.5]), 2.0)
}

fn main() -> ExitCode {
    env_logger::init();

    if let Some(path) = std::env::args().nth(1) {
        match GridConfig::load(&path) {
            Ok(config) => {
                log::info!("Loaded grid config from {path}: {config:?}");
                let engine = PathSearchEngine::new(config);
                let far = config.size - 1;
                let (result, stats) = engine.search_with_stats((0, 0), (far, far));
                log::info!("Corner to corner on loaded grid: {result:?}, {stats:?}");
            }
            Err(e) => {
                log::error!("Failed to load grid config {path}: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    let passed = run_path_cases() && run_kinematics_cases() && run_vector_cases();

    if passed {
        log::info!("ALL TESTS PASSED");
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
