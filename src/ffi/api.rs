//! C FFI API functions.

use std::ffi::CStr;
use std::os::raw::c_char;

use glam::DVec3;

use crate::ai::{UNREACHABLE, find_shortest_path};
use crate::physics::{TransportMode, estimate_travel_time};
use crate::recall::{VectorStore, dot_product};

/// Returned by [`vs_find_nearest`] when nothing matches.
pub const VS_NOT_FOUND: i32 = -1;

/// Finds the path cost between two cells of the default 100x100 grid.
///
/// Returns `-1.0` when the start is outside the grid or the target cannot be
/// reached.
#[unsafe(no_mangle)]
pub extern "C" fn api_find_shortest_path(
    start_x: i32,
    start_y: i32,
    target_x: i32,
    target_y: i32,
) -> f64 {
    find_shortest_path(start_x, start_y, target_x, target_y)
}

/// Estimates travel time in minutes between two points.
///
/// `mode` is one of `"walking"`, `"running"`, `"driving"`, `"flying"`; any
/// other name is treated as walking. Returns `-1.0` if `mode` is null or not
/// UTF-8.
///
/// # Safety
/// - `mode` must be null or a valid null-terminated string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn api_estimate_travel_time(
    x1: f64,
    y1: f64,
    z1: f64,
    x2: f64,
    y2: f64,
    z2: f64,
    mode: *const c_char,
) -> f64 {
    if mode.is_null() {
        return UNREACHABLE;
    }

    let mode = match unsafe { CStr::from_ptr(mode) }.to_str() {
        Ok(s) => TransportMode::from_name(s),
        Err(_) => return UNREACHABLE,
    };

    estimate_travel_time(DVec3::new(x1, y1, z1), DVec3::new(x2, y2, z2), mode)
}

/// Creates a vector store.
///
/// The caller must release it with [`vs_free`].
#[unsafe(no_mangle)]
pub extern "C" fn vs_create(initial_capacity: usize) -> *mut VectorStore {
    Box::into_raw(Box::new(VectorStore::with_capacity(initial_capacity)))
}

/// Copies `dim` floats from `data` into the store.
///
/// # Safety
/// - `store` must be null or a pointer returned by [`vs_create`]
/// - `data` must be null or point to `dim` readable floats
#[unsafe(no_mangle)]
pub unsafe extern "C" fn vs_add(store: *mut VectorStore, data: *const f32, dim: usize) {
    let Some(store) = (unsafe { store.as_mut() }) else {
        return;
    };
    if data.is_null() {
        return;
    }

    let data = unsafe { std::slice::from_raw_parts(data, dim) };
    store.add(data);
}

/// Dot product of two `dim`-length float arrays.
///
/// # Safety
/// - `v1` and `v2` must be null or point to `dim` readable floats
#[unsafe(no_mangle)]
pub unsafe extern "C" fn vs_dot_product(v1: *const f32, v2: *const f32, dim: usize) -> f32 {
    if v1.is_null() || v2.is_null() {
        return 0.0;
    }

    let (a, b) = unsafe {
        (
            std::slice::from_raw_parts(v1, dim),
            std::slice::from_raw_parts(v2, dim),
        )
    };
    dot_product(a, b)
}

/// Index of the stored vector most similar to `query`, or `-1`.
///
/// # Safety
/// - `store` must be null or a pointer returned by [`vs_create`]
/// - `query` must be null or point to `dim` readable floats
#[unsafe(no_mangle)]
pub unsafe extern "C" fn vs_find_nearest(
    store: *const VectorStore,
    query: *const f32,
    dim: usize,
) -> i32 {
    let Some(store) = (unsafe { store.as_ref() }) else {
        return VS_NOT_FOUND;
    };
    if query.is_null() {
        return VS_NOT_FOUND;
    }

    let query = unsafe { std::slice::from_raw_parts(query, dim) };
    store
        .find_nearest(query)
        .and_then(|index| i32::try_from(index).ok())
        .unwrap_or(VS_NOT_FOUND)
}

/// Number of vectors in the store.
///
/// # Safety
/// - `store` must be null or a pointer returned by [`vs_create`]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn vs_len(store: *const VectorStore) -> usize {
    unsafe { store.as_ref() }.map_or(0, VectorStore::len)
}

/// Frees a store created by [`vs_create`].
///
/// # Safety
/// - `store` must have been returned by [`vs_create`]
/// - `store` must not be used after this call
#[unsafe(no_mangle)]
pub unsafe extern "C" fn vs_free(store: *mut VectorStore) {
    if !store.is_null() {
        drop(unsafe { Box::from_raw(store) });
    }
}
