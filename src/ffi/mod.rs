//! # C FFI
//!
//! C-compatible entry points for hosts that load this crate as a shared
//! library.
//!
//! ## Functions
//!
//! ### Navigation
//! - [`api_find_shortest_path`] - Path cost on the default grid
//! - [`api_estimate_travel_time`] - Travel time in minutes
//!
//! ### Vector store
//! - [`vs_create`] / [`vs_free`] - Store lifetime
//! - [`vs_add`] - Append a copy of a vector
//! - [`vs_find_nearest`] - Cosine nearest lookup
//! - [`vs_dot_product`] - Dot product of two arrays
//! - [`vs_len`] - Number of stored vectors
//!
//! ## Failure values
//!
//! | Function | Value | Meaning |
//! |----------|-------|---------|
//! | `api_find_shortest_path` | `-1.0` | Start out of bounds or target unreachable |
//! | `api_estimate_travel_time` | `-1.0` | Null or non-UTF-8 mode |
//! | `vs_find_nearest` | `-1` | Empty store, zero query, or no vector of that dimension |

mod api;

pub use api::*;
