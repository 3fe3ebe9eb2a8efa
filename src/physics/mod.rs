//! Physics utilities
//!
//! Distance, travel time and collision checks between points in 3D space.

mod kinematics;

pub use kinematics::{TransportMode, check_collision, distance, estimate_travel_time};
