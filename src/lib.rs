//! Double-precision 2D vector algebra for a planar physics and collision engine.
//!
//! Everything hangs off the [`Vect`] value type. Operations are pure and never
//! validate their inputs: normalizing or projecting onto the zero vector yields
//! NaN or infinity, which the caller is expected to observe in the result.

pub mod collision;
pub mod scalar;
pub mod vect;

pub use collision::{
    check_axis, closest_dist, closest_point_on_segment, closest_t, lerp_t, point_greater,
};
pub use scalar::{clamp, clamp01};
pub use vect::Vect;
