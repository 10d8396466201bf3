//! Narrow-phase helpers for segment and polygon contact generation.
//!
//! `closest_t` and `lerp_t` share a midpoint-centred parameter: `t = -1` is the
//! first endpoint, `t = 1` the second and `t = 0` the midpoint.

use crate::scalar::{clamp, clamp01};
use crate::vect::Vect;

/// Orders `c` against the edge `a`-`b` by comparing it with the edge midpoint.
///
/// Used to sort contact points along an edge.
pub fn point_greater(a: Vect, b: Vect, c: Vect) -> bool {
    (b.y - a.y) * (a.x + b.x - 2.0 * c.x) > (b.x - a.x) * (a.y + b.y - 2.0 * c.y)
}

/// Separating-axis check: whether `p` projects onto `n` no further than the
/// furthest of `v0` and `v1`.
pub fn check_axis(v0: Vect, v1: Vect, p: Vect, n: Vect) -> bool {
    p.dot(n) <= v0.dot(n).max(v1.dot(n))
}

/// Parameter of the point on segment `a`-`b` closest to the origin.
pub fn closest_t(a: Vect, b: Vect) -> f64 {
    let delta = b - a;
    -clamp(delta.dot(a + b) / delta.length_squared(), -1.0, 1.0)
}

/// Point at midpoint-centred parameter `t` on segment `a`-`b`.
pub fn lerp_t(a: Vect, b: Vect, t: f64) -> Vect {
    let ht = 0.5 * t;
    a.scale(0.5 - ht) + b.scale(0.5 + ht)
}

/// Squared distance from the origin to segment `v0`-`v1`.
///
/// Earlier code interpolated from `v1` to itself here, which always returned
/// `|v1|²`. The segment now runs from `v0`.
pub fn closest_dist(v0: Vect, v1: Vect) -> f64 {
    lerp_t(v0, v1, closest_t(v0, v1)).length_squared()
}

/// Point on segment `a`-`b` nearest to `p`.
pub fn closest_point_on_segment(p: Vect, a: Vect, b: Vect) -> Vect {
    let delta = a - b;
    let t = clamp01(delta.dot(p - b) / delta.length_squared());
    b + delta.scale(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn closest_point_example() {
        let c = closest_point_on_segment(Vect::ZERO, Vect::new(-1.0, 1.0), Vect::new(1.0, 1.0));
        assert_abs_diff_eq!(c.x, 0.0);
        assert_abs_diff_eq!(c.y, 1.0);
    }

    #[test]
    fn closest_point_clamps_to_endpoints() {
        let a = Vect::new(0.0, 0.0);
        let b = Vect::new(4.0, 0.0);
        assert_eq!(closest_point_on_segment(Vect::new(-3.0, 2.0), a, b), a);
        assert_eq!(closest_point_on_segment(Vect::new(9.0, -1.0), a, b), b);
        assert_eq!(closest_point_on_segment(Vect::new(1.0, 5.0), a, b), Vect::new(1.0, 0.0));
    }

    #[test]
    fn closest_point_keeps_negative_zero_endpoint() {
        // The projection parameter comes out as -0.0 and clamps to +0.0, so
        // b + delta * t is -0.0 + -0.0 and b's sign survives.
        let a = Vect::new(-2.0, 5.0);
        let b = Vect::new(-0.0, 5.0);
        let c = closest_point_on_segment(Vect::new(0.0, 3.0), a, b);
        assert_eq!(c, Vect::new(0.0, 5.0));
        assert!(c.x.is_sign_negative());
    }

    #[test]
    fn lerp_t_endpoints() {
        let a = Vect::new(2.0, -4.0);
        let b = Vect::new(6.0, 8.0);
        assert_eq!(lerp_t(a, b, -1.0), a);
        assert_eq!(lerp_t(a, b, 1.0), b);
        assert_eq!(lerp_t(a, b, 0.0), Vect::new(4.0, 2.0));
    }

    #[test]
    fn closest_t_on_horizontal_segment() {
        let a = Vect::new(-1.0, 1.0);
        let b = Vect::new(3.0, 1.0);
        // Origin projects to x = 0, a quarter of the way from a.
        assert_abs_diff_eq!(closest_t(a, b), -0.5);
        assert_eq!(closest_t(Vect::new(2.0, 1.0), Vect::new(4.0, 1.0)), -1.0);
        assert_eq!(closest_t(Vect::new(-4.0, 1.0), Vect::new(-2.0, 1.0)), 1.0);
    }

    #[test]
    fn closest_dist_uses_whole_segment() {
        let v0 = Vect::new(-1.0, 1.0);
        let v1 = Vect::new(1.0, 1.0);
        assert_abs_diff_eq!(closest_dist(v0, v1), 1.0);
        assert_abs_diff_eq!(closest_dist(Vect::new(3.0, 4.0), Vect::new(6.0, 8.0)), 25.0);
    }

    #[test]
    fn check_axis_accepts_and_rejects() {
        let n = Vect::new(0.0, 1.0);
        let v0 = Vect::new(-1.0, 2.0);
        let v1 = Vect::new(1.0, 3.0);
        assert!(check_axis(v0, v1, Vect::new(0.0, 1.0), n));
        assert!(check_axis(v0, v1, Vect::new(5.0, 3.0), n));
        assert!(!check_axis(v0, v1, Vect::new(0.0, 3.5), n));
    }

    #[test]
    fn point_greater_flips_across_midpoint() {
        let a = Vect::new(0.0, 0.0);
        let b = Vect::new(2.0, 0.0);
        // (b.y - a.y) is zero so only the y offset of c from the midpoint matters.
        assert!(point_greater(a, b, Vect::new(1.0, 1.0)));
        assert!(!point_greater(a, b, Vect::new(1.0, -1.0)));
        assert!(!point_greater(a, b, Vect::new(1.0, 0.0)));
    }
}
