use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::scalar::clamp;

/// Below this angle `slerp` treats its inputs as parallel and falls back to `lerp`.
const SLERP_PARALLEL_EPSILON: f64 = 1e-3;

/// A planar vector with double-precision coordinates.
///
/// `==` is exact component-wise comparison. Use [`Vect::near`] when a tolerance
/// is wanted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vect {
    pub x: f64,
    pub y: f64,
}

#[allow(clippy::should_implement_trait)]
impl Vect {
    pub const ZERO: Vect = Vect { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Vect {
        Vect { x, y }
    }

    pub const fn zero() -> Vect {
        Vect::ZERO
    }

    /// Exact equality with no tolerance, identical to `==`.
    pub fn equal(self, other: Vect) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// True when `other` lies strictly within distance `d` of `self`.
    pub fn near(self, other: Vect, d: f64) -> bool {
        self.distance_squared(other) < d * d
    }

    pub fn add(self, other: Vect) -> Vect {
        Vect::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Vect) -> Vect {
        Vect::new(self.x - other.x, self.y - other.y)
    }

    pub fn neg(self) -> Vect {
        Vect::new(-self.x, -self.y)
    }

    pub fn scale(self, s: f64) -> Vect {
        Vect::new(self.x * s, self.y * s)
    }

    pub fn dot(self, other: Vect) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of `self` and `other`,
    /// `|self| |other| sin θ`.
    ///
    /// Older revisions of this routine computed `x*x' - y*y'`, which is not a
    /// cross product. Callers ported from that code will see different signs
    /// and magnitudes.
    pub fn cross(self, other: Vect) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn distance(self, other: Vect) -> f64 {
        self.sub(other).length()
    }

    pub fn distance_squared(self, other: Vect) -> f64 {
        self.sub(other).length_squared()
    }

    /// Rotated 90 degrees counter-clockwise.
    pub fn perp(self) -> Vect {
        Vect::new(-self.y, self.x)
    }

    /// Rotated 90 degrees clockwise.
    pub fn rperp(self) -> Vect {
        Vect::new(self.y, -self.x)
    }

    /// Projection of `self` onto `other`. NaN when `other` is zero.
    pub fn project(self, other: Vect) -> Vect {
        other.scale(self.dot(other) / other.dot(other))
    }

    /// Unit vector pointing at angle `a` (radians) from the X axis.
    pub fn for_angle(a: f64) -> Vect {
        Vect::new(a.cos(), a.sin())
    }

    /// Angle of `self` from the X axis, in `(-π, π]`. Inverse of [`Vect::for_angle`].
    ///
    /// Earlier code measured from the Y axis via `atan2(x, y)`; this uses the
    /// conventional `atan2(y, x)`.
    pub fn to_angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Complex multiplication: rotates `self` by the angle of `other` and scales
    /// it by `other`'s length.
    pub fn rotate(self, other: Vect) -> Vect {
        Vect::new(
            self.x * other.x - self.y * other.y,
            self.x * other.y + self.y * other.x,
        )
    }

    /// Multiplication by the conjugate of `other`. Undoes [`Vect::rotate`] for unit `other`.
    pub fn unrotate(self, other: Vect) -> Vect {
        Vect::new(
            self.x * other.x + self.y * other.y,
            self.y * other.x - self.x * other.y,
        )
    }

    /// Unit vector in the direction of `self`. The zero vector gives NaN.
    pub fn normalize(self) -> Vect {
        self.scale(1.0 / self.length())
    }

    /// Unclamped linear interpolation; `t` outside `[0, 1]` extrapolates.
    pub fn lerp(self, other: Vect, t: f64) -> Vect {
        self.scale(1.0 - t).add(other.scale(t))
    }

    /// Spherical interpolation by the angle between `self` and `other`.
    ///
    /// Only the directions decide the sweep angle; the endpoints are the inputs
    /// themselves, so `t = 0` gives `self` and `t = 1` gives `other`. Nearly
    /// parallel inputs fall back to [`Vect::lerp`].
    pub fn slerp(self, other: Vect, t: f64) -> Vect {
        let omega = self.angle_between(other);

        if omega < SLERP_PARALLEL_EPSILON {
            return self.lerp(other, t);
        }

        let denom = 1.0 / omega.sin();
        self.scale(((1.0 - t) * omega).sin() * denom)
            .add(other.scale((t * omega).sin() * denom))
    }

    /// Like [`Vect::slerp`] but turns at most `a` radians toward `other`.
    pub fn slerp_const(self, other: Vect, a: f64) -> Vect {
        let omega = self.angle_between(other);
        self.slerp(other, a.min(omega) / omega)
    }

    /// `self` if it is no longer than `len`, otherwise `self` rescaled to `len`.
    pub fn clamp_length(self, len: f64) -> Vect {
        if self.length_squared() > len * len {
            self.normalize().scale(len)
        } else {
            self
        }
    }

    /// Moves from `self` toward `other` by at most `d`.
    pub fn lerp_const(self, other: Vect, d: f64) -> Vect {
        self.add(other.sub(self).clamp_length(d))
    }

    fn angle_between(self, other: Vect) -> f64 {
        let dot = self.normalize().dot(other.normalize());
        clamp(dot, -1.0, 1.0).acos()
    }
}

impl Add for Vect {
    type Output = Vect;

    fn add(self, rhs: Vect) -> Vect {
        Vect::add(self, rhs)
    }
}

impl Sub for Vect {
    type Output = Vect;

    fn sub(self, rhs: Vect) -> Vect {
        Vect::sub(self, rhs)
    }
}

impl Neg for Vect {
    type Output = Vect;

    fn neg(self) -> Vect {
        Vect::neg(self)
    }
}

impl Mul<f64> for Vect {
    type Output = Vect;

    fn mul(self, rhs: f64) -> Vect {
        self.scale(rhs)
    }
}

impl Mul<Vect> for f64 {
    type Output = Vect;

    fn mul(self, rhs: Vect) -> Vect {
        rhs.scale(self)
    }
}

impl From<[f64; 2]> for Vect {
    fn from([x, y]: [f64; 2]) -> Vect {
        Vect::new(x, y)
    }
}

impl From<(f64, f64)> for Vect {
    fn from((x, y): (f64, f64)) -> Vect {
        Vect::new(x, y)
    }
}

impl From<Vect> for [f64; 2] {
    fn from(v: Vect) -> [f64; 2] {
        [v.x, v.y]
    }
}

impl fmt::Display for Vect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
