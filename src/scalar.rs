/// Clamps `f` to `[min, max]`.
///
/// NaN passes through untouched, so a degenerate upstream value stays visible
/// to the caller. Signed zeros follow IEEE max/min: `clamp(-0.0, 0.0, 1.0)` is `+0.0`.
pub fn clamp(f: f64, min: f64, max: f64) -> f64 {
    let f = if f < min || (f == min && min.is_sign_positive()) {
        min
    } else {
        f
    };
    if f > max || (f == max && max.is_sign_negative()) {
        max
    } else {
        f
    }
}

pub fn clamp01(f: f64) -> f64 {
    clamp(f, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_inside_and_outside() {
        assert_eq!(clamp(0.5, -1.0, 1.0), 0.5);
        assert_eq!(clamp(-3.0, -1.0, 1.0), -1.0);
        assert_eq!(clamp(3.0, -1.0, 1.0), 1.0);
    }

    #[test]
    fn clamp01_bounds() {
        assert_eq!(clamp01(-0.1), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(7.0), 1.0);
    }

    #[test]
    fn clamp_signed_zeros() {
        assert!(clamp01(-0.0).is_sign_positive());
        assert!(clamp01(0.0).is_sign_positive());
        assert!(clamp(-0.0, -1.0, 1.0).is_sign_negative());
        assert!(clamp(0.0, -1.0, -0.0).is_sign_negative());
        assert!(clamp(-0.0, -0.0, 1.0).is_sign_negative());
    }

    #[test]
    fn clamp_keeps_nan() {
        assert!(clamp(f64::NAN, -1.0, 1.0).is_nan());
    }
}
