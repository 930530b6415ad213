//! # Cubic Interpolation
//!
//! Four-point cubic blend through the middle two control values.

/// Blends `a, b, c, d` (samples at offsets -1, 0, 1, 2) at position `t`.
///
/// Returns `b` at `t = 0` and `c` at `t = 1`. `t` is not validated; the
/// polynomial is defined for any real input.
#[inline]
#[must_use]
pub fn cubic(a: f64, b: f64, c: f64, d: f64, t: f64) -> f64 {
    let p = (d - c) - (a - b);
    t * t * t * p + t * t * ((a - b) - p) + t * (c - a) + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_through_inner_points() {
        let (a, b, c, d) = (0.3, -0.8, 0.55, 0.1);
        assert_eq!(cubic(a, b, c, d, 0.0), b);
        assert!((cubic(a, b, c, d, 1.0) - c).abs() < 1e-12);
    }

    #[test]
    fn test_constant_input() {
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            assert!((cubic(0.4, 0.4, 0.4, 0.4, t) - 0.4).abs() < 1e-12);
        }
    }

    #[test]
    fn test_midpoint() {
        // At t = 0.5: (-a + 5b + 5c - d) / 8.
        let value = cubic(1.0, 2.0, 3.0, 4.0, 0.5);
        assert!((value - 2.5).abs() < 1e-12, "got {value}");
    }

    #[test]
    fn test_bounded_for_unit_inputs() {
        // Worst case is |f| <= 1 + 2t - 2t^2, peaking at 1.5.
        let value = cubic(-1.0, 1.0, 1.0, -1.0, 0.5);
        assert!((value - 1.5).abs() < 1e-12, "got {value}");
    }
}
