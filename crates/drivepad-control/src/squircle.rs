//! Disk-to-square stick mapping.
//!
//! An analog stick moves in a circular region, but steering and throttle
//! are independent outputs: full steering lock should still allow full
//! throttle. This transform spreads the disk onto the unit square without
//! discontinuities, so diagonal stick travel reaches the square's corner.
//! Formula from <http://squircular.blogspot.com/2015/09/mapping-circle-to-square.html>.

/// Maps a point of the unit disk onto the unit square.
///
/// Inputs slightly outside the disk are tolerated: each radicand is
/// clamped at zero, so the output saturates instead of hitting a domain
/// error on floating point noise.
pub fn disk_to_square(u: f32, v: f32) -> (f32, f32) {
    let sqrt2 = std::f32::consts::SQRT_2;
    let x = 0.5
        * ((2.0 + 2.0 * u * sqrt2 + u * u - v * v).max(0.0).sqrt()
            - (2.0 - 2.0 * u * sqrt2 + u * u - v * v).max(0.0).sqrt());
    let y = 0.5
        * ((2.0 + 2.0 * v * sqrt2 - u * u + v * v).max(0.0).sqrt()
            - (2.0 - 2.0 * v * sqrt2 - u * u + v * v).max(0.0).sqrt());
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_origin() {
        let (x, y) = disk_to_square(0.0, 0.0);
        assert_eq!(x, 0.0);
        assert_eq!(y, 0.0);
    }

    #[test]
    fn disk_maps_into_unit_square() {
        for i in 0..=64 {
            #[allow(clippy::cast_precision_loss)]
            let alpha = (i as f32) / 64.0 * std::f32::consts::TAU;
            for r in [0.25_f32, 0.5, 0.9, 1.0] {
                let (x, y) = disk_to_square(r * alpha.cos(), r * alpha.sin());
                assert!(x.abs() <= 1.0 + 1e-5, "x out of range: {x} at r={r}");
                assert!(y.abs() <= 1.0 + 1e-5, "y out of range: {y} at r={r}");
            }
        }
    }

    #[test]
    fn axes_are_preserved() {
        // Pure single-axis deflection keeps the other output at zero.
        let (x, y) = disk_to_square(1.0, 0.0);
        assert!((x - 1.0).abs() < 1e-5);
        assert!(y.abs() < 1e-5);
        let (x, y) = disk_to_square(0.0, -1.0);
        assert!(x.abs() < 1e-5);
        assert!((y + 1.0).abs() < 1e-5);
    }

    #[test]
    fn mapping_is_odd() {
        for (u, v) in [(0.3, 0.7), (0.9, 0.1), (0.5, -0.5), (1.0, 0.0)] {
            let (x, y) = disk_to_square(u, v);
            let (nx, ny) = disk_to_square(-u, -v);
            assert!((x + nx).abs() < 1e-6);
            assert!((y + ny).abs() < 1e-6);
        }
    }

    #[test]
    fn continuous_across_the_disk_boundary() {
        // Same direction, radii straddling 1.0: outputs must stay close.
        for i in 0..=32 {
            #[allow(clippy::cast_precision_loss)]
            let alpha = (i as f32) / 32.0 * std::f32::consts::TAU;
            let (x_in, y_in) = disk_to_square(0.99 * alpha.cos(), 0.99 * alpha.sin());
            let (x_out, y_out) = disk_to_square(1.01 * alpha.cos(), 1.01 * alpha.sin());
            assert!((x_in - x_out).abs() < 0.1, "x jump at alpha={alpha}");
            assert!((y_in - y_out).abs() < 0.1, "y jump at alpha={alpha}");
        }
    }
}
