//! Closed-form 1D kernel profiles.
//!
//! Each evaluator maps a coordinate slice to a profile of identical length,
//! one value per coordinate. The four separable families live here; the
//! Gaussian is evaluated directly on the 2D grid (see `kernel::expand`).
//!
//! Numerical notes:
//! - `sinc` has a removable singularity at `x = 0`; we special-case it to `1`
//!   rather than evaluate `0/0`.
//! - All piecewise boundary comparisons are exact (no epsilon). The branch
//!   values agree at the seams, so exact comparisons cannot introduce jumps.

use std::f64::consts::PI;

use crate::error::AppError;

/// Normalized cardinal sine: `sin(πx) / (πx)`, with `sinc(0) = 1`.
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        return 1.0;
    }
    let px = PI * x;
    px.sin() / px
}

/// Evaluate the sinc profile over a coordinate grid.
pub fn sinc_profile(coords: &[f64]) -> Vec<f64> {
    coords.iter().map(|&x| sinc(x)).collect()
}

/// Evaluate the Lanczos profile over a coordinate grid.
///
/// `lanczos_a(x) = sinc(x) * sinc(x/a)` for `-a < x < a` (strict; the
/// support boundary itself maps to 0) and `0` elsewhere. `a` is the kernel
/// half-width and must be at least 1.
pub fn lanczos_profile(coords: &[f64], a: i64) -> Result<Vec<f64>, AppError> {
    if a < 1 {
        return Err(AppError::invalid_argument(format!(
            "lanczos kernel size must be a positive integer, got {a}"
        )));
    }
    let a = a as f64;

    let out = coords
        .iter()
        .map(|&x| {
            if -a < x && x < a {
                sinc(x) * sinc(x / a)
            } else {
                0.0
            }
        })
        .collect();
    Ok(out)
}

/// Evaluate the bicubic profile over a coordinate grid.
///
/// Piecewise cubic in `|x|` with free parameter `a` (conventionally negative,
/// e.g. `-0.5`):
///
/// - `|x| <= 1`:      `(a+2)|x|³ − (a+3)|x|² + 1`
/// - `1 < |x| <= 2`:  `a|x|³ − 5a|x|² + 8a|x| − 4a`
/// - `|x| > 2`:       `0`
pub fn bicubic_profile(coords: &[f64], a: f64) -> Vec<f64> {
    coords
        .iter()
        .map(|&x| {
            let ax = x.abs();
            if ax <= 1.0 {
                (a + 2.0) * ax * ax * ax - (a + 3.0) * ax * ax + 1.0
            } else if ax <= 2.0 {
                a * ax * ax * ax - 5.0 * a * ax * ax + 8.0 * a * ax - 4.0 * a
            } else {
                0.0
            }
        })
        .collect()
}

/// Evaluate the cubic B-spline profile over a coordinate grid.
///
/// - `0 <= |x| < 1`: `2/3 − |x|² + |x|³/2`
/// - `1 <= |x| < 2`: `(2 − |x|³)/6`
/// - `|x| >= 2`:     `0`
///
/// Note: the second branch is `(2 − |x|³)/6`, not the textbook B-spline
/// `(2 − |x|)³/6`. We keep the former so kernels match rasters produced by
/// earlier versions of this tool; see DESIGN.md before changing it.
pub fn cubic_bspline_profile(coords: &[f64]) -> Vec<f64> {
    coords
        .iter()
        .map(|&x| {
            let ax = x.abs();
            if ax < 1.0 {
                2.0 / 3.0 - ax * ax + ax * ax * ax / 2.0
            } else if ax < 2.0 {
                (2.0 - ax * ax * ax) / 6.0
            } else {
                0.0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sinc_at_zero_is_one() {
        assert_eq!(sinc(0.0), 1.0);
    }

    #[test]
    fn sinc_vanishes_at_nonzero_integers() {
        for x in [-3.0, -2.0, -1.0, 1.0, 2.0, 3.0] {
            assert!(sinc(x).abs() < 1e-15, "sinc({x}) = {}", sinc(x));
        }
    }

    #[test]
    fn sinc_decays_for_large_arguments() {
        assert!(sinc(100.5).abs() < 0.01);
    }

    #[test]
    fn sinc_known_value_at_half() {
        // sinc(0.5) = sin(π/2)/(π/2) = 2/π.
        assert!((sinc(0.5) - 2.0 / PI).abs() < 1e-15);
    }

    #[test]
    fn lanczos_is_zero_on_and_outside_support_boundary() {
        let coords = [-3.0, -2.0, 2.0, 3.0];
        let profile = lanczos_profile(&coords, 2).unwrap();
        assert!(profile.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn lanczos_matches_sinc_product_inside_support() {
        let coords = [-1.5, -0.5, 0.0, 0.5, 1.5];
        let profile = lanczos_profile(&coords, 2).unwrap();
        for (&x, &v) in coords.iter().zip(profile.iter()) {
            let expected = sinc(x) * sinc(x / 2.0);
            assert!((v - expected).abs() < 1e-15, "lanczos({x})");
        }
    }

    #[test]
    fn lanczos_rejects_non_positive_kernel_size() {
        let coords = [0.0];
        assert!(lanczos_profile(&coords, 0).is_err());
        assert!(lanczos_profile(&coords, -2).is_err());
    }

    #[test]
    fn bicubic_is_zero_outside_radius_two() {
        let coords = [-2.5, 2.5, 10.0];
        for v in bicubic_profile(&coords, -0.5) {
            assert_eq!(v, 0.0);
        }
    }

    #[test]
    fn bicubic_is_one_at_center_and_zero_at_radius_two() {
        let coords = [0.0, 2.0, -2.0];
        let profile = bicubic_profile(&coords, -0.5);
        assert!((profile[0] - 1.0).abs() < 1e-15);
        // At |x| = 2: a(8 - 20 + 16 - 4) = 0 for any a.
        assert!(profile[1].abs() < 1e-12);
        assert!(profile[2].abs() < 1e-12);
    }

    #[test]
    fn bicubic_branches_agree_at_one() {
        let a = -0.5;
        let inner = bicubic_profile(&[1.0], a)[0];
        let outer = bicubic_profile(&[1.0 + 1e-12], a)[0];
        assert!((inner - outer).abs() < 1e-9);
    }

    #[test]
    fn cubic_bspline_is_zero_outside_radius_two() {
        let coords = [-2.0, 2.0, 3.0];
        for v in cubic_bspline_profile(&coords) {
            assert_eq!(v, 0.0);
        }
    }

    #[test]
    fn cubic_bspline_center_value() {
        assert!((cubic_bspline_profile(&[0.0])[0] - 2.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn cubic_bspline_branches_agree_at_one() {
        // Inner branch at 1: 2/3 - 1 + 1/2 = 1/6. Outer branch at 1: (2-1)/6 = 1/6.
        let inner = 2.0 / 3.0 - 1.0 + 0.5;
        let outer = cubic_bspline_profile(&[1.0])[0];
        assert!((inner - outer).abs() < 1e-15);
    }
}
