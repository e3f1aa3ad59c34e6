//! Sampling grid generation.
//!
//! Every kernel family is evaluated on the same regular grid:
//! `width * samples_per_unit + 1` evenly spaced coordinates spanning
//! `[-width/2, +width/2]` with both endpoints included.
//!
//! Why mirror instead of plain linear interpolation?
//! - All five kernel families are even functions, so downstream code (and
//!   tests) relies on `coords[i] == -coords[n-1-i]` holding *exactly*.
//! - Accumulating `start + step * i` drifts in the last bits; mirroring the
//!   left half guarantees bitwise symmetry and an exact `0.0` center sample
//!   whenever the grid length is odd.

use crate::error::AppError;

/// Generate the coordinate grid for the given width and sampling density.
///
/// Returns `width * samples_per_unit + 1` coordinates from `-width/2` to
/// `+width/2` inclusive. Fails when either argument is non-positive.
pub fn sample_grid(width: i64, samples_per_unit: i64) -> Result<Vec<f64>, AppError> {
    if width <= 0 {
        return Err(AppError::invalid_argument(format!(
            "width must be a positive integer, got {width}"
        )));
    }
    if samples_per_unit <= 0 {
        return Err(AppError::invalid_argument(format!(
            "samples_per_unit must be a positive integer, got {samples_per_unit}"
        )));
    }

    let n = (width * samples_per_unit + 1) as usize;
    let start = -(width as f64) / 2.0;
    let stop = (width as f64) / 2.0;

    let mut out = vec![0.0; n];
    for i in 0..n / 2 {
        let u = i as f64 / (n as f64 - 1.0);
        let x = start + u * (stop - start);
        out[i] = x;
        out[n - 1 - i] = -x;
    }
    // For odd n the middle slot stays exactly 0.0.

    Ok(out)
}
