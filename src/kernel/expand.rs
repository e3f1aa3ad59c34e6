//! 2D kernel construction.
//!
//! Two paths produce the dense `N×N` matrix:
//!
//! - `expand_separable`: the outer product of a 1D profile with itself, used
//!   by sinc, Lanczos, bicubic and cubic B-spline.
//! - `gaussian_2d`: the isotropic Gaussian evaluated directly from squared
//!   radial distance. The Gaussian *is* separable up to its leading constant,
//!   but the direct form keeps the `1/(2πσ²)` factor explicit; a test pins
//!   the equivalence of the two forms.
//!
//! Kernel values are pairwise-independent pure functions of their
//! coordinates, so rows are evaluated in parallel.

use nalgebra::DMatrix;
use rayon::prelude::*;

use crate::error::AppError;

/// Build a 2D kernel as the outer product of a 1D profile with itself:
/// `result[(i, j)] = profile[i] * profile[j]`.
pub fn expand_separable(profile: &[f64]) -> DMatrix<f64> {
    let n = profile.len();
    let data: Vec<f64> = profile
        .par_iter()
        .flat_map_iter(|&pi| profile.iter().map(move |&pj| pi * pj))
        .collect();
    DMatrix::from_row_slice(n, n, &data)
}

/// Evaluate the isotropic 2D Gaussian on the grid:
/// `g(x, y) = 1/(2πσ²) · exp(−(x² + y²) / (2σ²))`.
pub fn gaussian_2d(coords: &[f64], sigma: f64) -> Result<DMatrix<f64>, AppError> {
    if !(sigma.is_finite() && sigma > 0.0) {
        return Err(AppError::invalid_argument(format!(
            "sigma must be strictly positive and finite, got {sigma}"
        )));
    }

    let n = coords.len();
    let sigma_squared = sigma * sigma;
    let factor = 1.0 / (2.0 * std::f64::consts::PI * sigma_squared);

    let data: Vec<f64> = coords
        .par_iter()
        .flat_map_iter(|&x| {
            coords
                .iter()
                .map(move |&y| factor * (-(x * x + y * y) / (2.0 * sigma_squared)).exp())
        })
        .collect();
    Ok(DMatrix::from_row_slice(n, n, &data))
}
