//! Kernel generation facade.
//!
//! One entry point per run: grid -> profile -> 2D expansion -> optional
//! per-phase normalization. The family set is closed, so dispatch is a single
//! `match` on `FilterSpec`; the Gaussian skips the separable path and is
//! evaluated directly on the 2D grid.

use nalgebra::DMatrix;

use crate::domain::FilterSpec;
use crate::error::AppError;
use crate::kernel::expand::{expand_separable, gaussian_2d};
use crate::kernel::normalize::normalize_phases;
use crate::math::{bicubic_profile, cubic_bspline_profile, lanczos_profile, sample_grid, sinc_profile};

/// Generate the 2D kernel for `spec` on the `[-width/2, +width/2]` grid.
///
/// When `normalize` is set, each of the `samples_per_unit` polyphase row
/// groups is rescaled to sum to `1/samples_per_unit`.
pub fn generate_kernel(
    spec: &FilterSpec,
    width: i64,
    samples_per_unit: i64,
    normalize: bool,
) -> Result<DMatrix<f64>, AppError> {
    let coords = sample_grid(width, samples_per_unit)?;

    let kernel = match *spec {
        FilterSpec::Sinc => expand_separable(&sinc_profile(&coords)),
        FilterSpec::Lanczos { a } => expand_separable(&lanczos_profile(&coords, a)?),
        FilterSpec::Bicubic { a } => expand_separable(&bicubic_profile(&coords, a)),
        FilterSpec::CubicBspline => expand_separable(&cubic_bspline_profile(&coords)),
        FilterSpec::Gaussian { sigma } => gaussian_2d(&coords, sigma)?,
    };

    if normalize {
        normalize_phases(kernel, samples_per_unit)
    } else {
        Ok(kernel)
    }
}
