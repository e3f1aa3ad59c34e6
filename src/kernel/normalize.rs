//! Per-phase kernel normalization for polyphase resampling.
//!
//! A resampler with `p` phases consumes the kernel as `p` interleaved
//! sub-filters: phase `i` reads rows `i, i+p, i+2p, …`. Each sub-filter must
//! preserve DC gain on its own, so we rescale every phase to sum to `1/p`
//! (the phase sums then add up to unit gain overall).
//!
//! A phase that sums to exactly zero cannot be rescaled; that is reported as
//! a division-by-zero failure rather than silently producing `NaN`/`Inf`.

use nalgebra::DMatrix;

use crate::error::AppError;

/// Rescale each of the `phases` interleaved row groups so it sums to
/// `1/phases`. Takes the kernel by value and returns the normalized kernel.
pub fn normalize_phases(mut kernel: DMatrix<f64>, phases: i64) -> Result<DMatrix<f64>, AppError> {
    if phases <= 0 {
        return Err(AppError::invalid_argument(format!(
            "phase count must be a positive integer, got {phases}"
        )));
    }
    let phases = phases as usize;
    let n = kernel.nrows();

    // A phase with no rows (phases > N) sums to zero and is rejected below,
    // matching the strided-subsequence contract.
    for phase in 0..phases {
        let sum: f64 = (phase..n).step_by(phases).map(|r| kernel.row(r).sum()).sum();

        if sum == 0.0 {
            return Err(AppError::division_by_zero(format!(
                "normalization phase {phase} sums to zero"
            )));
        }
        if !sum.is_finite() {
            return Err(AppError::invalid_argument(format!(
                "normalization phase {phase} has non-finite sum {sum}"
            )));
        }

        let scale = 1.0 / (sum * phases as f64);
        for r in (phase..n).step_by(phases) {
            let mut row = kernel.row_mut(r);
            row *= scale;
        }
    }

    Ok(kernel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::kernel::expand::expand_separable;

    fn phase_sums(kernel: &DMatrix<f64>, phases: usize) -> Vec<f64> {
        (0..phases)
            .map(|phase| {
                (phase..kernel.nrows())
                    .step_by(phases)
                    .map(|r| kernel.row(r).sum())
                    .sum()
            })
            .collect()
    }

    #[test]
    fn each_phase_sums_to_reciprocal_phase_count() {
        let coords = crate::math::sample_grid(4, 2).unwrap();
        let kernel = expand_separable(&crate::math::sinc_profile(&coords));
        let normalized = normalize_phases(kernel, 2).unwrap();

        for (phase, sum) in phase_sums(&normalized, 2).iter().enumerate() {
            assert!((sum - 0.5).abs() < 1e-12, "phase {phase} sums to {sum}");
        }
    }

    #[test]
    fn single_phase_normalizes_to_unit_total() {
        let kernel = expand_separable(&[0.5, 1.0, 0.5]);
        let normalized = normalize_phases(kernel, 1).unwrap();
        let total: f64 = normalized.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_phase_is_reported_not_propagated() {
        // A Lanczos a=1 profile on [-1, 0, 1] is zero everywhere but the
        // center, so striding with 3 phases leaves phases 0 and 2 all-zero.
        let coords = crate::math::sample_grid(2, 1).unwrap();
        let profile = crate::math::lanczos_profile(&coords, 1).unwrap();
        let kernel = expand_separable(&profile);

        let err = normalize_phases(kernel, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
        assert!(err.to_string().contains("phase 0"));
    }

    #[test]
    fn rejects_non_positive_phase_count() {
        let kernel = expand_separable(&[1.0]);
        let err = normalize_phases(kernel, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
