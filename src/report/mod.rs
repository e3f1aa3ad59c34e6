//! Reporting utilities: kernel summary statistics and formatted terminal output.

pub mod format;

pub use format::*;

use nalgebra::DMatrix;

/// Summary stats about a generated kernel.
#[derive(Debug, Clone)]
pub struct KernelStats {
    pub size: usize,
    /// Value at the grid center (the kernel's peak for all five families).
    pub center: f64,
    pub min: f64,
    pub max: f64,
    /// Sum of all taps (overall DC gain).
    pub total: f64,
}

/// Compute summary statistics for a kernel.
pub fn compute_stats(kernel: &DMatrix<f64>) -> KernelStats {
    let n = kernel.nrows();
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut total = 0.0;
    for &v in kernel.iter() {
        min = min.min(v);
        max = max.max(v);
        total += v;
    }
    KernelStats {
        size: n,
        center: kernel[(n / 2, n / 2)],
        min,
        max,
        total,
    }
}

/// Sum of each interleaved row group (one entry per phase).
pub fn phase_sums(kernel: &DMatrix<f64>, phases: usize) -> Vec<f64> {
    (0..phases)
        .map(|phase| {
            (phase..kernel.nrows())
                .step_by(phases)
                .map(|r| kernel.row(r).sum())
                .sum()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_on_tiny_kernel() {
        let kernel = DMatrix::from_row_slice(3, 3, &[0.0, 1.0, 0.0, 1.0, 4.0, 1.0, 0.0, 1.0, 0.0]);
        let stats = compute_stats(&kernel);
        assert_eq!(stats.size, 3);
        assert_eq!(stats.center, 4.0);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.total, 8.0);
    }

    #[test]
    fn phase_sums_split_rows_by_stride() {
        let kernel = DMatrix::from_row_slice(4, 2, &[1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0]);
        let sums = phase_sums(&kernel, 2);
        assert_eq!(sums, vec![8.0, 12.0]);
    }
}
