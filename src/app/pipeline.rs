//! Shared "generate pipeline" logic used by the CLI front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! grid -> profile -> 2D kernel -> (optional) normalization -> stats
//!
//! The CLI can then focus on presentation (printing, plotting, exports).

use nalgebra::DMatrix;

use crate::domain::KernelConfig;
use crate::error::AppError;
use crate::kernel::generate_kernel;
use crate::report::{compute_stats, phase_sums, KernelStats};

/// All computed outputs of a single kernel run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub kernel: DMatrix<f64>,
    pub stats: KernelStats,
    /// Per-phase sums, present only for normalized runs.
    pub phase_sums: Option<Vec<f64>>,
}

/// Execute the full generation pipeline and return the computed outputs.
pub fn run_generate(config: &KernelConfig) -> Result<RunOutput, AppError> {
    let kernel = generate_kernel(
        &config.spec,
        config.width,
        config.samples_per_unit,
        config.normalize,
    )?;

    let stats = compute_stats(&kernel);
    let sums = config
        .normalize
        .then(|| phase_sums(&kernel, config.samples_per_unit as usize));

    Ok(RunOutput {
        kernel,
        stats,
        phase_sums: sums,
    })
}
