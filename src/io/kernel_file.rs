//! Read/write kernel JSON files.
//!
//! Kernel JSON is the "portable" representation of a generated kernel:
//! - the filter spec (family + parameters)
//! - run metadata (grid width, sampling density, normalization flag)
//! - the dense matrix itself, row by row
//!
//! The schema is defined by `domain::KernelFile`.

use std::fs::File;
use std::path::Path;

use chrono::Local;
use nalgebra::DMatrix;

use crate::domain::{KernelConfig, KernelFile};
use crate::error::AppError;

/// Write a kernel JSON file.
pub fn write_kernel_json(
    path: &Path,
    config: &KernelConfig,
    kernel: &DMatrix<f64>,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::io(format!("Failed to create kernel JSON '{}': {e}", path.display()))
    })?;

    let doc = KernelFile {
        tool: "fk".to_string(),
        generated: Local::now().to_rfc3339(),
        filter: config.spec,
        width: config.width,
        samples_per_unit: config.samples_per_unit,
        normalized: config.normalize,
        size: kernel.nrows(),
        data: matrix_rows(kernel),
    };

    serde_json::to_writer_pretty(file, &doc)
        .map_err(|e| AppError::io(format!("Failed to write kernel JSON: {e}")))?;

    Ok(())
}

/// Read a kernel JSON file.
pub fn read_kernel_json(path: &Path) -> Result<KernelFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::io(format!("Failed to open kernel JSON '{}': {e}", path.display()))
    })?;
    let doc: KernelFile = serde_json::from_reader(file)
        .map_err(|e| AppError::io(format!("Invalid kernel JSON: {e}")))?;
    Ok(doc)
}

/// Rebuild the dense matrix from a loaded kernel file.
pub fn kernel_from_file(doc: &KernelFile) -> Result<DMatrix<f64>, AppError> {
    let n = doc.size;
    if doc.data.len() != n || doc.data.iter().any(|row| row.len() != n) {
        return Err(AppError::invalid_argument(format!(
            "kernel data does not form a {n}x{n} matrix"
        )));
    }
    let flat: Vec<f64> = doc.data.iter().flatten().copied().collect();
    Ok(DMatrix::from_row_slice(n, n, &flat))
}

fn matrix_rows(kernel: &DMatrix<f64>) -> Vec<Vec<f64>> {
    (0..kernel.nrows())
        .map(|r| kernel.row(r).iter().copied().collect())
        .collect()
}
