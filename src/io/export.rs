//! Export a kernel as a dense CSV matrix.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts: one kernel row per line, no header, shortest round-trip float
//! formatting so values survive a reload bit-exactly.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use nalgebra::DMatrix;

use crate::error::AppError;

/// Write the kernel matrix to a CSV file.
pub fn write_kernel_csv(path: &Path, kernel: &DMatrix<f64>) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::io(format!("Failed to create export CSV '{}': {e}", path.display()))
    })?;

    for r in 0..kernel.nrows() {
        let row: Vec<String> = kernel.row(r).iter().map(|v| format!("{v}")).collect();
        writeln!(file, "{}", row.join(","))
            .map_err(|e| AppError::io(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}
