//! Formatted terminal output for a kernel run.
//!
//! We keep formatting code in one place so:
//! - the math/kernel code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::KernelConfig;
use crate::report::KernelStats;

/// Format the full run summary (requested kernel + computed statistics).
pub fn format_run_summary(
    config: &KernelConfig,
    stats: &KernelStats,
    phase_sums: Option<&[f64]>,
) -> String {
    let mut out = String::new();

    out.push_str("=== fk - Filter Kernel Generator ===\n");
    out.push_str(&format!(
        "Kernel: {}\n",
        config.spec.describe(config.width, config.samples_per_unit)
    ));
    out.push_str(&format!(
        "Grid: [{:.2}, {:.2}] | {} samples/unit | N={}\n",
        -(config.width as f64) / 2.0,
        config.width as f64 / 2.0,
        config.samples_per_unit,
        config.samples_count(),
    ));
    out.push_str(&format!("Normalized: {}\n", config.normalize));

    out.push_str("\nKernel statistics:\n");
    out.push_str(&format!("- center: {:.6}\n", stats.center));
    out.push_str(&format!("- min   : {:.6}\n", stats.min));
    out.push_str(&format!("- max   : {:.6}\n", stats.max));
    out.push_str(&format!("- total : {:.6}\n", stats.total));

    if let Some(sums) = phase_sums {
        out.push_str(&format!("- phase sums: {}\n", fmt_vec(sums)));
    }

    out
}

fn fmt_vec(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{v:.6}")).collect();
    format!("[{}]", parts.join(", "))
}
