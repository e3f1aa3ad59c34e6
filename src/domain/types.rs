//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory while generating kernels
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The closed set of supported filter families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Sinc,
    Lanczos,
    Bicubic,
    CubicBspline,
    Gaussian,
}

impl FilterKind {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            FilterKind::Sinc => "Sinc",
            FilterKind::Lanczos => "Lanczos",
            FilterKind::Bicubic => "Bicubic",
            FilterKind::CubicBspline => "Cubic B-Spline",
            FilterKind::Gaussian => "Gaussian",
        }
    }

    /// Short name used in default output file names.
    pub fn slug(self) -> &'static str {
        match self {
            FilterKind::Sinc => "sinc",
            FilterKind::Lanczos => "lanczos",
            FilterKind::Bicubic => "bicubic",
            FilterKind::CubicBspline => "cubicbspline",
            FilterKind::Gaussian => "gaussian",
        }
    }
}

/// A filter family together with its family-specific parameters.
///
/// The family set is fixed and small, so dispatch is a single `match` in the
/// generation facade rather than any open-ended registration scheme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "lowercase")]
pub enum FilterSpec {
    Sinc,
    /// Windowed sinc with integer kernel half-width `a >= 1`.
    Lanczos { a: i64 },
    /// Piecewise cubic with free parameter `a` (conventionally negative).
    Bicubic { a: f64 },
    CubicBspline,
    /// Isotropic Gaussian with standard deviation `sigma > 0`.
    Gaussian { sigma: f64 },
}

impl FilterSpec {
    pub fn kind(&self) -> FilterKind {
        match self {
            FilterSpec::Sinc => FilterKind::Sinc,
            FilterSpec::Lanczos { .. } => FilterKind::Lanczos,
            FilterSpec::Bicubic { .. } => FilterKind::Bicubic,
            FilterSpec::CubicBspline => FilterKind::CubicBspline,
            FilterSpec::Gaussian { .. } => FilterKind::Gaussian,
        }
    }

    /// One-line description of the requested kernel, e.g.
    /// `Lanczos a=3 ([-2, 2], 9x9)`.
    pub fn describe(&self, width: i64, samples_per_unit: i64) -> String {
        let n = width * samples_per_unit + 1;
        let half = width as f64 / 2.0;
        let label = self.kind().display_name();
        let range = format!("([{}, {}], {n}x{n})", -half, half);
        match self {
            FilterSpec::Sinc | FilterSpec::CubicBspline => format!("{label} {range}"),
            FilterSpec::Lanczos { a } => format!("{label} a={a} {range}"),
            FilterSpec::Bicubic { a } => format!("{label} a={a} {range}"),
            FilterSpec::Gaussian { sigma } => format!("{label} sigma={sigma} {range}"),
        }
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct KernelConfig {
    pub spec: FilterSpec,

    /// Sampling spans `[-width/2, +width/2]`.
    pub width: i64,
    /// Sampling density per unit of distance; also the polyphase count.
    pub samples_per_unit: i64,

    /// Rescale each sub-sampling phase to sum to `1/samples_per_unit`.
    pub normalize: bool,

    pub show: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    /// Kernel JSON output path; defaults to `{family}-{width}-{spu}.json`.
    pub output: Option<PathBuf>,
    /// Optional dense CSV matrix export.
    pub export_csv: Option<PathBuf>,
}

impl KernelConfig {
    /// Grid side length `N = width * samples_per_unit + 1`.
    pub fn samples_count(&self) -> i64 {
        self.width * self.samples_per_unit + 1
    }
}

/// A saved kernel file (JSON).
///
/// This is the "portable" representation of a generated kernel: the filter
/// spec, the run metadata, and the dense matrix itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KernelFile {
    pub tool: String,
    /// RFC 3339 generation timestamp.
    pub generated: String,
    pub filter: FilterSpec,
    pub width: i64,
    pub samples_per_unit: i64,
    pub normalized: bool,
    /// Grid side length; `data` is `size` rows of `size` values.
    pub size: usize,
    pub data: Vec<Vec<f64>>,
}
