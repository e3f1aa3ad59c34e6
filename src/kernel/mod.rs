//! 2D kernel engine: separable expansion, direct Gaussian evaluation,
//! per-phase normalization, and the generation facade.

pub mod expand;
pub mod generate;
pub mod normalize;

pub use expand::*;
pub use generate::*;
pub use normalize::*;
